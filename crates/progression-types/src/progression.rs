use crate::achievement_id::AchievementId;
use crate::stats::Stats;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The most recent XP award, kept on the record for UI "+30 XP" flashes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpGain {
    pub amount: u64,
    pub reason: String,
    pub at: DateTime<Utc>,
}

/// Per-user progression record. Persistence-level struct, one per user.
///
/// `level` is always the level-table lookup of `xp`; the engine recomputes
/// it on every XP change and nothing else writes it. `xp` and every counter
/// in `stats` are non-decreasing over the record's lifetime; `achievements`
/// is append-only.
///
/// Records are materialized lazily: a user with no stored record reads as
/// `UserProgression::default()`, and the first mutation writes it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProgression {
    pub xp: u64,
    pub level: u32,
    pub achievements: BTreeSet<AchievementId>,
    pub streak: u32,
    /// Timestamp of the last streak-affecting login. `None` until the
    /// first-ever login; same-calendar-day re-logins do not move it.
    pub last_login: Option<DateTime<Utc>>,
    pub stats: Stats,
    pub last_xp_gain: Option<XpGain>,
}

impl Default for UserProgression {
    /// The all-zero shape: no XP, level 1, nothing unlocked, no streak.
    fn default() -> Self {
        Self {
            xp: 0,
            level: 1,
            achievements: BTreeSet::new(),
            streak: 0,
            last_login: None,
            stats: Stats::default(),
            last_xp_gain: None,
        }
    }
}

impl UserProgression {
    /// Whether the achievement is already unlocked.
    pub fn has_achievement(&self, id: &AchievementId) -> bool {
        self.achievements.contains(id)
    }
}
