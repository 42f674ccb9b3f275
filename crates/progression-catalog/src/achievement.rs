use progression_types::{ActionEvent, AchievementId, StatKind, Stats};
use serde::{Deserialize, Serialize};

/// Cosmetic classification of an achievement. Carries no mechanical
/// weight; unlock difficulty is entirely in the rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// The unlock condition of an achievement, as a closed enum.
///
/// Each variant is inherently scoped: it only matches the events that can
/// satisfy it, so evaluating a rule against an unrelated event is a cheap
/// non-match rather than an error. Conditions are inclusive (`>=`) so a
/// rule still fires the first time its threshold is crossed even if the
/// exact boundary event was never evaluated.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnlockRule {
    /// A lifetime counter reached `count`. Evaluated against the stats
    /// snapshot after the increment for the triggering action, and only on
    /// events that bump `stat`. Unconditional on-action achievements are
    /// expressed as `count: 1`.
    StatReached { stat: StatKind, count: u64 },
    /// A task was completed before its deadline.
    TaskBeforeDeadline,
    /// The login streak reached `days` consecutive days.
    StreakReached { days: u32 },
    /// An XP award pushed the user to `level` or beyond.
    LevelReached { level: u32 },
}

impl UnlockRule {
    /// Whether this rule is satisfied by `event` given the post-increment
    /// stats snapshot.
    pub fn is_satisfied(&self, event: &ActionEvent, stats: &Stats) -> bool {
        match self {
            Self::StatReached { stat, count } => {
                event.stat() == Some(*stat) && stats.get(*stat) >= *count
            }
            Self::TaskBeforeDeadline => matches!(
                event,
                ActionEvent::TaskCompleted {
                    before_deadline: true
                }
            ),
            Self::StreakReached { days } => match event {
                ActionEvent::StreakUpdated { streak } => streak >= days,
                _ => false,
            },
            Self::LevelReached { level } => match event {
                ActionEvent::LevelReached { level: reached } => reached >= level,
                _ => false,
            },
        }
    }
}

/// One catalog entry. Immutable once the registry is built.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Achievement {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    /// Emoji or asset key rendered by the UI badge catalog.
    pub icon: String,
    /// Bonus XP granted once on unlock. Always positive.
    pub xp_reward: u64,
    pub rarity: Rarity,
    pub rule: UnlockRule,
}
