use crate::error::ProgressionError;
use crate::store::{ProgressionStore, StoreError};
use crate::streak::{self, StreakDecision};
use chrono::{DateTime, Utc};
use progression_catalog::{Achievement, AchievementRegistry, LevelTable, XpAwards};
use progression_types::{ActionEvent, AchievementId, Stats, UserId, UserProgression, XpGain};
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info};

/// XP-gain reason recorded for aggregate achievement rewards.
pub const REASON_ACHIEVEMENTS: &str = "Achievements unlocked";
/// XP-gain reason for the first qualifying login of a day.
pub const REASON_DAILY_LOGIN: &str = "Daily login";
/// XP-gain reason when the login also extends the streak.
pub const REASON_STREAK_LOGIN: &str = "Daily login streak";

/// Result of one XP award.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct XpAward {
    /// Total XP after the award (including any achievement bonus it
    /// triggered).
    pub xp: u64,
    pub level: u32,
    /// True iff the awarded amount itself crossed a level boundary.
    pub leveled_up: bool,
}

/// Result of processing one action event end to end.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ActionOutcome {
    pub xp: u64,
    pub level: u32,
    /// True iff the user's level is higher than before the action.
    pub leveled_up: bool,
    /// Achievements newly unlocked by this action, for UI toasts.
    pub unlocked: Vec<Achievement>,
}

/// Read-only snapshot for UI consumption. All-zero shape for users with no
/// record.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameData {
    pub xp: u64,
    pub level: u32,
    /// Cumulative XP at which the next level begins.
    pub next_level_xp: u64,
    /// Fraction of the way to the next level, `0.0..=1.0`.
    pub progress_to_next_level: f64,
    pub achievements: BTreeSet<AchievementId>,
    /// Unlocked achievement definitions resolved against the registry.
    /// Ids the current catalog no longer carries are omitted.
    pub badges: Vec<Achievement>,
    pub streak: u32,
    pub last_login: Option<DateTime<Utc>>,
    pub stats: Stats,
}

/// Level movement of one in-memory award.
struct AppliedAward {
    level: u32,
    leveled_up: bool,
}

/// Orchestrates XP awards, achievement evaluation, and streak updates.
///
/// Sole writer of the progression store. Each operation is a single
/// read-modify-write: load (materializing the all-zero default for new
/// users), mutate in memory, persist once. A per-user lock registry keeps
/// at most one mutation in flight per user; different users proceed in
/// parallel.
pub struct ProgressionService {
    store: Arc<dyn ProgressionStore>,
    levels: LevelTable,
    awards: XpAwards,
    registry: AchievementRegistry,
    locks: Mutex<HashMap<UserId, Arc<Mutex<()>>>>,
}

impl ProgressionService {
    /// Service over `store` with the production catalogs.
    pub fn new(store: Arc<dyn ProgressionStore>) -> Self {
        Self::with_catalogs(
            store,
            LevelTable::default(),
            XpAwards::default(),
            AchievementRegistry::default(),
        )
    }

    /// Service with injected catalogs. Tests substitute smaller tables.
    pub fn with_catalogs(
        store: Arc<dyn ProgressionStore>,
        levels: LevelTable,
        awards: XpAwards,
        registry: AchievementRegistry,
    ) -> Self {
        Self {
            store,
            levels,
            awards,
            registry,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// The level table in use, for UI progress rendering.
    pub fn levels(&self) -> &LevelTable {
        &self.levels
    }

    /// The XP award table in use.
    pub fn awards(&self) -> &XpAwards {
        &self.awards
    }

    /// The achievement catalog in use, for UI badge catalogs.
    pub fn registry(&self) -> &AchievementRegistry {
        &self.registry
    }

    /// Add `amount` XP for `reason` and recompute the level.
    ///
    /// Rejects `amount == 0` with [`ProgressionError::InvalidAmount`]
    /// before any state is touched. If the award crosses a level boundary,
    /// level-threshold achievements are evaluated for the level reached;
    /// their bonus XP is applied in the same write.
    pub async fn award_xp(
        &self,
        user: &UserId,
        amount: u64,
        reason: &str,
    ) -> Result<XpAward, ProgressionError> {
        if amount == 0 {
            return Err(ProgressionError::InvalidAmount { amount });
        }
        let lock = self.user_lock(user).await;
        let _guard = lock.lock().await;

        let mut record = self.load_or_default(user).await?;
        let applied = self.award_and_evaluate(user, &mut record, amount, reason);
        self.store.save(user, &record).await?;

        Ok(XpAward {
            xp: record.xp,
            level: record.level,
            leveled_up: applied.leveled_up,
        })
    }

    /// Evaluate achievement rules for `event` against the current record.
    ///
    /// Already-unlocked achievements are skipped unconditionally. All
    /// newly satisfied achievements are unioned into the record, their
    /// rewards summed into one aggregate XP award, and the record is
    /// persisted once. Returns the newly unlocked definitions; an event no
    /// rule is scoped to simply yields an empty list, with nothing
    /// written.
    pub async fn check_achievements(
        &self,
        user: &UserId,
        event: &ActionEvent,
    ) -> Result<Vec<Achievement>, ProgressionError> {
        let lock = self.user_lock(user).await;
        let _guard = lock.lock().await;

        let mut record = self.load_or_default(user).await?;
        let unlocked = self.apply_achievements(user, &mut record, event);
        if !unlocked.is_empty() {
            self.store.save(user, &record).await?;
        }
        Ok(unlocked)
    }

    /// Process one action event end to end: bump the stats counter, award
    /// the action's base XP, recompute the level, evaluate achievements
    /// against the post-increment snapshot, apply bonus XP, and persist
    /// the record once.
    pub async fn record_action(
        &self,
        user: &UserId,
        event: &ActionEvent,
    ) -> Result<ActionOutcome, ProgressionError> {
        let lock = self.user_lock(user).await;
        let _guard = lock.lock().await;

        let mut record = self.load_or_default(user).await?;
        let level_before = record.level;

        if let Some(stat) = event.stat() {
            let value = record.stats.bump(stat);
            debug!(user = %user, stat = %stat, value, "stat incremented");
        }

        let mut unlocked = Vec::new();
        let base = self.awards.for_action(event);
        if base > 0 {
            let applied = self.apply_award(&mut record, base, event.name());
            if applied.leveled_up {
                unlocked.extend(self.apply_achievements(
                    user,
                    &mut record,
                    &ActionEvent::LevelReached {
                        level: applied.level,
                    },
                ));
            }
        }
        unlocked.extend(self.apply_achievements(user, &mut record, event));

        self.store.save(user, &record).await?;

        Ok(ActionOutcome {
            xp: record.xp,
            level: record.level,
            leveled_up: record.level > level_before,
            unlocked,
        })
    }

    /// Update the login streak using the current wall-clock time.
    pub async fn update_login_streak(&self, user: &UserId) -> Result<u32, ProgressionError> {
        self.update_login_streak_at(user, Utc::now()).await
    }

    /// Update the login streak as of `now`.
    ///
    /// Same-calendar-day re-logins are a full no-op: no XP, no write, the
    /// current streak is returned unchanged. A consecutive-day login
    /// extends the streak and awards the daily login XP plus the streak
    /// bonus; a gap resets the streak to 1 with the daily XP only.
    pub async fn update_login_streak_at(
        &self,
        user: &UserId,
        now: DateTime<Utc>,
    ) -> Result<u32, ProgressionError> {
        let lock = self.user_lock(user).await;
        let _guard = lock.lock().await;

        let mut record = self.load_or_default(user).await?;
        match streak::decide(record.streak, record.last_login, now) {
            StreakDecision::SameDay => {
                debug!(user = %user, streak = record.streak, "same-day login, streak unchanged");
                return Ok(record.streak);
            }
            StreakDecision::Start | StreakDecision::Reset => {
                record.streak = 1;
                record.last_login = Some(now);
                self.award_and_evaluate(
                    user,
                    &mut record,
                    self.awards.daily_login,
                    REASON_DAILY_LOGIN,
                );
            }
            StreakDecision::Extend { next } => {
                record.streak = next;
                record.last_login = Some(now);
                self.award_and_evaluate(
                    user,
                    &mut record,
                    self.awards.daily_login + self.awards.streak_bonus,
                    REASON_STREAK_LOGIN,
                );
                self.apply_achievements(
                    user,
                    &mut record,
                    &ActionEvent::StreakUpdated { streak: next },
                );
            }
        }
        self.store.save(user, &record).await?;

        debug!(user = %user, streak = record.streak, "login streak updated");
        Ok(record.streak)
    }

    /// Read-only snapshot for UI layers. No side effects: a user with no
    /// record reads as the all-zero shape and nothing is written.
    pub async fn game_data(&self, user: &UserId) -> Result<GameData, ProgressionError> {
        let record = self
            .store
            .load(user)
            .await?
            .unwrap_or_default();

        let badges = record
            .achievements
            .iter()
            .filter_map(|id| self.registry.get(id))
            .cloned()
            .collect();

        Ok(GameData {
            xp: record.xp,
            level: record.level,
            next_level_xp: self.levels.next_level_xp(record.level),
            progress_to_next_level: self.levels.progress_to_next(record.xp),
            achievements: record.achievements,
            badges,
            streak: record.streak,
            last_login: record.last_login,
            stats: record.stats,
        })
    }

    /// The serialization point for per-user mutations: one lock per user,
    /// created on first use. Entries no operation holds any more are swept
    /// on the next acquisition, so the registry tracks users with work in
    /// flight rather than every user ever touched.
    async fn user_lock(&self, user: &UserId) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().await;
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        locks.entry(*user).or_default().clone()
    }

    async fn load_or_default(&self, user: &UserId) -> Result<UserProgression, StoreError> {
        Ok(self.store.load(user).await?.unwrap_or_default())
    }

    /// Apply one XP award in memory: bump `xp`, rederive `level`, record
    /// the gain. `level` is never written independently of this path.
    fn apply_award(&self, record: &mut UserProgression, amount: u64, reason: &str) -> AppliedAward {
        let level_before = record.level;
        record.xp = record.xp.saturating_add(amount);
        record.level = self.levels.level_for_xp(record.xp);
        record.last_xp_gain = Some(XpGain {
            amount,
            reason: reason.to_string(),
            at: Utc::now(),
        });

        let leveled_up = record.level > level_before;
        if leveled_up {
            info!(level = record.level, "level up");
        }
        AppliedAward {
            level: record.level,
            leveled_up,
        }
    }

    /// Apply an award and, if it crossed a level boundary, evaluate
    /// level-threshold achievements for the level reached.
    fn award_and_evaluate(
        &self,
        user: &UserId,
        record: &mut UserProgression,
        amount: u64,
        reason: &str,
    ) -> AppliedAward {
        let applied = self.apply_award(record, amount, reason);
        if applied.leveled_up {
            self.apply_achievements(
                user,
                record,
                &ActionEvent::LevelReached {
                    level: applied.level,
                },
            );
        }
        applied
    }

    /// Evaluate the registry against `event`, union newly satisfied ids
    /// into the record, and apply their rewards as one aggregate award.
    ///
    /// When that aggregate award itself crosses a level boundary, the
    /// level-threshold achievements are evaluated once more for the level
    /// reached. The bonus from that secondary round is applied without a
    /// further level check, so the chain is bounded at one extra round.
    fn apply_achievements(
        &self,
        user: &UserId,
        record: &mut UserProgression,
        event: &ActionEvent,
    ) -> Vec<Achievement> {
        let (mut unlocked, applied) = self.unlock_and_reward(user, record, event);
        if let Some(applied) = applied {
            if applied.leveled_up {
                let (secondary, _) = self.unlock_and_reward(
                    user,
                    record,
                    &ActionEvent::LevelReached {
                        level: applied.level,
                    },
                );
                unlocked.extend(secondary);
            }
        }
        unlocked
    }

    /// One unlock round: union the newly satisfied ids into the record and
    /// apply their rewards as one aggregate award. Returns the unlocked
    /// definitions plus the applied award, if any reward was granted.
    fn unlock_and_reward(
        &self,
        user: &UserId,
        record: &mut UserProgression,
        event: &ActionEvent,
    ) -> (Vec<Achievement>, Option<AppliedAward>) {
        let unlocked: Vec<Achievement> = self
            .registry
            .newly_satisfied(event, &record.stats, &record.achievements)
            .into_iter()
            .cloned()
            .collect();
        if unlocked.is_empty() {
            return (unlocked, None);
        }

        let mut bonus: u64 = 0;
        for achievement in &unlocked {
            record.achievements.insert(achievement.id.clone());
            bonus = bonus.saturating_add(achievement.xp_reward);
            info!(
                user = %user,
                achievement = %achievement.id,
                reward = achievement.xp_reward,
                "achievement unlocked"
            );
        }
        let applied = self.apply_award(record, bonus, REASON_ACHIEVEMENTS);
        (unlocked, Some(applied))
    }
}
