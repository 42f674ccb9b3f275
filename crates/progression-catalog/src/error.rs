use progression_types::AchievementId;

/// Errors produced when constructing catalog data.
///
/// These only fire on hand-built tables; the `Default` catalogs are
/// covered by tests and always construct.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("level table is empty")]
    EmptyLevelTable,
    #[error("level table must start at 0, got {got}")]
    LevelTableMustStartAtZero { got: u64 },
    #[error("level table not strictly ascending at index {index}: {prev} >= {next}")]
    NonAscendingThreshold { index: usize, prev: u64, next: u64 },
    #[error("duplicate achievement id '{0}'")]
    DuplicateAchievement(AchievementId),
    #[error("achievement '{0}' has a zero XP reward")]
    ZeroXpReward(AchievementId),
}
