use crate::error::CatalogError;
use serde::{Deserialize, Serialize};

/// Ascending cumulative-XP thresholds defining level boundaries.
///
/// `thresholds[i]` is the total XP at which level `i + 1` begins, so
/// `thresholds[0]` is always 0 (everyone starts at level 1). The table is
/// injectable (tests substitute short tables) and validated on
/// construction so lookups never have to re-check shape.
///
/// There is no hard level cap: past the final tabulated level, the next
/// level requirement is defined as double the last threshold.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelTable {
    thresholds: Vec<u64>,
}

impl LevelTable {
    /// Build a table from cumulative thresholds.
    ///
    /// Requirements: non-empty, first entry 0, strictly ascending.
    pub fn new(thresholds: Vec<u64>) -> Result<Self, CatalogError> {
        let first = *thresholds.first().ok_or(CatalogError::EmptyLevelTable)?;
        if first != 0 {
            return Err(CatalogError::LevelTableMustStartAtZero { got: first });
        }
        for (index, pair) in thresholds.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(CatalogError::NonAscendingThreshold {
                    index: index + 1,
                    prev: pair[0],
                    next: pair[1],
                });
            }
        }
        Ok(Self { thresholds })
    }

    /// The level for a cumulative XP total.
    ///
    /// Returns the highest level whose threshold does not exceed `xp`;
    /// total over all inputs, never below 1.
    pub fn level_for_xp(&self, xp: u64) -> u32 {
        // thresholds[0] == 0 always passes, so the partition point is >= 1.
        self.thresholds.partition_point(|t| *t <= xp) as u32
    }

    /// Cumulative XP required to advance from `level` to `level + 1`.
    ///
    /// Past the final tabulated level this is double the last threshold,
    /// keeping progress bars meaningful without a cap.
    pub fn next_level_xp(&self, level: u32) -> u64 {
        match self.thresholds.get(level as usize) {
            Some(threshold) => *threshold,
            // new() guarantees non-empty
            None => self.thresholds.last().copied().unwrap_or(0) * 2,
        }
    }

    /// The highest tabulated level.
    pub fn max_tabulated_level(&self) -> u32 {
        self.thresholds.len() as u32
    }

    /// Fraction of the way from the current level floor to the next level,
    /// in `0.0..=1.0`. UI progress-bar helper.
    pub fn progress_to_next(&self, xp: u64) -> f64 {
        let level = self.level_for_xp(xp);
        // level_for_xp clamps to the table, so the floor index is in range.
        let floor = self.thresholds[(level - 1) as usize];
        let next = self.next_level_xp(level);
        if next <= floor {
            return 1.0;
        }
        ((xp - floor) as f64 / (next - floor) as f64).min(1.0)
    }

    /// The raw thresholds, for UI progress rendering.
    pub fn thresholds(&self) -> &[u64] {
        &self.thresholds
    }
}

impl Default for LevelTable {
    /// The production table: 15 tabulated levels, level 2 at 100 XP.
    fn default() -> Self {
        Self {
            thresholds: vec![
                0, 100, 250, 500, 1_000, 1_750, 2_750, 4_000, 5_500, 7_500, 10_000, 13_000,
                16_500, 20_500, 25_000,
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> LevelTable {
        LevelTable::new(vec![0, 100, 250, 500]).unwrap()
    }

    #[test]
    fn rejects_empty_table() {
        assert!(matches!(
            LevelTable::new(vec![]),
            Err(CatalogError::EmptyLevelTable)
        ));
    }

    #[test]
    fn rejects_nonzero_start() {
        assert!(matches!(
            LevelTable::new(vec![50, 100]),
            Err(CatalogError::LevelTableMustStartAtZero { got: 50 })
        ));
    }

    #[test]
    fn rejects_non_ascending_thresholds() {
        assert!(matches!(
            LevelTable::new(vec![0, 100, 100]),
            Err(CatalogError::NonAscendingThreshold {
                index: 2,
                prev: 100,
                next: 100,
            })
        ));
    }

    #[test]
    fn threshold_exactness_at_every_boundary() {
        let table = small_table();
        for (i, threshold) in table.thresholds().to_vec().into_iter().enumerate() {
            assert_eq!(table.level_for_xp(threshold), i as u32 + 1);
            if i >= 1 {
                assert_eq!(table.level_for_xp(threshold - 1), i as u32);
            }
        }
    }

    #[test]
    fn level_is_monotone_in_xp() {
        let table = small_table();
        let mut previous = 0;
        for xp in 0..600 {
            let level = table.level_for_xp(xp);
            assert!(level >= previous, "level dropped at xp={xp}");
            previous = level;
        }
    }

    #[test]
    fn level_beyond_table_clamps_to_max() {
        let table = small_table();
        assert_eq!(table.max_tabulated_level(), 4);
        assert_eq!(table.level_for_xp(500), 4);
        assert_eq!(table.level_for_xp(u64::MAX), 4);
    }

    #[test]
    fn next_level_xp_doubles_past_the_table() {
        let table = small_table();
        assert_eq!(table.next_level_xp(1), 100);
        assert_eq!(table.next_level_xp(3), 500);
        assert_eq!(table.next_level_xp(4), 1_000);
        assert_eq!(table.next_level_xp(99), 1_000);
    }

    #[test]
    fn progress_fraction_tracks_position_within_the_level() {
        let table = small_table();
        assert_eq!(table.progress_to_next(0), 0.0);
        assert!((table.progress_to_next(50) - 0.5).abs() < 1e-9);
        assert_eq!(table.progress_to_next(100), 0.0);
        // Past the table: floor 500, next 1000.
        assert!((table.progress_to_next(750) - 0.5).abs() < 1e-9);
        assert_eq!(table.progress_to_next(10_000), 1.0);
    }

    #[test]
    fn default_table_starts_level_two_at_one_hundred() {
        let table = LevelTable::default();
        assert_eq!(table.level_for_xp(99), 1);
        assert_eq!(table.level_for_xp(100), 2);
        assert_eq!(table.next_level_xp(1), 100);
    }
}
