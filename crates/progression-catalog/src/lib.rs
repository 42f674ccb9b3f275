//! Immutable catalogs consumed by the progression engine.
//!
//! Three pieces of fixed data plus their lookup logic:
//! - [`LevelTable`]: ascending cumulative-XP thresholds defining level
//!   boundaries, with a total `level_for_xp` lookup.
//! - [`XpAwards`]: XP granted per action, plus the daily-login and
//!   streak-bonus values.
//! - [`AchievementRegistry`]: the achievement definitions and their
//!   [`UnlockRule`]s, evaluated as an exhaustive match over typed events.
//!
//! All three are plain values rather than global singletons, so tests and
//! embedders can inject smaller tables. `Default` gives the production data.

pub mod achievement;
pub mod awards;
pub mod error;
pub mod levels;
pub mod registry;

pub use achievement::{Achievement, Rarity, UnlockRule};
pub use awards::XpAwards;
pub use error::CatalogError;
pub use levels::LevelTable;
pub use registry::AchievementRegistry;
