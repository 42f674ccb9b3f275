//! The progression service: XP awards, level derivation, login streaks,
//! and achievement unlocking over a per-user persisted record.
//!
//! The service is the only writer of [`UserProgression`] records. Every
//! operation is a read-modify-write over one user's record, serialized by
//! a per-user async lock so concurrent calls for the same user cannot lose
//! updates; operations on different users run independently.
//!
//! Storage is abstracted behind the [`ProgressionStore`] port. The engine
//! never retries storage failures; they propagate to the caller, who
//! should treat them as non-fatal to the triggering action.
//!
//! [`UserProgression`]: progression_types::UserProgression

pub mod error;
pub mod memory;
pub mod service;
pub mod store;
pub mod streak;

pub use error::ProgressionError;
pub use memory::MemoryStore;
pub use service::{ActionOutcome, GameData, ProgressionService, XpAward};
pub use store::{ProgressionStore, StoreError};
pub use streak::StreakDecision;
