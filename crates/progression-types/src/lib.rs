pub mod action;
pub mod achievement_id;
pub mod progression;
pub mod stats;
pub mod user_id;

pub use action::ActionEvent;
pub use achievement_id::AchievementId;
pub use progression::{UserProgression, XpGain};
pub use stats::{StatKind, Stats};
pub use user_id::UserId;
