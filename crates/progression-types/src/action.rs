use crate::stats::StatKind;
use serde::{Deserialize, Serialize};

/// All action events the engine reacts to, grouped by origin.
///
/// This is a closed union: each variant carries its own typed payload, so
/// achievement rules dispatch through an exhaustive match instead of a
/// string-keyed switch. New action kinds are added as variants here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionEvent {
    // ── Emitted by external collaborators ──
    /// A task was marked done. `before_deadline` comes from the task's
    /// due-date comparison at completion time.
    TaskCompleted { before_deadline: bool },
    /// A task was created on a board.
    TaskCreated,
    /// A project listing was published.
    ProjectCreated,
    /// A project was moved to its completed state.
    ProjectCompleted,
    /// A comment was posted on a task or project.
    CommentAdded,
    /// A project milestone was reached.
    MilestoneReached,
    /// A code review was submitted.
    CodeReview,
    /// A chat message was sent.
    MessageSent,
    /// A teammate marked the user's answer as helpful.
    HelpedTeammate,

    // ── Emitted by the engine itself ──
    /// Login streak advanced to `streak` consecutive days. Fired by the
    /// streak update so streak-based achievements can be evaluated.
    StreakUpdated { streak: u32 },
    /// A new level was reached via an XP award. Fired once per level-up so
    /// level-threshold achievements can be evaluated.
    LevelReached { level: u32 },
}

impl ActionEvent {
    /// Variant name as a static string for XP-gain reasons and logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::TaskCompleted { .. } => "TaskCompleted",
            Self::TaskCreated => "TaskCreated",
            Self::ProjectCreated => "ProjectCreated",
            Self::ProjectCompleted => "ProjectCompleted",
            Self::CommentAdded => "CommentAdded",
            Self::MilestoneReached => "MilestoneReached",
            Self::CodeReview => "CodeReview",
            Self::MessageSent => "MessageSent",
            Self::HelpedTeammate => "HelpedTeammate",
            Self::StreakUpdated { .. } => "StreakUpdated",
            Self::LevelReached { .. } => "LevelReached",
        }
    }

    /// The lifetime stats counter this event increments, if any.
    ///
    /// Engine-emitted variants do not touch counters; they exist only to
    /// scope achievement evaluation.
    pub fn stat(&self) -> Option<StatKind> {
        match self {
            Self::TaskCompleted { .. } => Some(StatKind::TasksCompleted),
            Self::TaskCreated => Some(StatKind::TasksCreated),
            Self::ProjectCreated => Some(StatKind::ProjectsCreated),
            Self::ProjectCompleted => Some(StatKind::ProjectsCompleted),
            Self::CommentAdded => Some(StatKind::CommentsAdded),
            Self::MilestoneReached => Some(StatKind::MilestonesReached),
            Self::CodeReview => Some(StatKind::CodeReviews),
            Self::MessageSent => Some(StatKind::MessagesSent),
            Self::HelpedTeammate => Some(StatKind::HelpedTeammates),
            Self::StreakUpdated { .. } | Self::LevelReached { .. } => None,
        }
    }

    /// Whether this event originated inside the engine rather than from an
    /// external collaborator.
    pub fn is_engine_emitted(&self) -> bool {
        matches!(
            self,
            Self::StreakUpdated { .. } | Self::LevelReached { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_external_event_maps_to_a_stat() {
        let external = [
            ActionEvent::TaskCompleted {
                before_deadline: false,
            },
            ActionEvent::TaskCreated,
            ActionEvent::ProjectCreated,
            ActionEvent::ProjectCompleted,
            ActionEvent::CommentAdded,
            ActionEvent::MilestoneReached,
            ActionEvent::CodeReview,
            ActionEvent::MessageSent,
            ActionEvent::HelpedTeammate,
        ];
        for event in &external {
            assert!(!event.is_engine_emitted());
            assert!(event.stat().is_some(), "{} has no stat", event.name());
        }
    }

    #[test]
    fn engine_emitted_events_do_not_touch_counters() {
        assert_eq!(ActionEvent::StreakUpdated { streak: 7 }.stat(), None);
        assert_eq!(ActionEvent::LevelReached { level: 5 }.stat(), None);
    }

    #[test]
    fn event_round_trips_through_json() {
        let event = ActionEvent::TaskCompleted {
            before_deadline: true,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: ActionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
