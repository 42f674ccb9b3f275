use serde::{Deserialize, Serialize};
use std::fmt;

/// Names one lifetime stats counter.
///
/// Kept separate from [`ActionEvent`](crate::ActionEvent) because several
/// consumers (achievement rules, UI progress bars) address counters without
/// holding the event that bumped them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatKind {
    TasksCompleted,
    TasksCreated,
    ProjectsCreated,
    ProjectsCompleted,
    CommentsAdded,
    MilestonesReached,
    CodeReviews,
    MessagesSent,
    HelpedTeammates,
}

impl StatKind {
    /// All counters, in persistence order.
    pub const ALL: [StatKind; 9] = [
        StatKind::TasksCompleted,
        StatKind::TasksCreated,
        StatKind::ProjectsCreated,
        StatKind::ProjectsCompleted,
        StatKind::CommentsAdded,
        StatKind::MilestonesReached,
        StatKind::CodeReviews,
        StatKind::MessagesSent,
        StatKind::HelpedTeammates,
    ];
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TasksCompleted => "tasks_completed",
            Self::TasksCreated => "tasks_created",
            Self::ProjectsCreated => "projects_created",
            Self::ProjectsCompleted => "projects_completed",
            Self::CommentsAdded => "comments_added",
            Self::MilestonesReached => "milestones_reached",
            Self::CodeReviews => "code_reviews",
            Self::MessagesSent => "messages_sent",
            Self::HelpedTeammates => "helped_teammates",
        };
        write!(f, "{name}")
    }
}

/// Lifetime counters for one user. Every field is non-decreasing: the only
/// mutation path is [`Stats::bump`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stats {
    pub tasks_completed: u64,
    pub tasks_created: u64,
    pub projects_created: u64,
    pub projects_completed: u64,
    pub comments_added: u64,
    pub milestones_reached: u64,
    pub code_reviews: u64,
    pub messages_sent: u64,
    pub helped_teammates: u64,
}

impl Stats {
    /// Current value of one counter.
    pub fn get(&self, kind: StatKind) -> u64 {
        match kind {
            StatKind::TasksCompleted => self.tasks_completed,
            StatKind::TasksCreated => self.tasks_created,
            StatKind::ProjectsCreated => self.projects_created,
            StatKind::ProjectsCompleted => self.projects_completed,
            StatKind::CommentsAdded => self.comments_added,
            StatKind::MilestonesReached => self.milestones_reached,
            StatKind::CodeReviews => self.code_reviews,
            StatKind::MessagesSent => self.messages_sent,
            StatKind::HelpedTeammates => self.helped_teammates,
        }
    }

    /// Increment one counter, returning its new value.
    ///
    /// Saturating: a counter pinned at `u64::MAX` stays there rather than
    /// wrapping back below its previous value.
    pub fn bump(&mut self, kind: StatKind) -> u64 {
        let slot = match kind {
            StatKind::TasksCompleted => &mut self.tasks_completed,
            StatKind::TasksCreated => &mut self.tasks_created,
            StatKind::ProjectsCreated => &mut self.projects_created,
            StatKind::ProjectsCompleted => &mut self.projects_completed,
            StatKind::CommentsAdded => &mut self.comments_added,
            StatKind::MilestonesReached => &mut self.milestones_reached,
            StatKind::CodeReviews => &mut self.code_reviews,
            StatKind::MessagesSent => &mut self.messages_sent,
            StatKind::HelpedTeammates => &mut self.helped_teammates,
        };
        *slot = slot.saturating_add(1);
        *slot
    }
}
