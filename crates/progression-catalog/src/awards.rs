use progression_types::ActionEvent;
use serde::{Deserialize, Serialize};

/// XP granted per action, plus the login-related values.
///
/// Injectable like [`LevelTable`](crate::LevelTable); UI layers read this
/// to render "worth N XP" hints next to actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpAwards {
    pub task_completed: u64,
    pub task_created: u64,
    pub project_created: u64,
    pub project_completed: u64,
    pub comment_added: u64,
    pub milestone_reached: u64,
    pub code_review: u64,
    pub message_sent: u64,
    pub helped_teammate: u64,
    /// Granted on the first qualifying login of a calendar day.
    pub daily_login: u64,
    /// Granted on top of `daily_login` when the streak extends.
    pub streak_bonus: u64,
}

impl XpAwards {
    /// XP for one external action. Engine-emitted events carry no base XP
    /// of their own; their rewards come from achievements.
    pub fn for_action(&self, event: &ActionEvent) -> u64 {
        match event {
            ActionEvent::TaskCompleted { .. } => self.task_completed,
            ActionEvent::TaskCreated => self.task_created,
            ActionEvent::ProjectCreated => self.project_created,
            ActionEvent::ProjectCompleted => self.project_completed,
            ActionEvent::CommentAdded => self.comment_added,
            ActionEvent::MilestoneReached => self.milestone_reached,
            ActionEvent::CodeReview => self.code_review,
            ActionEvent::MessageSent => self.message_sent,
            ActionEvent::HelpedTeammate => self.helped_teammate,
            ActionEvent::StreakUpdated { .. } | ActionEvent::LevelReached { .. } => 0,
        }
    }
}

impl Default for XpAwards {
    fn default() -> Self {
        Self {
            task_completed: 30,
            task_created: 10,
            project_created: 50,
            project_completed: 100,
            comment_added: 5,
            milestone_reached: 40,
            code_review: 25,
            message_sent: 1,
            helped_teammate: 20,
            daily_login: 10,
            streak_bonus: 15,
        }
    }
}
