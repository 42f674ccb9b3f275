use crate::achievement::{Achievement, Rarity, UnlockRule};
use crate::error::CatalogError;
use progression_types::{ActionEvent, AchievementId, StatKind, Stats};
use std::collections::{BTreeSet, HashSet};

/// The immutable achievement catalog.
///
/// Built once and injected into the engine; `Default` is the production
/// catalog. Construction validates that ids are unique and every reward is
/// positive, so evaluation never has to.
#[derive(Clone, Debug)]
pub struct AchievementRegistry {
    defs: Vec<Achievement>,
}

impl AchievementRegistry {
    /// Build a registry from explicit definitions.
    pub fn new(defs: Vec<Achievement>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for def in &defs {
            if !seen.insert(def.id.clone()) {
                return Err(CatalogError::DuplicateAchievement(def.id.clone()));
            }
            if def.xp_reward == 0 {
                return Err(CatalogError::ZeroXpReward(def.id.clone()));
            }
        }
        Ok(Self { defs })
    }

    /// Look up one definition by id.
    pub fn get(&self, id: &AchievementId) -> Option<&Achievement> {
        self.defs.iter().find(|def| &def.id == id)
    }

    /// All definitions, in catalog order. UI layers render the badge
    /// catalog from this.
    pub fn iter(&self) -> impl Iterator<Item = &Achievement> {
        self.defs.iter()
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    /// One evaluation pass: every definition whose rule is satisfied by
    /// `event` against the post-increment `stats`, skipping ids already in
    /// `unlocked` unconditionally (their rules are never re-evaluated).
    ///
    /// Scan complexity: O(catalog size).
    pub fn newly_satisfied(
        &self,
        event: &ActionEvent,
        stats: &Stats,
        unlocked: &BTreeSet<AchievementId>,
    ) -> Vec<&Achievement> {
        self.defs
            .iter()
            .filter(|def| !unlocked.contains(&def.id))
            .filter(|def| def.rule.is_satisfied(event, stats))
            .collect()
    }
}

/// The production catalog.
///
/// Order is the badge-catalog display order. Helper kept free so the big
/// list below stays readable.
fn def(
    id: &str,
    name: &str,
    description: &str,
    icon: &str,
    xp_reward: u64,
    rarity: Rarity,
    rule: UnlockRule,
) -> Achievement {
    Achievement {
        id: id.into(),
        name: name.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        xp_reward,
        rarity,
        rule,
    }
}

fn stat_reached(stat: StatKind, count: u64) -> UnlockRule {
    UnlockRule::StatReached { stat, count }
}

pub(crate) fn production_catalog() -> Vec<Achievement> {
    use Rarity::*;
    use StatKind::*;

    vec![
        def(
            "first-task",
            "First Steps",
            "Complete your first task",
            "✅",
            50,
            Common,
            stat_reached(TasksCompleted, 1),
        ),
        def(
            "task-master",
            "Task Master",
            "Complete 10 tasks",
            "🔥",
            100,
            Rare,
            stat_reached(TasksCompleted, 10),
        ),
        def(
            "task-expert",
            "Task Expert",
            "Complete 50 tasks",
            "⚡",
            250,
            Epic,
            stat_reached(TasksCompleted, 50),
        ),
        def(
            "task-legend",
            "Task Legend",
            "Complete 100 tasks",
            "👑",
            500,
            Legendary,
            stat_reached(TasksCompleted, 100),
        ),
        def(
            "early-bird",
            "Early Bird",
            "Complete a task before its deadline",
            "🐦",
            75,
            Rare,
            UnlockRule::TaskBeforeDeadline,
        ),
        def(
            "project-creator",
            "Project Creator",
            "Publish your first project listing",
            "🚀",
            60,
            Common,
            stat_reached(ProjectsCreated, 1),
        ),
        def(
            "project-finisher",
            "Project Finisher",
            "See a project through to completion",
            "🏁",
            150,
            Epic,
            stat_reached(ProjectsCompleted, 1),
        ),
        def(
            "first-comment",
            "Conversation Starter",
            "Post your first comment",
            "💬",
            20,
            Common,
            stat_reached(CommentsAdded, 1),
        ),
        def(
            "milestone-maker",
            "Milestone Maker",
            "Reach 5 project milestones",
            "🎯",
            80,
            Rare,
            stat_reached(MilestonesReached, 5),
        ),
        def(
            "code-reviewer",
            "Code Reviewer",
            "Submit 10 code reviews",
            "🔍",
            90,
            Rare,
            stat_reached(CodeReviews, 10),
        ),
        def(
            "team-player",
            "Team Player",
            "Help 5 teammates",
            "🤝",
            100,
            Rare,
            stat_reached(HelpedTeammates, 5),
        ),
        def(
            "mentor",
            "Mentor",
            "Help 25 teammates",
            "🦉",
            250,
            Epic,
            stat_reached(HelpedTeammates, 25),
        ),
        def(
            "streak-week",
            "Week Streak",
            "Log in 7 days in a row",
            "📅",
            100,
            Rare,
            UnlockRule::StreakReached { days: 7 },
        ),
        def(
            "streak-month",
            "Month Streak",
            "Log in 30 days in a row",
            "🗓️",
            300,
            Epic,
            UnlockRule::StreakReached { days: 30 },
        ),
        def(
            "level-5",
            "Rising Star",
            "Reach level 5",
            "⭐",
            100,
            Rare,
            UnlockRule::LevelReached { level: 5 },
        ),
        def(
            "level-10",
            "Veteran",
            "Reach level 10",
            "🌟",
            250,
            Epic,
            UnlockRule::LevelReached { level: 10 },
        ),
    ]
}

impl AchievementRegistry {
    /// The production catalog. Infallible: the catalog is validated by
    /// tests and `new` only rejects malformed hand-built input.
    fn production() -> Self {
        Self {
            defs: production_catalog(),
        }
    }
}

impl Default for AchievementRegistry {
    fn default() -> Self {
        Self::production()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_catalog_passes_validation() {
        let registry = AchievementRegistry::new(production_catalog()).unwrap();
        assert!(!registry.is_empty());
        assert_eq!(registry.len(), AchievementRegistry::default().len());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut defs = production_catalog();
        let dup = defs[0].clone();
        defs.push(dup);
        assert!(matches!(
            AchievementRegistry::new(defs),
            Err(CatalogError::DuplicateAchievement(_))
        ));
    }

    #[test]
    fn zero_reward_is_rejected() {
        let mut defs = production_catalog();
        defs[0].xp_reward = 0;
        assert!(matches!(
            AchievementRegistry::new(defs),
            Err(CatalogError::ZeroXpReward(_))
        ));
    }

    #[test]
    fn get_finds_by_id() {
        let registry = AchievementRegistry::default();
        let first_task = registry.get(&"first-task".into()).unwrap();
        assert_eq!(first_task.xp_reward, 50);
        assert!(registry.get(&"no-such-badge".into()).is_none());
    }

    #[test]
    fn first_task_satisfied_exactly_when_counter_reaches_one() {
        let registry = AchievementRegistry::default();
        let unlocked = BTreeSet::new();
        let event = ActionEvent::TaskCompleted {
            before_deadline: false,
        };

        let none = registry.newly_satisfied(&event, &Stats::default(), &unlocked);
        assert!(none.is_empty());

        let stats = Stats {
            tasks_completed: 1,
            ..Stats::default()
        };
        let hits = registry.newly_satisfied(&event, &stats, &unlocked);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "first-task");
    }

    #[test]
    fn already_unlocked_ids_are_skipped() {
        let registry = AchievementRegistry::default();
        let stats = Stats {
            tasks_completed: 1,
            ..Stats::default()
        };
        let event = ActionEvent::TaskCompleted {
            before_deadline: false,
        };

        let mut unlocked = BTreeSet::new();
        unlocked.insert(AchievementId::from("first-task"));

        let hits = registry.newly_satisfied(&event, &stats, &unlocked);
        assert!(hits.is_empty());
    }

    #[test]
    fn early_bird_and_first_task_can_unlock_together() {
        let registry = AchievementRegistry::default();
        let stats = Stats {
            tasks_completed: 1,
            ..Stats::default()
        };
        let event = ActionEvent::TaskCompleted {
            before_deadline: true,
        };

        let hits = registry.newly_satisfied(&event, &stats, &BTreeSet::new());
        let ids: Vec<&str> = hits.iter().map(|a| a.id.as_str()).collect();
        assert!(ids.contains(&"first-task"));
        assert!(ids.contains(&"early-bird"));
    }

    #[test]
    fn unrelated_events_match_nothing() {
        let registry = AchievementRegistry::default();
        let stats = Stats {
            tasks_completed: 100,
            ..Stats::default()
        };
        // Stats would qualify several rules, but the event scopes them out.
        let hits = registry.newly_satisfied(&ActionEvent::MessageSent, &stats, &BTreeSet::new());
        assert!(hits.is_empty());
    }
}
