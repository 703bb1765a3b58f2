//! Goal fixtures.

pub mod factory {
    //! Factory functions for in-memory goal models with standard test values.

    use goal_tracker::model::{Goal, GoalDraft, GoalDto, GoalId, Level, Reward};

    /// Create a beginner, immediate reward goal with no progress.
    ///
    /// # Arguments
    /// - `id` - Goal identifier
    /// - `target` - Goal target, must be positive
    pub fn mock_goal(id: GoalId, target: u32) -> Goal {
        Goal {
            id,
            text: format!("Test Goal {id}"),
            progress: 0,
            target,
            level: Level::Beginner,
            reward: Reward::Immediate,
            click_count: 0,
        }
    }

    /// Create a delayed reward goal with the given progress.
    pub fn mock_delayed_goal(id: GoalId, progress: u32, target: u32) -> Goal {
        Goal {
            progress,
            reward: Reward::Delayed,
            ..mock_goal(id, target)
        }
    }

    /// Create an expert goal with no progress.
    pub fn mock_expert_goal(id: GoalId, target: u32) -> Goal {
        Goal {
            level: Level::Expert,
            ..mock_goal(id, target)
        }
    }

    /// Create a form draft as typed by a user.
    pub fn mock_draft(text: &str, target: &str, level: Level, reward: Reward) -> GoalDraft {
        GoalDraft {
            text: text.to_string(),
            target: target.to_string(),
            level,
            reward,
        }
    }

    /// Serialize goals into a stored blob in the persisted record layout.
    pub fn mock_blob(goals: &[Goal]) -> String {
        let records: Vec<GoalDto> = goals.iter().map(GoalDto::from).collect();
        serde_json::to_string(&records).unwrap_or_else(|_| "[]".to_string())
    }
}
