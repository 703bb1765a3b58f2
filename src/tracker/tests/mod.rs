use crate::model::{GoalDraft, GoalInput, Level, Reward};


fn input(text: &str, target: u32) -> GoalInput {
    GoalInput {
        text: text.to_string(),
        target,
        level: Level::Beginner,
        reward: Reward::Immediate,
    }
}

fn draft(text: &str, target: &str) -> GoalDraft {
    GoalDraft {
        text: text.to_string(),
        target: target.to_string(),
        ..GoalDraft::default()
    }
}
