use goal_tracker::{model::Goal, storage::MemoryStore, GoalService};

use crate::{fixtures::goal::factory, setup::TestSetup};

/// Builder for [`TestSetup`].
///
/// # Example
/// ```ignore
/// let setup = TestBuilder::new()
///     .with_goal(factory::mock_goal(1, 10))
///     .build();
/// ```
#[derive(Default)]
pub struct TestBuilder {
    goals: Vec<Goal>,
    blob: Option<String>,
}

impl TestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-store a goal before the service loads.
    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goals.push(goal);
        self
    }

    pub fn with_goals(mut self, goals: impl IntoIterator<Item = Goal>) -> Self {
        self.goals.extend(goals);
        self
    }

    /// Pre-store a raw blob, replacing any goals added with [`TestBuilder::with_goal`].
    pub fn with_blob(mut self, blob: impl Into<String>) -> Self {
        self.blob = Some(blob.into());
        self
    }

    pub fn build(self) -> TestSetup {
        let store = match self.blob {
            Some(blob) => MemoryStore::with_blob(blob),
            None if self.goals.is_empty() => MemoryStore::new(),
            None => MemoryStore::with_blob(factory::mock_blob(&self.goals)),
        };

        TestSetup {
            service: GoalService::load(store.clone()),
            store,
        }
    }
}
