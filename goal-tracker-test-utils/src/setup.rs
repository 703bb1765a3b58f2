use goal_tracker::{model::Goal, storage::MemoryStore, GoalService};

/// A loaded goal service together with a handle to its backing store.
pub struct TestSetup {
    pub service: GoalService<MemoryStore>,
    pub store: MemoryStore,
}

impl TestSetup {
    /// Decodes whatever the service last saved.
    ///
    /// # Panics
    /// If nothing was saved or the saved blob does not decode.
    pub fn stored_goals(&self) -> Vec<Goal> {
        let blob = self.store.blob().expect("store should hold a blob");
        goal_tracker::storage::codec::decode(&blob).expect("stored blob should decode")
    }

    /// Loads a second service from the same store, as a page reload would.
    pub fn reload(&self) -> GoalService<MemoryStore> {
        GoalService::load(self.store.clone())
    }
}
