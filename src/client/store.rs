use goal_tracker::{storage::GoalStore, GoalService};

/// Goal service shared with every component through context as a `Signal<GoalState>`.
pub type GoalState = GoalService<Box<dyn GoalStore>>;
