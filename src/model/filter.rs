use std::fmt;

use crate::model::goal::Goal;

/// View filter selected by the tabs above the goal list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
    /// Delayed reward chart above the goals still in progress.
    Analysis,
}

impl Filter {
    pub const ALL: [Filter; 4] = [
        Filter::All,
        Filter::Active,
        Filter::Completed,
        Filter::Analysis,
    ];

    pub fn matches(self, goal: &Goal) -> bool {
        match self {
            Self::All => true,
            Self::Active | Self::Analysis => !goal.is_completed(),
            Self::Completed => goal.is_completed(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Active => "Active",
            Self::Completed => "Completed",
            Self::Analysis => "Analysis",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
