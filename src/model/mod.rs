pub mod chart;
pub mod draft;
pub mod dto;
pub mod filter;
pub mod goal;

pub use chart::{ChartLayout, ChartPoint};
pub use draft::GoalDraft;
pub use dto::GoalDto;
pub use filter::Filter;
pub use goal::{Direction, Goal, GoalId, GoalInput, Level, Reward};
