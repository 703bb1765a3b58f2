pub mod analysis_chart;
pub mod filter_tabs;
pub mod goal_card;
pub mod goal_form;
pub mod navbar;
pub mod page;
pub mod progress_bar;
pub mod summary;

pub use analysis_chart::AnalysisChart;
pub use filter_tabs::FilterTabs;
pub use goal_card::GoalCard;
pub use goal_form::GoalForm;
pub use navbar::Navbar;
pub use page::Page;
pub use progress_bar::ProgressBar;
pub use summary::GoalSummary;
