//! Core of the goal tracker.
//!
//! Platform-independent goal model, progress arithmetic, view filters, chart layout and
//! persistence. The Dioxus client in the binary renders [`service::GoalService`] and forwards
//! user events to it.

pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod storage;
pub mod tracker;

pub use config::Config;
pub use error::Error;
pub use service::GoalService;
pub use tracker::GoalTracker;
