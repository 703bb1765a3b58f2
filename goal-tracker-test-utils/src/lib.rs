//! Test utilities for the goal tracker.
//!
//! - [`fixtures`] - factory functions building goal models with standard test values
//! - [`TestBuilder`] - assembles a [`TestSetup`] with pre-stored goals or raw blobs

pub mod builder;
pub mod fixtures;
pub mod setup;

pub use builder::TestBuilder;
pub use setup::TestSetup;

pub mod prelude {
    pub use crate::{fixtures::goal::factory, TestBuilder, TestSetup};
}
