//! Test fixtures.
//!
//! - `goal` - goal models and stored goal blobs

pub mod goal;
