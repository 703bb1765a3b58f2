//! Error types for the goal tracker.
//!
//! This module provides the error taxonomy for the core library. Domain-specific error types
//! live in submodules (configuration, storage, form input) and are aggregated into a single
//! [`Error`] enum with `thiserror`'s `#[from]` conversions so that storage code can propagate
//! failures with the `?` operator. [`ConfigError`] stays separate because configuration is
//! read once at startup, before any store exists.

pub mod config;
pub mod input;
pub mod storage;

use thiserror::Error;

pub use self::{config::ConfigError, input::InputError, storage::StorageError};

/// Main error type for the goal tracker.
///
/// Form input errors are deliberately not part of this enum: invalid input is skipped by the
/// tracker rather than propagated, see [`InputError`].
///
/// # Error Categories
/// - Storage errors (unavailable backend, failed reads or writes)
/// - Serialization errors (malformed persisted goal blob)
/// - I/O errors (file-backed store)
#[derive(Error, Debug)]
pub enum Error {
    /// Storage backend error (browser storage unavailable, read or write rejected).
    #[error(transparent)]
    Storage(#[from] StorageError),
    /// Failed to serialize or deserialize the persisted goal collection.
    #[error("Failed to serialize/deserialize goals: {0}")]
    Serialization(#[from] serde_json::Error),
    /// File system error from the file-backed store.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
