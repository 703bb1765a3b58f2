//! Storage backend error types.
//!
//! These errors come from the key-value backends the goal collection is persisted to. The
//! browser backend reports failures as opaque JavaScript values, so their details are carried
//! as strings.

use thiserror::Error;

/// Storage backend error type.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The storage backend could not be opened.
    ///
    /// Occurs when no browser window exists, local storage is disabled (private browsing,
    /// blocked cookies), or the platform has no storage backend at all.
    #[error("Storage backend unavailable: {0}")]
    Unavailable(String),

    /// The backend refused to return the stored blob.
    #[error("Failed to read goals from storage: {0}")]
    Read(String),

    /// The backend refused to store the blob, typically because the quota is exceeded.
    #[error("Failed to write goals to storage: {0}")]
    Write(String),
}
