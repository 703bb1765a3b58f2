//! Persistence of the goal collection.
//!
//! The whole collection is stored as one JSON blob under one key and overwritten on every
//! change. Backends only move that blob around; encoding and sanitizing live in [`codec`].
//!
//! Available backends:
//! - [`LocalStorageStore`] - browser `localStorage` (feature `web`)
//! - [`FileStore`] - JSON file on disk (native builds)
//! - [`MemoryStore`] - in-process blob, used by tests and as a fallback

pub mod codec;
#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(feature = "web")]
pub mod local;
pub mod memory;

#[cfg(not(target_arch = "wasm32"))]
pub use self::file::FileStore;
#[cfg(feature = "web")]
pub use self::local::LocalStorageStore;
pub use self::memory::MemoryStore;

use crate::{config::Config, error::Error, model::Goal};

/// Key-value blob store holding the serialized goal collection.
pub trait GoalStore {
    /// Reads the stored blob, `None` when nothing has been saved yet.
    fn read(&self) -> Result<Option<String>, Error>;

    /// Replaces the stored blob.
    fn write(&self, blob: &str) -> Result<(), Error>;

    /// Loads and decodes the stored goals.
    ///
    /// # Returns
    /// - `Ok(Vec<Goal>)` - Stored goals, empty if nothing was stored
    /// - `Err(Error)` - Backend read failed or the blob is not valid JSON
    fn load(&self) -> Result<Vec<Goal>, Error> {
        match self.read()? {
            Some(blob) => codec::decode(&blob),
            None => Ok(Vec::new()),
        }
    }

    /// Encodes and stores the whole collection, replacing what was stored before.
    fn save(&self, goals: &[Goal]) -> Result<(), Error> {
        self.write(&codec::encode(goals)?)
    }
}

impl GoalStore for Box<dyn GoalStore> {
    fn read(&self) -> Result<Option<String>, Error> {
        (**self).read()
    }

    fn write(&self, blob: &str) -> Result<(), Error> {
        (**self).write(blob)
    }
}

/// Opens the storage backend for the current platform.
///
/// Browser builds use `localStorage` under [`Config::storage_key`].
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub fn open(config: &Config) -> Result<Box<dyn GoalStore>, Error> {
    Ok(Box::new(LocalStorageStore::open(&config.storage_key)?))
}

/// Opens the storage backend for the current platform.
///
/// Native builds use a JSON file at [`Config::data_file`].
#[cfg(not(target_arch = "wasm32"))]
pub fn open(config: &Config) -> Result<Box<dyn GoalStore>, Error> {
    Ok(Box::new(FileStore::new(config.data_file.clone())))
}

/// Opens the storage backend for the current platform.
#[cfg(all(target_arch = "wasm32", not(feature = "web")))]
pub fn open(_config: &Config) -> Result<Box<dyn GoalStore>, Error> {
    Err(crate::error::StorageError::Unavailable(
        "no storage backend enabled for this build".to_string(),
    )
    .into())
}
