use web_sys::Storage;

use crate::{
    error::{Error, StorageError},
    storage::GoalStore,
};

/// Stores the goal blob in the browser's `localStorage` under a single key.
pub struct LocalStorageStore {
    storage: Storage,
    key: String,
}

impl LocalStorageStore {
    /// Opens the window's local storage.
    ///
    /// # Returns
    /// - `Ok(LocalStorageStore)` - Local storage is available
    /// - `Err(StorageError::Unavailable)` - No window, or local storage is disabled
    pub fn open(key: &str) -> Result<Self, StorageError> {
        let window = web_sys::window()
            .ok_or_else(|| StorageError::Unavailable("no browser window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
            .ok_or_else(|| StorageError::Unavailable("local storage is disabled".to_string()))?;

        Ok(Self {
            storage,
            key: key.to_string(),
        })
    }
}

impl GoalStore for LocalStorageStore {
    fn read(&self) -> Result<Option<String>, Error> {
        self.storage
            .get_item(&self.key)
            .map_err(|e| StorageError::Read(format!("{e:?}")).into())
    }

    fn write(&self, blob: &str) -> Result<(), Error> {
        self.storage
            .set_item(&self.key, blob)
            .map_err(|e| StorageError::Write(format!("{e:?}")).into())
    }
}
