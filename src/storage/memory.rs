use std::{cell::RefCell, rc::Rc};

use crate::{error::Error, storage::GoalStore};

/// In-memory blob store.
///
/// Clones share the same blob, so a test can keep a handle and inspect what the service
/// saved.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    blob: Rc<RefCell<Option<String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `blob`.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Rc::new(RefCell::new(Some(blob.into()))),
        }
    }

    /// Current contents of the store.
    pub fn blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl GoalStore for MemoryStore {
    fn read(&self) -> Result<Option<String>, Error> {
        Ok(self.blob())
    }

    fn write(&self, blob: &str) -> Result<(), Error> {
        *self.blob.borrow_mut() = Some(blob.to_string());
        Ok(())
    }
}
