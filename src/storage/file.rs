use std::{fs, io, path::PathBuf};

use dioxus_logger::tracing;

use crate::{error::Error, storage::GoalStore};

/// Stores the goal blob in a JSON file, used by native builds.
///
/// A missing file reads as "nothing stored yet". Writes go to a sibling temporary file that is
/// then renamed over the target, so a crash mid-write leaves the previous collection intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl GoalStore for FileStore {
    fn read(&self) -> Result<Option<String>, Error> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("No goal file at {}, starting empty", self.path.display());
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, blob: &str) -> Result<(), Error> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let temp = self.temp_path();
        fs::write(&temp, blob)?;
        fs::rename(&temp, &self.path)?;

        Ok(())
    }
}
