//! Environment-driven configuration.
//!
//! Every setting has a default, so an empty environment (the browser has none) yields a
//! working configuration. Native builds can put overrides in a `.env` file.

use std::{env, path::PathBuf};

use dioxus_logger::tracing::Level;

use crate::error::ConfigError;

pub const STORAGE_KEY_VAR: &str = "GOAL_TRACKER_STORAGE_KEY";
pub const DATA_FILE_VAR: &str = "GOAL_TRACKER_DATA_FILE";
pub const LOG_LEVEL_VAR: &str = "GOAL_TRACKER_LOG_LEVEL";

pub const DEFAULT_STORAGE_KEY: &str = "goals";
pub const DEFAULT_DATA_FILE: &str = "goals.json";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Browser `localStorage` key holding the goal blob.
    pub storage_key: String,
    /// JSON file holding the goal blob on native builds.
    pub data_file: PathBuf,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| env::var(var).ok())
    }

    /// Builds configuration from an arbitrary variable lookup.
    ///
    /// # Returns
    /// - `Ok(Config)` - Defaults overridden by every variable present
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is present but empty or unparsable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(key) = lookup(STORAGE_KEY_VAR) {
            config.storage_key = non_empty(STORAGE_KEY_VAR, key)?;
        }

        if let Some(path) = lookup(DATA_FILE_VAR) {
            config.data_file = PathBuf::from(non_empty(DATA_FILE_VAR, path)?);
        }

        if let Some(level) = lookup(LOG_LEVEL_VAR) {
            config.log_level =
                level
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvValue {
                        var: LOG_LEVEL_VAR.to_string(),
                        reason: format!("{level:?} is not one of trace, debug, info, warn, error"),
                    })?;
        }

        Ok(config)
    }
}

fn non_empty(var: &str, value: String) -> Result<String, ConfigError> {
    if value.trim().is_empty() {
        return Err(ConfigError::InvalidEnvValue {
            var: var.to_string(),
            reason: "value must not be empty".to_string(),
        });
    }
    Ok(value)
}
