//! Runtime configuration: where the collection lives and under which key.

use crate::error::{Result, StoreError};
use crate::storage::FileStorage;
use crate::store::STORAGE_KEY;
use std::path::PathBuf;

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "acctedit";

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "ACCTEDIT_DIR";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "ACCTEDIT_LOG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub storage_key: String,
}

impl Config {
    /// Build a configuration from optional overrides, filling in defaults.
    pub fn resolve(data_dir: Option<PathBuf>, storage_key: Option<String>) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => default_data_dir()?,
        };
        Ok(Self {
            data_dir,
            storage_key: storage_key.unwrap_or_else(|| STORAGE_KEY.to_string()),
        })
    }

    /// Storage rooted at the configured directory.
    pub fn storage(&self) -> FileStorage {
        FileStorage::new(&self.data_dir)
    }
}

/// Platform data directory for acctedit, e.g. `~/.local/share/acctedit`.
pub fn default_data_dir() -> Result<PathBuf> {
    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| StoreError::DataDirUnavailable(PathBuf::from("<platform data dir>")))
}
