//! Error types for acctedit.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Unknown account type: {0}")]
    UnknownAccountType(String),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),

    #[error("Data directory unavailable: {}", .0.display())]
    DataDirUnavailable(PathBuf),

    #[error("Failed to persist {key}: {source}")]
    Persist {
        key: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
