//! acctedit: an account list editor with validated records and durable local storage.

pub mod cli;
pub mod config;
pub mod error;
pub mod ids;
pub mod labels;
pub mod models;
pub mod restore;
pub mod storage;
pub mod store;
pub mod utils;
pub mod validation;

// Re-export commonly used types
pub use error::{Result, StoreError};
pub use labels::{parse_labels, stringify_labels};
pub use models::{Account, AccountType, AccountsState, FieldErrors, LabelItem};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{AccountStore, STORAGE_KEY};
