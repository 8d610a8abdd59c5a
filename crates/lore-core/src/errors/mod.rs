//! Error handling for Lore.
//! One error enum per subsystem, `thiserror` only. `LoreError` aggregates them.

pub mod config_error;
pub mod error_code;
pub mod lore_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use error_code::LoreErrorCode;
pub use lore_error::{LoreError, LoreResult};
pub use storage_error::StorageError;
