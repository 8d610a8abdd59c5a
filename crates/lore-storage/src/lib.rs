//! # lore-storage
//!
//! SQLite persistence layer: single write connection, read pool, versioned
//! migrations, and the pattern / action record / feedback event queries.

pub mod engine;
pub mod migrations;
pub mod pool;
pub mod queries;

pub use engine::StorageEngine;

use lore_core::errors::{LoreError, StorageError};

/// Wrap a low-level failure message as a storage error.
pub(crate) fn to_storage_err(message: impl Into<String>) -> LoreError {
    LoreError::Storage(StorageError::SqliteError {
        message: message.into(),
    })
}
