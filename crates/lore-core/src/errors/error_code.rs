//! Stable machine-readable error codes surfaced at the request boundary.

use super::{ConfigError, LoreError, StorageError};

pub const ENGINE_DISABLED: &str = "ENGINE_DISABLED";
pub const NOT_FOUND: &str = "NOT_FOUND";
pub const UNKNOWN_ACTION: &str = "UNKNOWN_ACTION";
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
pub const STORAGE_ERROR: &str = "STORAGE_ERROR";
pub const MIGRATION_ERROR: &str = "MIGRATION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";

/// Maps an error to a stable code string.
pub trait LoreErrorCode {
    fn error_code(&self) -> &'static str;
}

impl LoreErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MigrationFailed { .. } => MIGRATION_ERROR,
            _ => STORAGE_ERROR,
        }
    }
}

impl LoreErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        CONFIG_ERROR
    }
}

impl LoreErrorCode for LoreError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EngineDisabled => ENGINE_DISABLED,
            Self::NotFound { .. } => NOT_FOUND,
            Self::UnknownAction { .. } => UNKNOWN_ACTION,
            Self::InvalidRequest { .. } => INVALID_REQUEST,
            Self::Storage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization { .. } => SERIALIZATION_ERROR,
        }
    }
}
