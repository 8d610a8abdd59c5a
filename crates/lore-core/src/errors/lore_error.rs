use super::{ConfigError, StorageError};

/// Top-level error for every engine operation.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum LoreError {
    #[error("pattern learning engine is disabled")]
    EngineDisabled,

    #[error("action record not found: {id}")]
    NotFound { id: String },

    #[error("unknown action: {action}")]
    UnknownAction { action: String },

    #[error("invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("serialization error: {message}")]
    Serialization { message: String },
}

impl From<serde_json::Error> for LoreError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization {
            message: e.to_string(),
        }
    }
}

pub type LoreResult<T> = Result<T, LoreError>;
