//! Top-level Lore configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{EngineConfig, LearningConfig, PredictionConfig, StorageConfig};
use crate::constants::CONFIDENCE_CEILING;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`LORE_*`)
/// 2. TOML config file
/// 3. Compiled defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoreConfig {
    pub engine: EngineConfig,
    pub storage: StorageConfig,
    pub learning: LearningConfig,
    pub prediction: PredictionConfig,
}

impl LoreConfig {
    /// Load configuration: defaults, then `path` if given, then environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;
        Ok(config)
    }

    /// Parse a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `LORE_*` overrides read through `lookup`. Unparseable values are ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("LORE_ENGINE_ENABLED").and_then(|v| parse_bool(&v)) {
            self.engine.enabled = v;
        }
        if let Some(v) = lookup("LORE_DB_PATH") {
            self.storage.db_path = v;
        }
        if let Some(v) = lookup("LORE_CORPUS_PAGE_SIZE").and_then(|v| v.parse().ok()) {
            self.learning.corpus_page_size = v;
        }
        if let Some(v) = lookup("LORE_MIN_CONFIDENCE").and_then(|v| v.parse().ok()) {
            self.prediction.min_confidence = v;
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let ceiling = self.learning.confidence_ceiling;
        if !(0.0..=CONFIDENCE_CEILING).contains(&ceiling) {
            return Err(ConfigError::ValidationFailed {
                field: "learning.confidence_ceiling".to_string(),
                message: format!("must be between 0.0 and {CONFIDENCE_CEILING}"),
            });
        }
        if self.learning.corpus_page_size == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "learning.corpus_page_size".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        for (field, value) in [
            ("prediction.min_confidence", self.prediction.min_confidence),
            ("prediction.high_confidence", self.prediction.high_confidence),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if self.storage.db_path.trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "storage.db_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
