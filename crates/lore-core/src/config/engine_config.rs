use serde::{Deserialize, Serialize};

use super::defaults;

/// Engine gate configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// When false every operation fails with `EngineDisabled` and has no side effects.
    pub enabled: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            enabled: defaults::DEFAULT_ENGINE_ENABLED,
        }
    }
}
