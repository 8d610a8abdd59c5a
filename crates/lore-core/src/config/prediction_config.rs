use serde::{Deserialize, Serialize};

use super::defaults;

/// Context matching configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionConfig {
    /// Patterns below this confidence are never recommended.
    pub min_confidence: f64,
    /// Threshold for the analyze summary's high-confidence count.
    pub high_confidence: f64,
    /// Optional cap on the number of predictions returned.
    pub max_results: Option<usize>,
    /// Also require the context directory to match a pattern's directory prefixes.
    pub match_directories: bool,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            min_confidence: defaults::DEFAULT_MIN_PREDICTION_CONFIDENCE,
            high_confidence: defaults::DEFAULT_HIGH_CONFIDENCE,
            max_results: None,
            match_directories: defaults::DEFAULT_MATCH_DIRECTORIES,
        }
    }
}
