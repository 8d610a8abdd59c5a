use serde::{Deserialize, Serialize};

use super::defaults;

/// How `success_rate` is set when a candidate folds into an existing pattern.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuccessRatePolicy {
    /// Take the incoming candidate's rate.
    #[default]
    LastWriteWins,
    /// Recompute `f / (f + 1)` from the summed usage frequency.
    Accumulated,
}

/// Training configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningConfig {
    /// Maximum reviewed records read per `train` call.
    pub corpus_page_size: usize,
    /// Cap applied to merged confidence. Must not exceed 0.95.
    pub confidence_ceiling: f64,
    pub success_rate_policy: SuccessRatePolicy,
}

impl Default for LearningConfig {
    fn default() -> Self {
        Self {
            corpus_page_size: defaults::DEFAULT_CORPUS_PAGE_SIZE,
            confidence_ceiling: defaults::DEFAULT_CONFIDENCE_CEILING,
            success_rate_policy: SuccessRatePolicy::default(),
        }
    }
}
