//! Confidence merger: folds a fresh candidate into the stored pattern of the same name.

use chrono::Utc;
use lore_core::config::{LearningConfig, SuccessRatePolicy};
use lore_core::constants::CONFIDENCE_CEILING;
use lore_core::pattern::{laplace_success_rate, Pattern};

/// Merge parameters taken from the learning config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MergeSettings {
    pub confidence_ceiling: f64,
    pub success_rate_policy: SuccessRatePolicy,
}

impl Default for MergeSettings {
    fn default() -> Self {
        Self {
            confidence_ceiling: CONFIDENCE_CEILING,
            success_rate_policy: SuccessRatePolicy::default(),
        }
    }
}

impl From<&LearningConfig> for MergeSettings {
    fn from(config: &LearningConfig) -> Self {
        Self {
            confidence_ceiling: config.confidence_ceiling,
            success_rate_policy: config.success_rate_policy,
        }
    }
}

/// Fold `candidate` into `existing`.
///
/// - confidence: mean of both, capped at the ceiling (never above 0.95)
/// - usage_frequency: sum of both
/// - success_rate: candidate's rate, or `f/(f+1)` of the summed frequency
///   under [`SuccessRatePolicy::Accumulated`]
/// - rule_payload and applicable_contexts: the candidate's
///
/// Identity, category, activity flag and creation time stay with `existing`.
pub fn merge_patterns(existing: &Pattern, candidate: &Pattern, settings: &MergeSettings) -> Pattern {
    let ceiling = settings.confidence_ceiling.min(CONFIDENCE_CEILING);
    let usage_frequency = existing
        .usage_frequency
        .saturating_add(candidate.usage_frequency);

    let mut merged = existing.clone();
    merged.confidence = existing.confidence.mean_capped(candidate.confidence, ceiling);
    merged.usage_frequency = usage_frequency;
    merged.set_success_rate(match settings.success_rate_policy {
        SuccessRatePolicy::LastWriteWins => candidate.success_rate,
        SuccessRatePolicy::Accumulated => laplace_success_rate(usage_frequency),
    });
    merged.rule_payload = candidate.rule_payload.clone();
    merged.applicable_contexts = candidate.applicable_contexts.clone();
    merged.updated_at = Utc::now();
    merged
}
