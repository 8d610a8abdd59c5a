use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ApplicableContexts, Confidence, PatternCategory, RulePayload};

/// A learned, reusable insight keyed by its unique `name`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Natural primary key. Case- and whitespace-sensitive.
    pub name: String,
    pub category: PatternCategory,
    pub confidence: Confidence,
    /// Laplace-smoothed evidence ratio in [0.0, 1.0].
    pub success_rate: f64,
    /// Number of records that have contributed. Never decreases.
    pub usage_frequency: u64,
    pub rule_payload: RulePayload,
    pub applicable_contexts: ApplicableContexts,
    /// Soft-disable flag. Only changed by administrative action.
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Pattern {
    /// Build a freshly extracted, active pattern. Scores are clamped.
    pub fn new(
        name: impl Into<String>,
        rule_payload: RulePayload,
        applicable_contexts: ApplicableContexts,
        confidence: f64,
        usage_frequency: u64,
    ) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            category: rule_payload.category(),
            confidence: Confidence::new(confidence),
            success_rate: laplace_success_rate(usage_frequency),
            usage_frequency,
            rule_payload,
            applicable_contexts,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Set the success rate, clamping to [0.0, 1.0].
    pub fn set_success_rate(&mut self, rate: f64) {
        self.success_rate = if rate.is_nan() { 0.0 } else { rate.clamp(0.0, 1.0) };
    }
}

/// `n / (n + 1)`: a single success never exceeds 0.5.
pub fn laplace_success_rate(evidence_count: u64) -> f64 {
    let n = evidence_count as f64;
    n / (n + 1.0)
}
