use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Verdict;

/// Immutable audit entry appended on every review of an action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    pub id: String,
    pub action_id: String,
    pub verdict: Verdict,
    /// Verdict the record carried before this review.
    pub previous_verdict: Verdict,
    pub reason: Option<String>,
    pub reviewer_id: Option<String>,
    pub learning_weight: f64,
    pub recorded_at: DateTime<Utc>,
}

impl FeedbackEvent {
    pub fn new(
        action_id: impl Into<String>,
        verdict: Verdict,
        previous_verdict: Verdict,
        reason: Option<String>,
        reviewer_id: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            action_id: action_id.into(),
            verdict,
            previous_verdict,
            reason,
            reviewer_id,
            learning_weight: verdict.learning_weight(),
            recorded_at: Utc::now(),
        }
    }

    /// True when this review changed an earlier, different verdict.
    pub fn is_flip(&self) -> bool {
        self.previous_verdict.is_set() && self.previous_verdict != self.verdict
    }
}
