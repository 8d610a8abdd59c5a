use serde::{Deserialize, Serialize};

use crate::record::Verdict;

/// A human review of one past action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackRequest {
    pub action_id: String,
    pub verdict: Verdict,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub reviewer_id: Option<String>,
}

/// Confirmation that a verdict was applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackReceipt {
    pub action_id: String,
    pub verdict: Verdict,
    pub previous_verdict: Verdict,
    pub learning_weight: f64,
    /// Id of the appended audit event.
    pub event_id: String,
}
