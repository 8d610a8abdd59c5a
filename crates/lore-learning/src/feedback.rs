//! Feedback processor: applies a human verdict to a past action and derives its learning weight.

use std::sync::Arc;

use lore_core::errors::{LoreError, LoreResult};
use lore_core::models::{FeedbackReceipt, FeedbackRequest};
use lore_core::traits::IActionRecordStorage;
use tracing::info;

pub struct FeedbackProcessor {
    records: Arc<dyn IActionRecordStorage>,
}

impl FeedbackProcessor {
    pub fn new(records: Arc<dyn IActionRecordStorage>) -> Self {
        Self { records }
    }

    /// Overwrite the record's verdict and append an audit event. Re-reviewing
    /// the same action is allowed; each review is kept in the history.
    pub fn process(&self, request: &FeedbackRequest) -> LoreResult<FeedbackReceipt> {
        let action_id = request.action_id.trim();
        if action_id.is_empty() {
            return Err(LoreError::InvalidRequest {
                reason: "action_id must not be empty".to_string(),
            });
        }
        if !request.verdict.is_set() {
            return Err(LoreError::InvalidRequest {
                reason: "verdict must be approved, rejected or modified".to_string(),
            });
        }

        let event = self
            .records
            .apply_verdict(
                action_id,
                request.verdict,
                request.reason.clone(),
                request.reviewer_id.clone(),
            )?
            .ok_or_else(|| LoreError::NotFound {
                id: action_id.to_string(),
            })?;

        info!(
            action_id = %event.action_id,
            verdict = %event.verdict,
            previous = %event.previous_verdict,
            learning_weight = event.learning_weight,
            flip = event.is_flip(),
            "feedback applied"
        );

        Ok(FeedbackReceipt {
            action_id: event.action_id,
            verdict: event.verdict,
            previous_verdict: event.previous_verdict,
            learning_weight: event.learning_weight,
            event_id: event.id,
        })
    }
}
