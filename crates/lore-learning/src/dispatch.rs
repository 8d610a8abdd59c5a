//! JSON request boundary: `{action, data?, pattern_type?, context?}` in,
//! `{success, ...}` out. Errors never escape as panics; they become
//! `{success: false, error, code}`.

use std::str::FromStr;

use lore_core::errors::{LoreError, LoreErrorCode, LoreResult};
use lore_core::models::{FeedbackRequest, PredictionContext};
use lore_core::pattern::PatternCategory;
use lore_core::traits::IPatternEngine;
use serde_json::{json, Value};
use tracing::warn;

/// The four operations a request can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    Train,
    Analyze,
    Predict,
    Feedback,
}

impl Action {
    fn parse(raw: &str) -> LoreResult<Self> {
        match raw {
            "train" => Ok(Self::Train),
            "analyze" => Ok(Self::Analyze),
            "predict" => Ok(Self::Predict),
            "feedback" => Ok(Self::Feedback),
            other => Err(LoreError::UnknownAction {
                action: other.to_string(),
            }),
        }
    }
}

/// Handle one request against `engine`.
pub fn handle_request(engine: &dyn IPatternEngine, request: &Value) -> Value {
    match dispatch(engine, request) {
        Ok(response) => response,
        Err(e) => {
            warn!(code = e.error_code(), error = %e, "request failed");
            error_response(&e)
        }
    }
}

/// Structured failure body.
pub fn error_response(error: &LoreError) -> Value {
    json!({
        "success": false,
        "error": error.to_string(),
        "code": error.error_code(),
    })
}

fn dispatch(engine: &dyn IPatternEngine, request: &Value) -> LoreResult<Value> {
    let action = request
        .get("action")
        .and_then(Value::as_str)
        .ok_or_else(|| LoreError::InvalidRequest {
            reason: "request must be an object with a string 'action'".to_string(),
        })?;
    let action = Action::parse(action)?;

    // Gate before any payload is looked at.
    if !engine.is_enabled() {
        return Err(LoreError::EngineDisabled);
    }

    let field = |name: &str| request.get(name).filter(|v| !v.is_null());
    match action {
        Action::Train => handle_train(engine),
        Action::Analyze => handle_analyze(engine, field("pattern_type"), field("data")),
        Action::Predict => handle_predict(engine, field("context").or(field("data")).cloned()),
        Action::Feedback => handle_feedback(engine, field("data").cloned()),
    }
}

fn handle_train(engine: &dyn IPatternEngine) -> LoreResult<Value> {
    let report = engine.train()?;
    Ok(json!({
        "success": true,
        "patterns_learned": report.patterns_learned,
        "records_scanned": report.records_scanned,
        "inserted": report.inserted,
        "updated": report.updated,
        "failed": report.failed,
    }))
}

fn handle_analyze(
    engine: &dyn IPatternEngine,
    pattern_type: Option<&Value>,
    data: Option<&Value>,
) -> LoreResult<Value> {
    let pattern_type = match pattern_type {
        None => None,
        Some(Value::String(raw)) => Some(raw.trim()),
        Some(other) => {
            return Err(LoreError::InvalidRequest {
                reason: format!("pattern_type must be a string, got {other}"),
            })
        }
    };
    let category = match pattern_type {
        None | Some("") | Some("all") => None,
        Some(raw) => Some(PatternCategory::from_str(raw)?),
    };
    let include_inactive = data
        .and_then(|d| d.get("include_inactive"))
        .and_then(Value::as_bool)
        .unwrap_or(false);

    let analysis = engine.analyze(category, include_inactive)?;
    Ok(json!({
        "success": true,
        "total_patterns": analysis.total_patterns,
        "high_confidence_patterns": analysis.high_confidence_patterns,
        "average_confidence": analysis.average_confidence,
        "by_category": serde_json::to_value(&analysis.by_category)?,
        "patterns": serde_json::to_value(&analysis.patterns)?,
    }))
}

fn handle_predict(engine: &dyn IPatternEngine, context: Option<Value>) -> LoreResult<Value> {
    let context: PredictionContext = match context {
        Some(raw) => serde_json::from_value(raw).map_err(|e| LoreError::InvalidRequest {
            reason: format!("invalid context: {e}"),
        })?,
        None => PredictionContext::default(),
    };

    let report = engine.predict(&context)?;
    Ok(json!({
        "success": true,
        "count": report.predictions.len(),
        "predictions": serde_json::to_value(&report.predictions)?,
        "highest_confidence": report.highest_confidence,
    }))
}

fn handle_feedback(engine: &dyn IPatternEngine, data: Option<Value>) -> LoreResult<Value> {
    let raw = data.ok_or_else(|| LoreError::InvalidRequest {
        reason: "feedback requires data".to_string(),
    })?;
    let request: FeedbackRequest =
        serde_json::from_value(raw).map_err(|e| LoreError::InvalidRequest {
            reason: format!("invalid feedback data: {e}"),
        })?;

    let receipt = engine.feedback(&request)?;
    Ok(json!({
        "success": true,
        "feedback_applied": true,
        "action_id": receipt.action_id,
        "verdict": receipt.verdict,
        "previous_verdict": receipt.previous_verdict,
        "learning_weight": receipt.learning_weight,
        "event_id": receipt.event_id,
    }))
}
