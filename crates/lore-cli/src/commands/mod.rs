//! Subcommand handlers. Engine operations go through the JSON request boundary.

pub mod pattern;
pub mod record;

use anyhow::{bail, Context, Result};
use lore_learning::{handle_request, PatternEngine};
use serde_json::{json, Map, Value};

pub use pattern::PatternCommand;
pub use record::RecordCommand;

pub fn train(engine: &PatternEngine) -> Value {
    handle_request(engine, &json!({ "action": "train" }))
}

pub fn analyze(engine: &PatternEngine, category: Option<String>, include_inactive: bool) -> Value {
    handle_request(
        engine,
        &json!({
            "action": "analyze",
            "pattern_type": category,
            "data": { "include_inactive": include_inactive },
        }),
    )
}

pub fn predict(
    engine: &PatternEngine,
    file_types: Vec<String>,
    file_path: Option<String>,
    issue_type: Option<String>,
    directory: Option<String>,
) -> Value {
    let mut context = Map::new();
    context.insert("file_types".into(), json!(file_types));
    for (key, value) in [
        ("file_path", file_path),
        ("issue_type", issue_type),
        ("directory", directory),
    ] {
        if let Some(value) = value {
            context.insert(key.into(), Value::String(value));
        }
    }
    handle_request(engine, &json!({ "action": "predict", "context": context }))
}

pub fn feedback(
    engine: &PatternEngine,
    action_id: String,
    verdict: String,
    reason: Option<String>,
    reviewer_id: Option<String>,
) -> Value {
    handle_request(
        engine,
        &json!({
            "action": "feedback",
            "data": {
                "action_id": action_id,
                "verdict": verdict,
                "reason": reason,
                "reviewer_id": reviewer_id,
            },
        }),
    )
}

pub fn raw_request(engine: &PatternEngine, raw: &str) -> Result<Value> {
    let request: Value = serde_json::from_str(raw).context("request is not valid JSON")?;
    Ok(handle_request(engine, &request))
}

/// Print the response; a `success: false` body also fails the process.
pub fn emit(response: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    if response["success"].as_bool() != Some(true) {
        let code = response["code"].as_str().unwrap_or("UNKNOWN");
        bail!("request failed ({code})");
    }
    Ok(())
}
