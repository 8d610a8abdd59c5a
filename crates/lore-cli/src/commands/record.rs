use anyhow::Result;
use clap::Subcommand;
use lore_core::record::{ActionRecord, Verdict};
use lore_core::traits::IActionRecordStorage;
use lore_learning::dispatch::error_response;
use serde_json::{json, Value};

#[derive(Subcommand)]
pub enum RecordCommand {
    /// Add an action record to the corpus
    Add {
        id: String,

        #[arg(long)]
        method: String,

        #[arg(long)]
        description: String,

        /// Path touched by the action (repeatable, in order)
        #[arg(long = "artifact", value_name = "PATH")]
        artifacts: Vec<String>,

        /// Initial verdict, for importing already-reviewed history
        #[arg(long)]
        verdict: Option<String>,
    },

    /// Show a record and its review history
    Show { id: String },
}

pub fn handle_command(command: RecordCommand, records: &dyn IActionRecordStorage) -> Result<Value> {
    match command {
        RecordCommand::Add {
            id,
            method,
            description,
            artifacts,
            verdict,
        } => {
            let mut record = ActionRecord::new(id, method, description, artifacts);
            if let Some(raw) = verdict {
                match raw.parse::<Verdict>() {
                    Ok(v) => record = record.with_verdict(v),
                    Err(e) => return Ok(error_response(&e)),
                }
            }
            if let Err(e) = records.insert_record(&record) {
                return Ok(error_response(&e));
            }
            Ok(json!({ "success": true, "record_id": record.id, "verdict": record.verdict }))
        }
        RecordCommand::Show { id } => {
            let found = match records.get_record(&id) {
                Ok(found) => found,
                Err(e) => return Ok(error_response(&e)),
            };
            let Some(record) = found else {
                return Ok(error_response(&lore_core::LoreError::NotFound { id }));
            };
            let history = match records.feedback_history(&id) {
                Ok(history) => history,
                Err(e) => return Ok(error_response(&e)),
            };
            Ok(json!({
                "success": true,
                "record": serde_json::to_value(&record)?,
                "history": serde_json::to_value(&history)?,
            }))
        }
    }
}
