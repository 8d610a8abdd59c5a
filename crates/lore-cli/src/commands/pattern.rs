use anyhow::Result;
use clap::Subcommand;
use lore_core::traits::IPatternStorage;
use lore_core::LoreError;
use lore_learning::dispatch::error_response;
use serde_json::{json, Value};
use tracing::info;

#[derive(Subcommand)]
pub enum PatternCommand {
    /// Soft-disable a pattern so it is no longer predicted
    Deactivate { name: String },

    /// Re-enable a soft-disabled pattern
    Activate { name: String },
}

pub fn handle_command(command: PatternCommand, patterns: &dyn IPatternStorage) -> Result<Value> {
    let (name, active) = match command {
        PatternCommand::Deactivate { name } => (name, false),
        PatternCommand::Activate { name } => (name, true),
    };
    match patterns.set_pattern_active(&name, active) {
        Ok(true) => {
            info!(pattern = %name, active, "pattern activity changed");
            Ok(json!({ "success": true, "pattern": name, "is_active": active }))
        }
        Ok(false) => Ok(error_response(&LoreError::InvalidRequest {
            reason: format!("no pattern named '{name}'"),
        })),
        Err(e) => Ok(error_response(&e)),
    }
}
