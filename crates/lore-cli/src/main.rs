//! # lore
//!
//! Command-line front end for the pattern learning engine.
//!
//! - `lore train|analyze|predict|feedback` - the four engine operations
//! - `lore request '<json>'` - raw `{action, data?, pattern_type?, context?}` payload
//! - `lore record add` - supply an action record to the corpus
//! - `lore pattern activate|deactivate` - administrative soft-disable
//!
//! Every command prints one JSON object to stdout.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lore_core::tracing_setup::{init_tracing, init_tracing_json};
use lore_core::LoreConfig;
use lore_learning::PatternEngine;
use lore_storage::StorageEngine;
use tracing::debug;

mod commands;

use commands::{PatternCommand, RecordCommand};

/// Lore - learn remediation patterns from reviewed actions
#[derive(Parser)]
#[command(name = "lore")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true, env = "LORE_CONFIG_PATH", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Database file (overrides storage.db_path)
    #[arg(long, global = true, value_name = "FILE")]
    db: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Learn patterns from the reviewed corpus
    Train,

    /// List stored patterns with summary counts
    Analyze {
        /// Restrict to one category (style_convention, layout_strategy, ...)
        #[arg(long)]
        category: Option<String>,

        /// Include soft-disabled patterns
        #[arg(long)]
        include_inactive: bool,
    },

    /// Rank stored patterns against a live context
    Predict {
        /// File extension involved (repeatable)
        #[arg(long = "file-type", value_name = "EXT")]
        file_types: Vec<String>,

        #[arg(long)]
        file_path: Option<String>,

        #[arg(long)]
        issue_type: Option<String>,

        #[arg(long)]
        directory: Option<String>,
    },

    /// Record a human verdict against a past action
    Feedback {
        action_id: String,

        /// approved, rejected or modified
        verdict: String,

        #[arg(long)]
        reason: Option<String>,

        #[arg(long)]
        reviewer: Option<String>,
    },

    /// Send a raw JSON request
    Request {
        /// `{"action": ..., "data": ..., "pattern_type": ..., "context": ...}`
        json: String,
    },

    /// Action record corpus
    Record {
        #[command(subcommand)]
        command: RecordCommand,
    },

    /// Pattern administration
    Pattern {
        #[command(subcommand)]
        command: PatternCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.json_logs {
        init_tracing_json();
    } else {
        init_tracing();
    }

    let config = load_config(cli.config.as_deref(), cli.db.as_ref())?;
    debug!(db = %config.storage.db_path, enabled = config.engine.enabled, "configuration loaded");

    let storage = Arc::new(
        StorageEngine::from_config(&config.storage)
            .with_context(|| format!("failed to open database {}", config.storage.db_path))?,
    );
    let engine = PatternEngine::new(&config, storage.clone(), storage.clone());

    let response = match cli.command {
        Commands::Train => commands::train(&engine),
        Commands::Analyze {
            category,
            include_inactive,
        } => commands::analyze(&engine, category, include_inactive),
        Commands::Predict {
            file_types,
            file_path,
            issue_type,
            directory,
        } => commands::predict(&engine, file_types, file_path, issue_type, directory),
        Commands::Feedback {
            action_id,
            verdict,
            reason,
            reviewer,
        } => commands::feedback(&engine, action_id, verdict, reason, reviewer),
        Commands::Request { json } => commands::raw_request(&engine, &json)?,
        Commands::Record { command } => commands::record::handle_command(command, storage.as_ref())?,
        Commands::Pattern { command } => commands::pattern::handle_command(command, storage.as_ref())?,
    };

    commands::emit(&response)
}

fn load_config(path: Option<&std::path::Path>, db: Option<&PathBuf>) -> Result<LoreConfig> {
    let mut config = LoreConfig::load(path).context("failed to load configuration")?;
    if let Some(db) = db {
        config.storage.db_path = db.display().to_string();
    }
    Ok(config)
}
