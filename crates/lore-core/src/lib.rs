//! # lore-core
//!
//! Foundation crate for the Lore pattern learning engine.
//! Defines the domain types, result models, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod pattern;
pub mod record;
pub mod tracing_setup;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::LoreConfig;
pub use errors::{LoreError, LoreResult};
pub use pattern::{ApplicableContexts, Confidence, Pattern, PatternCategory, RulePayload};
pub use record::{ActionRecord, FeedbackEvent, Verdict};
