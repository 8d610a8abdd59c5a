//! # lore-learning
//!
//! Learning pipeline: corpus read → per-category extraction → confidence merge → store.
//! Context matching ranks stored patterns against a live problem; the feedback
//! processor records human verdicts. `PatternEngine` orchestrates all four operations.

pub mod corpus;
pub mod dispatch;
pub mod engine;
pub mod extraction;
pub mod feedback;
pub mod matching;
pub mod merge;

pub use dispatch::handle_request;
pub use engine::PatternEngine;
pub use matching::{ApplicabilityPredicate, ContextMatcher};
pub use merge::{merge_patterns, MergeSettings};
