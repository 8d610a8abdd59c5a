//! Learned patterns: the unit of knowledge the engine stores and recommends.

pub mod applicability;
pub mod base;
pub mod category;
pub mod confidence;
pub mod payload;

pub use applicability::ApplicableContexts;
pub use base::{laplace_success_rate, Pattern};
pub use category::PatternCategory;
pub use confidence::Confidence;
pub use payload::RulePayload;
