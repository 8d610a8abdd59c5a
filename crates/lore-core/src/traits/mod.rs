//! Seams between the engine and its collaborators.

pub mod engine;
pub mod storage;

pub use engine::IPatternEngine;
pub use storage::{IActionRecordStorage, IPatternStorage, PatternMerge};
