use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::pattern::{Pattern, PatternCategory};

/// Per-category counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategorySummary {
    pub total: usize,
    pub high_confidence: usize,
    pub average_confidence: f64,
}

/// Read-only listing of stored patterns with summary counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PatternAnalysis {
    pub total_patterns: usize,
    pub high_confidence_patterns: usize,
    pub average_confidence: f64,
    pub by_category: BTreeMap<PatternCategory, CategorySummary>,
    pub patterns: Vec<Pattern>,
}
