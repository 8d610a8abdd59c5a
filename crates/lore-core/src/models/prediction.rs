use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pattern::PatternCategory;

/// Description of a live problem to recommend against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PredictionContext {
    /// File extensions involved, without the leading dot.
    pub file_types: Vec<String>,
    /// Path of the file being worked on. Its extension joins `file_types`.
    pub file_path: Option<String>,
    pub issue_type: Option<String>,
    pub directory: Option<String>,
}

impl PredictionContext {
    /// Effective file types: explicit ones plus the extension of `file_path`,
    /// lower-cased and stripped of any leading dot.
    pub fn effective_file_types(&self) -> Vec<String> {
        let mut types: Vec<String> = self
            .file_types
            .iter()
            .map(|t| t.trim_start_matches('.').to_lowercase())
            .collect();
        if let Some(ext) = self
            .file_path
            .as_deref()
            .and_then(|p| Path::new(p).extension())
            .and_then(|e| e.to_str())
        {
            let ext = ext.to_lowercase();
            if !types.contains(&ext) {
                types.push(ext);
            }
        }
        types
    }

    /// Directory used for prefix matching: explicit `directory`, else the
    /// parent of `file_path`.
    pub fn effective_directory(&self) -> Option<String> {
        if let Some(dir) = &self.directory {
            return Some(dir.clone());
        }
        self.file_path
            .as_deref()
            .and_then(|p| Path::new(p).parent())
            .and_then(|d| d.to_str())
            .filter(|d| !d.is_empty())
            .map(str::to_string)
    }
}

/// One ranked recommendation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub pattern_name: String,
    pub category: PatternCategory,
    pub recommendation: String,
    pub reasoning: String,
    pub confidence: f64,
}

/// Ranked recommendations, highest confidence first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PredictionReport {
    pub predictions: Vec<Prediction>,
    /// Maximum confidence observed, 0.0 when there are no predictions.
    pub highest_confidence: f64,
}
