use serde::{Deserialize, Serialize};

/// Whether an upsert created a new pattern or folded into an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpsertOutcome {
    Inserted,
    Updated,
}

/// Result of one `train` pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingReport {
    /// Reviewed records read from the corpus.
    pub records_scanned: usize,
    /// Patterns successfully persisted (inserted + updated).
    pub patterns_learned: usize,
    pub inserted: Vec<String>,
    pub updated: Vec<String>,
    /// Names of patterns whose persistence failed. The pass continued past them.
    pub failed: Vec<String>,
}

impl TrainingReport {
    pub fn record(&mut self, name: &str, outcome: UpsertOutcome) {
        match outcome {
            UpsertOutcome::Inserted => self.inserted.push(name.to_string()),
            UpsertOutcome::Updated => self.updated.push(name.to_string()),
        }
        self.patterns_learned += 1;
    }
}
