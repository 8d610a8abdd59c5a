use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Verdict;

/// One historical corrective action, produced by an external collaborator.
///
/// The engine never deletes records and only writes the verdict fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub id: String,
    /// How the action was produced. Free-form grouping key.
    pub method: String,
    pub description: String,
    /// Path-like strings identifying what the action modified, in order.
    pub artifacts_touched: Vec<String>,
    #[serde(default)]
    pub verdict: Verdict,
    #[serde(default)]
    pub verdict_reason: Option<String>,
    #[serde(default = "default_learning_weight")]
    pub learning_weight: f64,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_learning_weight() -> f64 {
    1.0
}

impl ActionRecord {
    /// A fresh, unreviewed record.
    pub fn new(
        id: impl Into<String>,
        method: impl Into<String>,
        description: impl Into<String>,
        artifacts_touched: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            method: method.into(),
            description: description.into(),
            artifacts_touched,
            verdict: Verdict::Unset,
            verdict_reason: None,
            learning_weight: default_learning_weight(),
            created_at: Utc::now(),
        }
    }

    /// Builder-style verdict, mainly for seeding corpora.
    pub fn with_verdict(mut self, verdict: Verdict) -> Self {
        self.verdict = verdict;
        self.learning_weight = verdict.learning_weight();
        self
    }

    pub fn is_approved(&self) -> bool {
        self.verdict == Verdict::Approved
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaults() {
        let json = r#"{"id":"a1","method":"auto_fix","description":"d","artifacts_touched":[]}"#;
        let record: ActionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.verdict, Verdict::Unset);
        assert_eq!(record.learning_weight, 1.0);
        assert!(record.verdict_reason.is_none());
    }

    #[test]
    fn with_verdict_sets_weight() {
        let record = ActionRecord::new("a", "m", "d", vec![]).with_verdict(Verdict::Rejected);
        assert_eq!(record.learning_weight, 0.5);
        assert!(!record.is_approved());
    }
}
