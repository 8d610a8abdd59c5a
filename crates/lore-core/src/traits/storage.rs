use crate::errors::LoreResult;
use crate::models::UpsertOutcome;
use crate::pattern::{Pattern, PatternCategory};
use crate::record::{ActionRecord, FeedbackEvent, Verdict};

/// Folds a candidate into an existing stored pattern: `(existing, candidate) -> merged`.
pub type PatternMerge<'a> = &'a dyn Fn(&Pattern, &Pattern) -> Pattern;

/// Keyed pattern repository with atomic upsert-merge.
pub trait IPatternStorage: Send + Sync {
    fn get_pattern(&self, name: &str) -> LoreResult<Option<Pattern>>;

    /// Insert `candidate` if no pattern has its name, otherwise replace the
    /// stored row with `merge(existing, candidate)`. Read and write happen in
    /// one transaction so concurrent callers never lose a fold.
    fn upsert_with(&self, candidate: &Pattern, merge: PatternMerge<'_>) -> LoreResult<UpsertOutcome>;

    /// Active patterns with confidence >= `min_confidence`, highest first.
    fn query_active(&self, min_confidence: f64) -> LoreResult<Vec<Pattern>>;

    /// Patterns filtered by category, highest confidence first.
    fn list_patterns(
        &self,
        category: Option<PatternCategory>,
        include_inactive: bool,
    ) -> LoreResult<Vec<Pattern>>;

    /// Administrative soft-disable. Returns false when no pattern has `name`.
    fn set_pattern_active(&self, name: &str, active: bool) -> LoreResult<bool>;

    fn count_patterns(&self) -> LoreResult<usize>;
}

/// Historical corpus of verdict-tagged actions.
pub trait IActionRecordStorage: Send + Sync {
    /// Used by external producers to supply the corpus.
    fn insert_record(&self, record: &ActionRecord) -> LoreResult<()>;

    fn get_record(&self, id: &str) -> LoreResult<Option<ActionRecord>>;

    /// Most recent records carrying a verdict, newest first, at most `limit`.
    fn recent_reviewed(&self, limit: usize) -> LoreResult<Vec<ActionRecord>>;

    /// Overwrite the record's verdict fields and append an audit event, atomically.
    /// Returns the appended event, or `None` (writing nothing) when the record
    /// does not exist.
    fn apply_verdict(
        &self,
        action_id: &str,
        verdict: Verdict,
        reason: Option<String>,
        reviewer_id: Option<String>,
    ) -> LoreResult<Option<FeedbackEvent>>;

    /// Audit events for one action, oldest first.
    fn feedback_history(&self, action_id: &str) -> LoreResult<Vec<FeedbackEvent>>;
}
