use crate::errors::LoreResult;
use crate::models::{
    FeedbackReceipt, FeedbackRequest, PatternAnalysis, PredictionContext, PredictionReport,
    TrainingReport,
};
use crate::pattern::PatternCategory;

/// The four engine operations.
pub trait IPatternEngine: Send + Sync {
    /// The enable gate. When false every operation fails with `EngineDisabled`.
    fn is_enabled(&self) -> bool;

    /// Learn patterns from the reviewed corpus.
    fn train(&self) -> LoreResult<TrainingReport>;

    /// List stored patterns, optionally for one category. Inactive patterns
    /// are skipped unless `include_inactive` is set.
    fn analyze(
        &self,
        category: Option<PatternCategory>,
        include_inactive: bool,
    ) -> LoreResult<PatternAnalysis>;

    /// Rank stored patterns against a live context.
    fn predict(&self, context: &PredictionContext) -> LoreResult<PredictionReport>;

    /// Record a human verdict against a past action.
    fn feedback(&self, request: &FeedbackRequest) -> LoreResult<FeedbackReceipt>;
}
