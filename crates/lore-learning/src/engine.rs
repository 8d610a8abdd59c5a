//! PatternEngine: implements IPatternEngine and orchestrates the learning pipeline.

use std::collections::BTreeMap;
use std::sync::Arc;

use lore_core::config::LoreConfig;
use lore_core::errors::{LoreError, LoreResult};
use lore_core::models::{
    CategorySummary, FeedbackReceipt, FeedbackRequest, PatternAnalysis, PredictionContext,
    PredictionReport, TrainingReport,
};
use lore_core::pattern::{Pattern, PatternCategory};
use lore_core::traits::{IActionRecordStorage, IPatternEngine, IPatternStorage};
use tracing::{info, warn};

use crate::corpus::CorpusReader;
use crate::extraction;
use crate::feedback::FeedbackProcessor;
use crate::matching::ContextMatcher;
use crate::merge::{merge_patterns, MergeSettings};

/// The engine facade.
///
/// The enable gate is fixed at construction. When disabled, every operation
/// fails with [`LoreError::EngineDisabled`] before touching storage.
pub struct PatternEngine {
    enabled: bool,
    patterns: Arc<dyn IPatternStorage>,
    corpus: CorpusReader,
    merge: MergeSettings,
    matcher: ContextMatcher,
    feedback: FeedbackProcessor,
    high_confidence: f64,
}

impl PatternEngine {
    pub fn new(
        config: &LoreConfig,
        patterns: Arc<dyn IPatternStorage>,
        records: Arc<dyn IActionRecordStorage>,
    ) -> Self {
        Self {
            enabled: config.engine.enabled,
            corpus: CorpusReader::new(Arc::clone(&records), config.learning.corpus_page_size),
            merge: MergeSettings::from(&config.learning),
            matcher: ContextMatcher::from_config(Arc::clone(&patterns), &config.prediction),
            feedback: FeedbackProcessor::new(records),
            high_confidence: config.prediction.high_confidence,
            patterns,
        }
    }

    /// Swap the context matcher, e.g. for a custom predicate.
    pub fn with_matcher(mut self, matcher: ContextMatcher) -> Self {
        self.matcher = matcher;
        self
    }

    fn ensure_enabled(&self) -> LoreResult<()> {
        if self.enabled {
            Ok(())
        } else {
            Err(LoreError::EngineDisabled)
        }
    }

    fn summarize(patterns: &[Pattern], high_confidence: f64) -> CategorySummary {
        let total = patterns.len();
        let high = patterns
            .iter()
            .filter(|p| p.confidence.value() >= high_confidence)
            .count();
        let average = if total == 0 {
            0.0
        } else {
            patterns.iter().map(|p| p.confidence.value()).sum::<f64>() / total as f64
        };
        CategorySummary {
            total,
            high_confidence: high,
            average_confidence: average,
        }
    }
}

impl IPatternEngine for PatternEngine {
    fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn train(&self) -> LoreResult<TrainingReport> {
        self.ensure_enabled()?;

        let records = self.corpus.load()?;
        let mut report = TrainingReport {
            records_scanned: records.len(),
            ..Default::default()
        };
        if records.is_empty() {
            info!("no reviewed records, nothing to learn");
            return Ok(report);
        }

        let merge = |existing: &Pattern, candidate: &Pattern| {
            merge_patterns(existing, candidate, &self.merge)
        };
        for candidate in extraction::extract_all(&records) {
            match self.patterns.upsert_with(&candidate, &merge) {
                Ok(outcome) => {
                    info!(
                        pattern = %candidate.name,
                        outcome = ?outcome,
                        confidence = candidate.confidence.value(),
                        usage = candidate.usage_frequency,
                        "pattern learned"
                    );
                    report.record(&candidate.name, outcome);
                }
                Err(e) => {
                    warn!(pattern = %candidate.name, error = %e, "failed to persist pattern");
                    report.failed.push(candidate.name.clone());
                }
            }
        }

        info!(
            records = report.records_scanned,
            learned = report.patterns_learned,
            failed = report.failed.len(),
            "training pass complete"
        );
        Ok(report)
    }

    fn analyze(
        &self,
        category: Option<PatternCategory>,
        include_inactive: bool,
    ) -> LoreResult<PatternAnalysis> {
        self.ensure_enabled()?;

        let patterns = self.patterns.list_patterns(category, include_inactive)?;
        let overall = Self::summarize(&patterns, self.high_confidence);

        let mut grouped: BTreeMap<PatternCategory, Vec<Pattern>> = BTreeMap::new();
        for p in &patterns {
            grouped.entry(p.category).or_default().push(p.clone());
        }
        let by_category = grouped
            .into_iter()
            .map(|(cat, group)| (cat, Self::summarize(&group, self.high_confidence)))
            .collect();

        Ok(PatternAnalysis {
            total_patterns: overall.total,
            high_confidence_patterns: overall.high_confidence,
            average_confidence: overall.average_confidence,
            by_category,
            patterns,
        })
    }

    fn predict(&self, context: &PredictionContext) -> LoreResult<PredictionReport> {
        self.ensure_enabled()?;
        self.matcher.predict(context)
    }

    fn feedback(&self, request: &FeedbackRequest) -> LoreResult<FeedbackReceipt> {
        self.ensure_enabled()?;
        self.feedback.process(request)
    }
}
