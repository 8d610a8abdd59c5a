//! Context matcher: filters active, sufficiently confident patterns through an
//! applicability predicate and ranks the survivors by confidence.

pub mod predicate;
pub mod recommendation;

use std::sync::Arc;

use lore_core::config::PredictionConfig;
use lore_core::errors::LoreResult;
use lore_core::models::{Prediction, PredictionContext, PredictionReport};
use lore_core::traits::IPatternStorage;
use tracing::debug;

pub use predicate::{AllOf, ApplicabilityPredicate, DirectoryPrefixPredicate, MembershipPredicate};

pub struct ContextMatcher {
    storage: Arc<dyn IPatternStorage>,
    predicate: Box<dyn ApplicabilityPredicate>,
    min_confidence: f64,
    max_results: Option<usize>,
}

impl ContextMatcher {
    pub fn new(
        storage: Arc<dyn IPatternStorage>,
        predicate: Box<dyn ApplicabilityPredicate>,
        min_confidence: f64,
        max_results: Option<usize>,
    ) -> Self {
        Self {
            storage,
            predicate,
            min_confidence,
            max_results,
        }
    }

    /// Membership predicate, plus the directory-prefix predicate when
    /// `match_directories` is set.
    pub fn from_config(storage: Arc<dyn IPatternStorage>, config: &PredictionConfig) -> Self {
        let predicate: Box<dyn ApplicabilityPredicate> = if config.match_directories {
            Box::new(AllOf::new(vec![
                Box::new(MembershipPredicate),
                Box::new(DirectoryPrefixPredicate),
            ]))
        } else {
            Box::new(MembershipPredicate)
        };
        Self::new(storage, predicate, config.min_confidence, config.max_results)
    }

    pub fn predict(&self, context: &PredictionContext) -> LoreResult<PredictionReport> {
        let candidates = self.storage.query_active(self.min_confidence)?;
        let limit = self.max_results.unwrap_or(usize::MAX);

        let predictions: Vec<Prediction> = candidates
            .iter()
            .filter(|p| {
                let hit = self.predicate.matches(p, context);
                debug!(pattern = %p.name, matched = hit, "pattern evaluated");
                hit
            })
            .take(limit)
            .map(|p| Prediction {
                pattern_name: p.name.clone(),
                category: p.category,
                recommendation: recommendation::recommendation(p),
                reasoning: recommendation::reasoning(p),
                confidence: p.confidence.value(),
            })
            .collect();

        let highest_confidence = predictions
            .iter()
            .map(|p| p.confidence)
            .fold(0.0, f64::max);

        Ok(PredictionReport {
            predictions,
            highest_confidence,
        })
    }
}
