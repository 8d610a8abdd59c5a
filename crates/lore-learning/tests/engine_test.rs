//! End-to-end behaviour of the engine facade over in-memory storage.

use std::sync::Arc;

use lore_core::config::{LoreConfig, SuccessRatePolicy};
use lore_core::constants::{
    LAYOUT_STRATEGY_PATTERN, STRUCTURAL_CONVENTION_PATTERN, STYLE_CONVENTION_PATTERN,
};
use lore_core::errors::{LoreError, LoreResult, StorageError};
use lore_core::models::{FeedbackRequest, PredictionContext, UpsertOutcome};
use lore_core::pattern::{ApplicableContexts, Pattern, PatternCategory, RulePayload};
use lore_core::record::{ActionRecord, Verdict};
use lore_core::traits::{IActionRecordStorage, IPatternEngine, IPatternStorage, PatternMerge};
use lore_learning::{ApplicabilityPredicate, ContextMatcher, PatternEngine};
use lore_storage::StorageEngine;

fn setup(config: LoreConfig) -> (PatternEngine, Arc<StorageEngine>) {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    let engine = PatternEngine::new(&config, storage.clone(), storage.clone());
    (engine, storage)
}

fn seed(storage: &StorageEngine, id: &str, description: &str, artifacts: &[&str], verdict: Verdict) {
    let record = ActionRecord::new(
        id,
        "auto_fix",
        description,
        artifacts.iter().map(|s| s.to_string()).collect(),
    )
    .with_verdict(verdict);
    storage.insert_record(&record).unwrap();
}

fn seed_style_batch(storage: &StorageEngine, prefix: &str, count: usize) {
    for i in 0..count {
        seed(
            storage,
            &format!("{prefix}-{i}"),
            "Use import { cn } from 'x' when merging class names",
            &["src/lib/utils.ts"],
            Verdict::Approved,
        );
    }
}

fn unrestricted(name: &str, confidence: f64, contexts: ApplicableContexts) -> Pattern {
    Pattern::new(
        name,
        RulePayload::GenericStrategy {
            guidance: vec![name.to_string()],
        },
        contexts,
        confidence,
        4,
    )
}

fn store(storage: &StorageEngine, pattern: &Pattern) {
    storage
        .upsert_with(pattern, &|existing: &Pattern, _: &Pattern| existing.clone())
        .unwrap();
}

#[test]
fn three_style_records_learn_one_pattern() {
    let (engine, storage) = setup(LoreConfig::default());
    seed_style_batch(&storage, "a", 3);

    let report = engine.train().unwrap();
    assert_eq!(report.records_scanned, 3);
    assert_eq!(report.patterns_learned, 1);
    assert_eq!(report.inserted, vec![STYLE_CONVENTION_PATTERN]);

    let pattern = storage.get_pattern(STYLE_CONVENTION_PATTERN).unwrap().unwrap();
    assert_eq!(pattern.usage_frequency, 3);
    assert!((pattern.confidence.value() - 0.75).abs() < 1e-9);
    assert_eq!(storage.count_patterns().unwrap(), 1);
}

#[test]
fn training_twice_accumulates_frequency() {
    let (engine, storage) = setup(LoreConfig::default());
    seed_style_batch(&storage, "a", 3);

    engine.train().unwrap();
    let second = engine.train().unwrap();
    assert_eq!(second.updated, vec![STYLE_CONVENTION_PATTERN]);

    let pattern = storage.get_pattern(STYLE_CONVENTION_PATTERN).unwrap().unwrap();
    assert_eq!(pattern.usage_frequency, 6);
    assert!((pattern.confidence.value() - 0.75).abs() < 1e-9);
    // Default policy keeps the latest candidate's rate: 3 / 4.
    assert!((pattern.success_rate - 0.75).abs() < 1e-9);
}

#[test]
fn accumulated_policy_recomputes_success_rate() {
    let mut config = LoreConfig::default();
    config.learning.success_rate_policy = SuccessRatePolicy::Accumulated;
    let (engine, storage) = setup(config);
    seed_style_batch(&storage, "a", 3);

    engine.train().unwrap();
    engine.train().unwrap();

    let pattern = storage.get_pattern(STYLE_CONVENTION_PATTERN).unwrap().unwrap();
    assert_eq!(pattern.usage_frequency, 6);
    assert!((pattern.success_rate - 6.0 / 7.0).abs() < 1e-9);
}

#[test]
fn disabled_engine_rejects_everything_without_side_effects() {
    let mut config = LoreConfig::default();
    config.engine.enabled = false;
    let (engine, storage) = setup(config);
    seed_style_batch(&storage, "a", 3);

    assert!(matches!(engine.train(), Err(LoreError::EngineDisabled)));
    assert!(matches!(engine.analyze(None, true), Err(LoreError::EngineDisabled)));
    assert!(matches!(
        engine.predict(&PredictionContext::default()),
        Err(LoreError::EngineDisabled)
    ));
    let request = FeedbackRequest {
        action_id: "a-0".into(),
        verdict: Verdict::Rejected,
        reason: None,
        reviewer_id: None,
    };
    assert!(matches!(engine.feedback(&request), Err(LoreError::EngineDisabled)));

    assert_eq!(storage.count_patterns().unwrap(), 0);
    assert_eq!(storage.get_record("a-0").unwrap().unwrap().verdict, Verdict::Approved);
    assert!(storage.feedback_history("a-0").unwrap().is_empty());
}

#[test]
fn empty_store_predicts_nothing() {
    let (engine, _storage) = setup(LoreConfig::default());
    let report = engine
        .predict(&PredictionContext {
            file_types: vec!["tsx".into()],
            ..Default::default()
        })
        .unwrap();
    assert!(report.predictions.is_empty());
    assert_eq!(report.highest_confidence, 0.0);
}

#[test]
fn empty_corpus_trains_nothing() {
    let (engine, storage) = setup(LoreConfig::default());
    seed(&storage, "pending", "import a from 'a'", &[], Verdict::Unset);
    let report = engine.train().unwrap();
    assert_eq!(report.records_scanned, 0);
    assert_eq!(report.patterns_learned, 0);
}

#[test]
fn below_threshold_batch_learns_nothing() {
    let (engine, storage) = setup(LoreConfig::default());
    seed(&storage, "1", "Responsive fix md:flex import a from 'a'", &["src/components/A.tsx"], Verdict::Approved);
    seed(&storage, "2", "Unrelated", &["README.md"], Verdict::Approved);
    seed(&storage, "3", "Mobile overflow sm:hidden", &["src/components/B.tsx"], Verdict::Rejected);

    let report = engine.train().unwrap();
    assert_eq!(report.records_scanned, 3);
    assert_eq!(report.patterns_learned, 0);
    assert_eq!(storage.count_patterns().unwrap(), 0);
}

#[test]
fn mixed_batch_learns_every_category() {
    let (engine, storage) = setup(LoreConfig::default());
    seed(
        &storage,
        "1",
        "Responsive grid fix: md:grid-cols-2 with import { Card } from '@/components/ui/card'",
        &["src/components/ProductGrid.tsx"],
        Verdict::Approved,
    );
    seed(
        &storage,
        "2",
        "Mobile overflow fixed with sm:flex-col and a Button",
        &["src/components/Header.tsx"],
        Verdict::Approved,
    );
    seed(&storage, "3", "Show a toast on save", &["src/hooks/useSave.ts"], Verdict::Approved);

    let report = engine.train().unwrap();
    assert_eq!(report.patterns_learned, 3);

    let layout = storage.get_pattern(LAYOUT_STRATEGY_PATTERN).unwrap().unwrap();
    assert_eq!(layout.usage_frequency, 2);
    assert!((layout.confidence.value() - 0.78).abs() < 1e-9);

    let structural = storage.get_pattern(STRUCTURAL_CONVENTION_PATTERN).unwrap().unwrap();
    assert_eq!(structural.usage_frequency, 3);
    assert!((structural.confidence.value() - 0.8).abs() < 1e-9);

    let overflow = engine
        .predict(&PredictionContext {
            file_path: Some("src/components/Header.tsx".into()),
            issue_type: Some("overflow".into()),
            ..Default::default()
        })
        .unwrap();
    let names: Vec<&str> = overflow.predictions.iter().map(|p| p.pattern_name.as_str()).collect();
    assert_eq!(names, vec![STRUCTURAL_CONVENTION_PATTERN, LAYOUT_STRATEGY_PATTERN, STYLE_CONVENTION_PATTERN]);
    assert!((overflow.highest_confidence - 0.8).abs() < 1e-9);
    assert_eq!(
        overflow.predictions[1].recommendation,
        "Apply responsive utilities: md:grid-cols-2, sm:flex-col"
    );
    assert_eq!(
        overflow.predictions[1].reasoning,
        "Based on 2 successful applications with 67% success rate"
    );
}

#[test]
fn tsx_context_excludes_foreign_file_types() {
    let (engine, storage) = setup(LoreConfig::default());
    store(&storage, &unrestricted("any", 0.8, ApplicableContexts::unrestricted()));
    store(
        &storage,
        &unrestricted(
            "css-only",
            0.9,
            ApplicableContexts {
                file_types: vec!["css".into()],
                ..Default::default()
            },
        ),
    );
    store(
        &storage,
        &unrestricted(
            "react",
            0.85,
            ApplicableContexts {
                file_types: vec!["tsx".into(), "jsx".into()],
                ..Default::default()
            },
        ),
    );
    store(&storage, &unrestricted("weak", 0.5, ApplicableContexts::unrestricted()));

    let report = engine
        .predict(&PredictionContext {
            file_types: vec!["tsx".into()],
            ..Default::default()
        })
        .unwrap();
    let names: Vec<&str> = report.predictions.iter().map(|p| p.pattern_name.as_str()).collect();
    assert_eq!(names, vec!["react", "any"]);
    assert!((report.highest_confidence - 0.85).abs() < 1e-9);
}

#[test]
fn inactive_patterns_are_never_predicted() {
    let (engine, storage) = setup(LoreConfig::default());
    store(&storage, &unrestricted("retired", 0.9, ApplicableContexts::unrestricted()));
    storage.set_pattern_active("retired", false).unwrap();

    assert!(engine.predict(&PredictionContext::default()).unwrap().predictions.is_empty());
    assert_eq!(engine.analyze(None, false).unwrap().total_patterns, 0);
    assert_eq!(engine.analyze(None, true).unwrap().total_patterns, 1);
}

#[test]
fn max_results_caps_predictions() {
    let mut config = LoreConfig::default();
    config.prediction.max_results = Some(1);
    let (engine, storage) = setup(config);
    store(&storage, &unrestricted("a", 0.9, ApplicableContexts::unrestricted()));
    store(&storage, &unrestricted("b", 0.8, ApplicableContexts::unrestricted()));

    let report = engine.predict(&PredictionContext::default()).unwrap();
    assert_eq!(report.predictions.len(), 1);
    assert_eq!(report.predictions[0].pattern_name, "a");
}

#[test]
fn directory_matching_narrows_structural_patterns() {
    let mut config = LoreConfig::default();
    config.prediction.match_directories = true;
    let (engine, storage) = setup(config);
    store(
        &storage,
        &unrestricted(
            "hooks-only",
            0.85,
            ApplicableContexts {
                directory_prefixes: vec!["src/hooks".into()],
                ..Default::default()
            },
        ),
    );

    let in_hooks = PredictionContext {
        file_path: Some("src/hooks/useCart.ts".into()),
        ..Default::default()
    };
    let in_pages = PredictionContext {
        file_path: Some("src/pages/Cart.tsx".into()),
        ..Default::default()
    };
    assert_eq!(engine.predict(&in_hooks).unwrap().predictions.len(), 1);
    assert!(engine.predict(&in_pages).unwrap().predictions.is_empty());
}

#[test]
fn analyze_summarizes_by_category() {
    let (engine, storage) = setup(LoreConfig::default());
    store(&storage, &unrestricted("g1", 0.9, ApplicableContexts::unrestricted()));
    store(&storage, &unrestricted("g2", 0.6, ApplicableContexts::unrestricted()));
    store(
        &storage,
        &Pattern::new(
            "layout",
            RulePayload::LayoutStrategy {
                breakpoint_tokens: vec!["md:flex".into()],
                layout_mentions: vec![],
            },
            ApplicableContexts::unrestricted(),
            0.8,
            2,
        ),
    );

    let all = engine.analyze(None, false).unwrap();
    assert_eq!(all.total_patterns, 3);
    assert_eq!(all.high_confidence_patterns, 2);
    assert!((all.average_confidence - (0.9 + 0.6 + 0.8) / 3.0).abs() < 1e-9);
    let generic = &all.by_category[&PatternCategory::GenericStrategy];
    assert_eq!(generic.total, 2);
    assert_eq!(generic.high_confidence, 1);

    let layouts = engine.analyze(Some(PatternCategory::LayoutStrategy), false).unwrap();
    assert_eq!(layouts.total_patterns, 1);
    assert_eq!(layouts.patterns[0].name, "layout");
    assert_eq!(layouts.by_category.len(), 1);
}

#[test]
fn feedback_overwrites_verdict_and_keeps_history() {
    let (engine, storage) = setup(LoreConfig::default());
    seed(&storage, "act-1", "d", &[], Verdict::Unset);

    let approve = FeedbackRequest {
        action_id: "act-1".into(),
        verdict: Verdict::Approved,
        reason: Some("clean fix".into()),
        reviewer_id: Some("rev".into()),
    };
    let receipt = engine.feedback(&approve).unwrap();
    assert_eq!(receipt.previous_verdict, Verdict::Unset);
    assert_eq!(receipt.learning_weight, 1.5);

    let reject = FeedbackRequest {
        verdict: Verdict::Rejected,
        reason: None,
        ..approve
    };
    let receipt = engine.feedback(&reject).unwrap();
    assert_eq!(receipt.previous_verdict, Verdict::Approved);
    assert_eq!(receipt.learning_weight, 0.5);

    let modify = FeedbackRequest {
        verdict: Verdict::Modified,
        ..reject
    };
    assert_eq!(engine.feedback(&modify).unwrap().learning_weight, 1.0);

    let record = storage.get_record("act-1").unwrap().unwrap();
    assert_eq!(record.verdict, Verdict::Modified);
    assert_eq!(storage.feedback_history("act-1").unwrap().len(), 3);
}

#[test]
fn feedback_on_unknown_action_is_not_found() {
    let (engine, storage) = setup(LoreConfig::default());
    store(&storage, &unrestricted("existing", 0.8, ApplicableContexts::unrestricted()));
    let before = storage.get_pattern("existing").unwrap();

    let err = engine
        .feedback(&FeedbackRequest {
            action_id: "ghost".into(),
            verdict: Verdict::Approved,
            reason: None,
            reviewer_id: None,
        })
        .unwrap_err();
    assert!(matches!(err, LoreError::NotFound { ref id } if id == "ghost"));
    assert_eq!(storage.count_patterns().unwrap(), 1);
    assert_eq!(storage.get_pattern("existing").unwrap(), before);
}

#[test]
fn feedback_requires_a_verdict() {
    let (engine, storage) = setup(LoreConfig::default());
    seed(&storage, "act-1", "d", &[], Verdict::Unset);
    let err = engine
        .feedback(&FeedbackRequest {
            action_id: "act-1".into(),
            verdict: Verdict::Unset,
            reason: None,
            reviewer_id: None,
        })
        .unwrap_err();
    assert!(matches!(err, LoreError::InvalidRequest { .. }));
}

#[test]
fn rejected_feedback_removes_records_from_next_training() {
    let (engine, storage) = setup(LoreConfig::default());
    seed_style_batch(&storage, "a", 3);
    engine
        .feedback(&FeedbackRequest {
            action_id: "a-0".into(),
            verdict: Verdict::Rejected,
            reason: None,
            reviewer_id: None,
        })
        .unwrap();

    let report = engine.train().unwrap();
    assert_eq!(report.records_scanned, 3);
    assert_eq!(report.patterns_learned, 0);
}

#[test]
fn corpus_page_size_bounds_training() {
    let mut config = LoreConfig::default();
    config.learning.corpus_page_size = 2;
    let (engine, storage) = setup(config);
    seed_style_batch(&storage, "a", 5);

    let report = engine.train().unwrap();
    assert_eq!(report.records_scanned, 2);
    assert_eq!(report.patterns_learned, 0);
}

/// Pattern store that refuses writes for one name and delegates everything else.
struct FailingStore {
    inner: Arc<StorageEngine>,
    failing: &'static str,
}

impl IPatternStorage for FailingStore {
    fn get_pattern(&self, name: &str) -> LoreResult<Option<Pattern>> {
        self.inner.get_pattern(name)
    }

    fn upsert_with(&self, candidate: &Pattern, merge: PatternMerge<'_>) -> LoreResult<UpsertOutcome> {
        if candidate.name == self.failing {
            return Err(LoreError::Storage(StorageError::SqliteError {
                message: "disk I/O error".to_string(),
            }));
        }
        self.inner.upsert_with(candidate, merge)
    }

    fn query_active(&self, min_confidence: f64) -> LoreResult<Vec<Pattern>> {
        self.inner.query_active(min_confidence)
    }

    fn list_patterns(
        &self,
        category: Option<PatternCategory>,
        include_inactive: bool,
    ) -> LoreResult<Vec<Pattern>> {
        self.inner.list_patterns(category, include_inactive)
    }

    fn set_pattern_active(&self, name: &str, active: bool) -> LoreResult<bool> {
        self.inner.set_pattern_active(name, active)
    }

    fn count_patterns(&self) -> LoreResult<usize> {
        self.inner.count_patterns()
    }
}

#[test]
fn persistence_failure_skips_one_pattern_and_keeps_the_rest() {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    let patterns = Arc::new(FailingStore {
        inner: storage.clone(),
        failing: STYLE_CONVENTION_PATTERN,
    });
    let engine = PatternEngine::new(&LoreConfig::default(), patterns, storage.clone());
    seed(
        &storage,
        "1",
        "Responsive grid fix: md:grid-cols-2 with import { Card } from '@/components/ui/card'",
        &["src/components/ProductGrid.tsx"],
        Verdict::Approved,
    );
    seed(
        &storage,
        "2",
        "Mobile overflow fixed with sm:flex-col and a Button",
        &["src/components/Header.tsx"],
        Verdict::Approved,
    );
    seed(&storage, "3", "Show a toast on save", &["src/hooks/useSave.ts"], Verdict::Approved);

    let report = engine.train().unwrap();
    assert_eq!(report.records_scanned, 3);
    assert_eq!(report.patterns_learned, 2);
    assert_eq!(report.failed, vec![STYLE_CONVENTION_PATTERN.to_string()]);
    assert!(report.inserted.iter().any(|n| n == LAYOUT_STRATEGY_PATTERN));
    assert!(report.inserted.iter().any(|n| n == STRUCTURAL_CONVENTION_PATTERN));
    assert!(report.updated.is_empty());

    assert!(storage.get_pattern(LAYOUT_STRATEGY_PATTERN).unwrap().is_some());
    assert!(storage.get_pattern(STRUCTURAL_CONVENTION_PATTERN).unwrap().is_some());
    assert!(storage.get_pattern(STYLE_CONVENTION_PATTERN).unwrap().is_none());
}

/// Admits only patterns whose name starts with a fixed prefix.
struct NamePrefix(&'static str);

impl ApplicabilityPredicate for NamePrefix {
    fn matches(&self, pattern: &Pattern, _context: &PredictionContext) -> bool {
        pattern.name.starts_with(self.0)
    }
}

#[test]
fn custom_matcher_replaces_default_predicate() {
    let storage = Arc::new(StorageEngine::open_in_memory().unwrap());
    let matcher = ContextMatcher::new(storage.clone(), Box::new(NamePrefix("team-")), 0.7, None);
    let engine = PatternEngine::new(&LoreConfig::default(), storage.clone(), storage.clone())
        .with_matcher(matcher);
    store(&storage, &unrestricted("team-grid", 0.8, ApplicableContexts::unrestricted()));
    store(&storage, &unrestricted("global-grid", 0.95, ApplicableContexts::unrestricted()));
    store(&storage, &unrestricted("team-weak", 0.6, ApplicableContexts::unrestricted()));

    let report = engine.predict(&PredictionContext::default()).unwrap();
    let names: Vec<&str> = report.predictions.iter().map(|p| p.pattern_name.as_str()).collect();
    assert_eq!(names, vec!["team-grid"]);
    assert!((report.highest_confidence - 0.8).abs() < 1e-9);
}
