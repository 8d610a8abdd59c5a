//! Responsive layout strategy: breakpoint-scoped utility tokens and grid/flex usage.

use std::sync::LazyLock;

use lore_core::constants::{LAYOUT_STRATEGY_PATTERN, MIN_LAYOUT_RECORDS};
use lore_core::pattern::{ApplicableContexts, Pattern, RulePayload};
use lore_core::record::ActionRecord;
use regex::Regex;
use tracing::debug;

use super::approved;
use super::text::{mentions_any, push_unique};

static BREAKPOINT_TOKEN_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\b[a-z0-9]+:[a-z0-9][a-z0-9\-\[\]./]*").ok());
static LAYOUT_MENTION_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:grid|flex)\b").ok());

const LAYOUT_KEYWORDS: &[&str] = &["responsive", "overflow", "grid", "mobile", "breakpoint"];

const ISSUE_TYPES: &[&str] = &["mobile_break", "overflow", "responsive"];
const SCREEN_SIZES: &[&str] = &["small", "medium", "large"];

const CEILING: f64 = 0.92;
const BASE: f64 = 0.7;
const PER_RECORD: f64 = 0.04;

pub fn extract_layout_strategy(records: &[ActionRecord]) -> Option<Pattern> {
    let qualifying: Vec<&ActionRecord> = approved(records)
        .into_iter()
        .filter(|r| mentions_any(&r.description, LAYOUT_KEYWORDS))
        .collect();
    if qualifying.len() < MIN_LAYOUT_RECORDS {
        debug!(
            qualifying = qualifying.len(),
            required = MIN_LAYOUT_RECORDS,
            "layout extraction skipped: too few responsive records"
        );
        return None;
    }

    let mut breakpoint_tokens = Vec::new();
    let mut layout_mentions = Vec::new();
    for record in &qualifying {
        let text = record.description.as_str();
        if let Some(re) = BREAKPOINT_TOKEN_RE.as_ref() {
            for m in re.find_iter(text) {
                push_unique(&mut breakpoint_tokens, m.as_str());
            }
        }
        if let Some(re) = LAYOUT_MENTION_RE.as_ref() {
            for m in re.find_iter(text) {
                push_unique(&mut layout_mentions, m.as_str().to_lowercase());
            }
        }
    }

    let payload = RulePayload::LayoutStrategy {
        breakpoint_tokens,
        layout_mentions,
    };
    if payload.is_empty() {
        debug!("layout extraction skipped: nothing observed");
        return None;
    }

    let n = qualifying.len();
    let contexts = ApplicableContexts {
        issue_types: ISSUE_TYPES.iter().map(|s| s.to_string()).collect(),
        screen_sizes: SCREEN_SIZES.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    };
    Some(Pattern::new(
        LAYOUT_STRATEGY_PATTERN,
        payload,
        contexts,
        (BASE + PER_RECORD * n as f64).min(CEILING),
        n as u64,
    ))
}
