//! Structural conventions from touched component and hook files.

use std::sync::LazyLock;

use lore_core::constants::{MIN_STRUCTURAL_RECORDS, STRUCTURAL_CONVENTION_PATTERN};
use lore_core::pattern::{ApplicableContexts, Pattern, RulePayload};
use lore_core::record::ActionRecord;
use regex::Regex;
use tracing::debug;

use super::text::{file_stem, push_unique, segment_index, segments};
use super::{approved, SCRIPT_FILE_TYPES};

static UI_PRIMITIVE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:Card|Button|Dialog|Modal|Input|Form|Table|Badge|Tabs|Select|Sheet|Toast|Tooltip|Avatar)\b",
    )
    .ok()
});

const COMPONENTS_DIR: &str = "components";
const HOOKS_DIR: &str = "hooks";

const CEILING: f64 = 0.88;
const BASE: f64 = 0.65;
const PER_RECORD: f64 = 0.05;

fn touches_structure(record: &ActionRecord) -> bool {
    record
        .artifacts_touched
        .iter()
        .any(|a| segment_index(a, &[COMPONENTS_DIR, HOOKS_DIR]).is_some())
}

pub fn extract_structural_conventions(records: &[ActionRecord]) -> Option<Pattern> {
    let qualifying: Vec<&ActionRecord> = approved(records)
        .into_iter()
        .filter(|r| touches_structure(r))
        .collect();
    if qualifying.len() < MIN_STRUCTURAL_RECORDS {
        debug!(
            qualifying = qualifying.len(),
            required = MIN_STRUCTURAL_RECORDS,
            "structural extraction skipped: too few component/hook records"
        );
        return None;
    }

    let mut component_types = Vec::new();
    let mut hook_names = Vec::new();
    let mut ui_primitives = Vec::new();
    let mut directory_conventions = Vec::new();

    for record in &qualifying {
        for artifact in &record.artifacts_touched {
            let Some(idx) = segment_index(artifact, &[COMPONENTS_DIR, HOOKS_DIR]) else {
                continue;
            };
            let parts = segments(artifact);
            push_unique(&mut directory_conventions, parts[..=idx].join("/"));
            if let Some(stem) = file_stem(artifact) {
                if parts[idx] == HOOKS_DIR {
                    push_unique(&mut hook_names, stem);
                } else {
                    push_unique(&mut component_types, stem);
                }
            }
        }
        if let Some(re) = UI_PRIMITIVE_RE.as_ref() {
            for m in re.find_iter(&record.description) {
                push_unique(&mut ui_primitives, m.as_str());
            }
        }
    }

    let contexts = ApplicableContexts {
        file_types: SCRIPT_FILE_TYPES.iter().map(|s| s.to_string()).collect(),
        directory_prefixes: directory_conventions.clone(),
        ..Default::default()
    };
    let payload = RulePayload::StructuralConvention {
        component_types,
        hook_names,
        ui_primitives,
        directory_conventions,
    };
    if payload.is_empty() {
        debug!("structural extraction skipped: nothing observed");
        return None;
    }

    let n = qualifying.len();
    Some(Pattern::new(
        STRUCTURAL_CONVENTION_PATTERN,
        payload,
        contexts,
        (BASE + PER_RECORD * n as f64).min(CEILING),
        n as u64,
    ))
}
