//! Style conventions: import statements, component/hook mentions, practice tags.

use std::sync::LazyLock;

use lore_core::constants::{MIN_STYLE_RECORDS, STYLE_CONVENTION_PATTERN};
use lore_core::pattern::{ApplicableContexts, Pattern, RulePayload};
use lore_core::record::ActionRecord;
use regex::Regex;
use tracing::debug;

use super::text::push_unique;
use super::{approved, SCRIPT_FILE_TYPES};

static IMPORT_RE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(r#"import\s+[^\n;]+?\s+from\s+['"][^'"\n]+['"]"#).ok()
});
static HOOK_NAME_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\buse[A-Z][A-Za-z0-9]*\b").ok());
static STRUCTURAL_TERM_RE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b[a-z][a-z0-9_-]*\s+(?:component|hook)s?\b").ok());

/// Keyword → practice tag.
const PRACTICES: &[(&str, &str)] = &[
    ("toast", "use_toast_for_notifications"),
    ("query", "use_async_data_fetching"),
    ("semantic", "use_semantic_color_tokens"),
];

const CEILING: f64 = 0.95;
const BASE: f64 = 0.6;
const PER_RECORD: f64 = 0.05;

pub fn extract_style_conventions(records: &[ActionRecord]) -> Option<Pattern> {
    let qualifying = approved(records);
    if qualifying.len() < MIN_STYLE_RECORDS {
        debug!(
            qualifying = qualifying.len(),
            required = MIN_STYLE_RECORDS,
            "style extraction skipped: too few approved records"
        );
        return None;
    }

    let mut import_patterns = Vec::new();
    let mut structural_mentions = Vec::new();
    let mut preferred_practices = Vec::new();

    for record in &qualifying {
        let text = record.description.as_str();
        if let Some(re) = IMPORT_RE.as_ref() {
            for m in re.find_iter(text) {
                push_unique(&mut import_patterns, m.as_str());
            }
        }
        for re in [HOOK_NAME_RE.as_ref(), STRUCTURAL_TERM_RE.as_ref()]
            .into_iter()
            .flatten()
        {
            for m in re.find_iter(text) {
                push_unique(&mut structural_mentions, m.as_str());
            }
        }
        let lower = text.to_lowercase();
        for (keyword, tag) in PRACTICES {
            if lower.contains(keyword) {
                push_unique(&mut preferred_practices, *tag);
            }
        }
    }

    let payload = RulePayload::StyleConvention {
        import_patterns,
        structural_mentions,
        preferred_practices,
    };
    if payload.is_empty() {
        debug!("style extraction skipped: nothing observed");
        return None;
    }

    let n = qualifying.len();
    let contexts = ApplicableContexts {
        file_types: SCRIPT_FILE_TYPES.iter().map(|s| s.to_string()).collect(),
        ..Default::default()
    };
    Some(Pattern::new(
        STYLE_CONVENTION_PATTERN,
        payload,
        contexts,
        (BASE + PER_RECORD * n as f64).min(CEILING),
        n as u64,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lore_core::record::Verdict;

    fn approved_record(id: &str, description: &str) -> ActionRecord {
        ActionRecord::new(id, "auto_fix", description, vec![]).with_verdict(Verdict::Approved)
    }

    #[test]
    fn collects_imports_mentions_and_practices() {
        let records = vec![
            approved_record("1", "Use import { toast } from '@/hooks/use-toast' for errors"),
            approved_record("2", "Switched to useQuery in the Profile component"),
            approved_record("3", "Replaced raw colors with semantic tokens; import { cn } from \"@/lib/utils\""),
        ];
        let pattern = extract_style_conventions(&records).expect("pattern");
        let RulePayload::StyleConvention {
            import_patterns,
            structural_mentions,
            preferred_practices,
        } = &pattern.rule_payload
        else {
            panic!("wrong payload");
        };
        assert_eq!(
            import_patterns,
            &vec![
                "import { toast } from '@/hooks/use-toast'".to_string(),
                "import { cn } from \"@/lib/utils\"".to_string(),
            ]
        );
        assert!(structural_mentions.contains(&"useQuery".to_string()));
        assert!(structural_mentions.contains(&"Profile component".to_string()));
        assert_eq!(
            preferred_practices,
            &vec![
                "use_toast_for_notifications".to_string(),
                "use_async_data_fetching".to_string(),
                "use_semantic_color_tokens".to_string(),
            ]
        );
        assert_eq!(pattern.usage_frequency, 3);
        assert!((pattern.confidence.value() - 0.75).abs() < 1e-9);
        assert!((pattern.success_rate - 0.75).abs() < 1e-9);
    }

    #[test]
    fn confidence_caps_at_ceiling() {
        let records: Vec<_> = (0..20)
            .map(|i| approved_record(&i.to_string(), "import x from 'y'"))
            .collect();
        let pattern = extract_style_conventions(&records).unwrap();
        assert!((pattern.confidence.value() - 0.95).abs() < 1e-9);
    }

    #[test]
    fn ignores_unapproved_records() {
        let mut records = vec![
            approved_record("1", "import a from 'a'"),
            approved_record("2", "import b from 'b'"),
        ];
        records.push(
            ActionRecord::new("3", "m", "import c from 'c'", vec![]).with_verdict(Verdict::Rejected),
        );
        assert!(extract_style_conventions(&records).is_none());
    }

    #[test]
    fn empty_payload_yields_nothing() {
        let records: Vec<_> = (0..4)
            .map(|i| approved_record(&i.to_string(), "fixed a typo"))
            .collect();
        assert!(extract_style_conventions(&records).is_none());
    }
}
