//! Applicability predicates: whether a stored pattern is relevant to a live context.

use lore_core::models::PredictionContext;
use lore_core::pattern::Pattern;

/// Strategy seam for context matching. An empty restriction on any dimension
/// places no constraint on it.
pub trait ApplicabilityPredicate: Send + Sync {
    fn matches(&self, pattern: &Pattern, context: &PredictionContext) -> bool;
}

/// Conjunctive membership test on file types and issue type.
#[derive(Debug, Clone, Copy, Default)]
pub struct MembershipPredicate;

impl ApplicabilityPredicate for MembershipPredicate {
    fn matches(&self, pattern: &Pattern, context: &PredictionContext) -> bool {
        let contexts = &pattern.applicable_contexts;

        let file_types_ok = contexts.file_types.is_empty() || {
            let wanted = context.effective_file_types();
            contexts
                .file_types
                .iter()
                .any(|t| wanted.iter().any(|w| w.eq_ignore_ascii_case(t)))
        };

        let issue_ok = contexts.issue_types.is_empty()
            || context
                .issue_type
                .as_deref()
                .is_some_and(|issue| contexts.issue_types.iter().any(|t| t == issue));

        file_types_ok && issue_ok
    }
}

/// The context directory must sit at or below one of the pattern's prefixes,
/// compared segment by segment.
#[derive(Debug, Clone, Copy, Default)]
pub struct DirectoryPrefixPredicate;

impl ApplicabilityPredicate for DirectoryPrefixPredicate {
    fn matches(&self, pattern: &Pattern, context: &PredictionContext) -> bool {
        let prefixes = &pattern.applicable_contexts.directory_prefixes;
        if prefixes.is_empty() {
            return true;
        }
        let Some(dir) = context.effective_directory() else {
            return false;
        };
        let dir_segments = split(&dir);
        prefixes.iter().any(|prefix| {
            let prefix_segments = split(prefix);
            !prefix_segments.is_empty() && dir_segments.starts_with(&prefix_segments)
        })
    }
}

fn split(path: &str) -> Vec<&str> {
    path.split(['/', '\\'])
        .filter(|s| !s.is_empty() && *s != ".")
        .collect()
}

/// Every inner predicate must match.
pub struct AllOf(Vec<Box<dyn ApplicabilityPredicate>>);

impl AllOf {
    pub fn new(predicates: Vec<Box<dyn ApplicabilityPredicate>>) -> Self {
        Self(predicates)
    }
}

impl ApplicabilityPredicate for AllOf {
    fn matches(&self, pattern: &Pattern, context: &PredictionContext) -> bool {
        self.0.iter().all(|p| p.matches(pattern, context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lore_core::pattern::{ApplicableContexts, RulePayload};

    fn pattern(contexts: ApplicableContexts) -> Pattern {
        Pattern::new(
            "p",
            RulePayload::GenericStrategy { guidance: vec!["g".into()] },
            contexts,
            0.8,
            1,
        )
    }

    fn ctx(file_types: &[&str], issue: Option<&str>) -> PredictionContext {
        PredictionContext {
            file_types: file_types.iter().map(|s| s.to_string()).collect(),
            issue_type: issue.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn unrestricted_matches_anything() {
        let p = pattern(ApplicableContexts::unrestricted());
        assert!(MembershipPredicate.matches(&p, &ctx(&[], None)));
        assert!(MembershipPredicate.matches(&p, &ctx(&["py"], Some("crash"))));
        assert!(DirectoryPrefixPredicate.matches(&p, &ctx(&[], None)));
    }

    #[test]
    fn file_type_restriction_needs_membership() {
        let p = pattern(ApplicableContexts {
            file_types: vec!["css".into()],
            ..Default::default()
        });
        assert!(!MembershipPredicate.matches(&p, &ctx(&["tsx"], None)));
        assert!(!MembershipPredicate.matches(&p, &ctx(&[], None)));
        assert!(MembershipPredicate.matches(&p, &ctx(&["tsx", ".CSS"], None)));
    }

    #[test]
    fn issue_restriction_needs_membership() {
        let p = pattern(ApplicableContexts {
            issue_types: vec!["overflow".into(), "responsive".into()],
            ..Default::default()
        });
        assert!(MembershipPredicate.matches(&p, &ctx(&[], Some("overflow"))));
        assert!(!MembershipPredicate.matches(&p, &ctx(&[], Some("crash"))));
        assert!(!MembershipPredicate.matches(&p, &ctx(&[], None)));
    }

    #[test]
    fn directory_prefix_is_segment_aware() {
        let p = pattern(ApplicableContexts {
            directory_prefixes: vec!["src/components".into()],
            ..Default::default()
        });
        let at = |dir: &str| PredictionContext {
            directory: Some(dir.to_string()),
            ..Default::default()
        };
        assert!(DirectoryPrefixPredicate.matches(&p, &at("src/components")));
        assert!(DirectoryPrefixPredicate.matches(&p, &at("./src/components/ui/")));
        assert!(!DirectoryPrefixPredicate.matches(&p, &at("src/components-old")));
        assert!(!DirectoryPrefixPredicate.matches(&p, &PredictionContext::default()));
    }

    #[test]
    fn all_of_requires_every_predicate() {
        let p = pattern(ApplicableContexts {
            file_types: vec!["tsx".into()],
            directory_prefixes: vec!["src/hooks".into()],
            ..Default::default()
        });
        let both = AllOf::new(vec![
            Box::new(MembershipPredicate),
            Box::new(DirectoryPrefixPredicate),
        ]);
        let in_hooks = PredictionContext {
            file_path: Some("src/hooks/useAuth.tsx".into()),
            ..Default::default()
        };
        let elsewhere = PredictionContext {
            file_path: Some("src/pages/Home.tsx".into()),
            ..Default::default()
        };
        assert!(both.matches(&p, &in_hooks));
        assert!(!both.matches(&p, &elsewhere));
        assert!(MembershipPredicate.matches(&p, &elsewhere));
    }
}
