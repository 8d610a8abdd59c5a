//! Category-specific rule content carried by a pattern.

use serde::{Deserialize, Serialize};

use super::PatternCategory;

/// Structured rule content. One variant per category; every collection is
/// deduplicated and keeps first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RulePayload {
    StyleConvention {
        /// Import-statement substrings observed in approved descriptions.
        import_patterns: Vec<String>,
        /// Component/hook terms mentioned alongside them.
        structural_mentions: Vec<String>,
        /// Practice tags derived from keyword presence.
        preferred_practices: Vec<String>,
    },
    LayoutStrategy {
        /// `prefix:utility` tokens, e.g. `md:grid-cols-2`.
        breakpoint_tokens: Vec<String>,
        /// Layout systems mentioned (`grid`, `flex`).
        layout_mentions: Vec<String>,
    },
    StructuralConvention {
        /// Base names of touched files under a components directory.
        component_types: Vec<String>,
        /// Base names of touched files under a hooks directory.
        hook_names: Vec<String>,
        /// UI primitive names mentioned in descriptions.
        ui_primitives: Vec<String>,
        /// Directory prefixes ending in the components/hooks segment.
        directory_conventions: Vec<String>,
    },
    GenericStrategy {
        guidance: Vec<String>,
    },
}

impl RulePayload {
    /// The category this payload shape belongs to.
    pub fn category(&self) -> PatternCategory {
        match self {
            Self::StyleConvention { .. } => PatternCategory::StyleConvention,
            Self::LayoutStrategy { .. } => PatternCategory::LayoutStrategy,
            Self::StructuralConvention { .. } => PatternCategory::StructuralConvention,
            Self::GenericStrategy { .. } => PatternCategory::GenericStrategy,
        }
    }

    /// True when the payload carries no observations at all.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::StyleConvention {
                import_patterns,
                structural_mentions,
                preferred_practices,
            } => {
                import_patterns.is_empty()
                    && structural_mentions.is_empty()
                    && preferred_practices.is_empty()
            }
            Self::LayoutStrategy {
                breakpoint_tokens,
                layout_mentions,
            } => breakpoint_tokens.is_empty() && layout_mentions.is_empty(),
            Self::StructuralConvention {
                component_types,
                hook_names,
                ui_primitives,
                directory_conventions,
            } => {
                component_types.is_empty()
                    && hook_names.is_empty()
                    && ui_primitives.is_empty()
                    && directory_conventions.is_empty()
            }
            Self::GenericStrategy { guidance } => guidance.is_empty(),
        }
    }
}
