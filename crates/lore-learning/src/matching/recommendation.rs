//! Recommendation and reasoning text synthesized from a matched pattern.

use lore_core::pattern::{Pattern, RulePayload};

const MAX_BREAKPOINT_TOKENS: usize = 3;

pub fn recommendation(pattern: &Pattern) -> String {
    match &pattern.rule_payload {
        RulePayload::LayoutStrategy {
            breakpoint_tokens, ..
        } if !breakpoint_tokens.is_empty() => {
            let tokens: Vec<&str> = breakpoint_tokens
                .iter()
                .take(MAX_BREAKPOINT_TOKENS)
                .map(String::as_str)
                .collect();
            format!("Apply responsive utilities: {}", tokens.join(", "))
        }
        RulePayload::StyleConvention {
            import_patterns, ..
        } if !import_patterns.is_empty() => {
            format!("Follow the established import convention: {}", import_patterns[0])
        }
        _ => pattern.name.clone(),
    }
}

pub fn reasoning(pattern: &Pattern) -> String {
    format!(
        "Based on {} successful applications with {:.0}% success rate",
        pattern.usage_frequency,
        pattern.success_rate * 100.0
    )
}
