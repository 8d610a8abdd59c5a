use serde::{Deserialize, Serialize};

/// Conditions a live context must satisfy for a pattern to apply.
///
/// An empty set means "no constraint on that dimension".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApplicableContexts {
    /// File extensions without the leading dot (`tsx`, `css`).
    pub file_types: Vec<String>,
    /// Issue-type tags (`mobile_break`, `overflow`).
    pub issue_types: Vec<String>,
    /// Path prefixes such as `src/components`.
    pub directory_prefixes: Vec<String>,
    /// Screen size classes the pattern was observed on. Informational.
    pub screen_sizes: Vec<String>,
}

impl ApplicableContexts {
    /// No restriction on any dimension.
    pub fn unrestricted() -> Self {
        Self::default()
    }
}
