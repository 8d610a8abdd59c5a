use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::LoreError;

/// The four pattern categories. Determines which payload shape and which
/// applicability rules a pattern carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternCategory {
    StyleConvention,
    LayoutStrategy,
    StructuralConvention,
    GenericStrategy,
}

impl PatternCategory {
    /// All categories for iteration.
    pub const ALL: [PatternCategory; 4] = [
        Self::StyleConvention,
        Self::LayoutStrategy,
        Self::StructuralConvention,
        Self::GenericStrategy,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::StyleConvention => "style_convention",
            Self::LayoutStrategy => "layout_strategy",
            Self::StructuralConvention => "structural_convention",
            Self::GenericStrategy => "generic_strategy",
        }
    }
}

impl fmt::Display for PatternCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternCategory {
    type Err = LoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| LoreError::InvalidRequest {
                reason: format!("unknown pattern category '{s}'"),
            })
    }
}
