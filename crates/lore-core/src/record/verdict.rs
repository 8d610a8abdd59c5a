use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{APPROVED_LEARNING_WEIGHT, NEUTRAL_LEARNING_WEIGHT, REJECTED_LEARNING_WEIGHT};
use crate::errors::LoreError;

/// Human verdict on a past action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Approved,
    Rejected,
    Modified,
    #[default]
    Unset,
}

impl Verdict {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Rejected => "rejected",
            Self::Modified => "modified",
            Self::Unset => "unset",
        }
    }

    /// Multiplier biasing the record's influence in future extraction passes.
    pub fn learning_weight(self) -> f64 {
        match self {
            Self::Approved => APPROVED_LEARNING_WEIGHT,
            Self::Rejected => REJECTED_LEARNING_WEIGHT,
            Self::Modified | Self::Unset => NEUTRAL_LEARNING_WEIGHT,
        }
    }

    pub fn is_set(self) -> bool {
        self != Self::Unset
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Verdict {
    type Err = LoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            "modified" => Ok(Self::Modified),
            "unset" => Ok(Self::Unset),
            other => Err(LoreError::InvalidRequest {
                reason: format!("unknown verdict '{other}'"),
            }),
        }
    }
}
