/// Lore system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Hard ceiling applied to merged confidence scores. A merged pattern never reaches 1.0.
pub const CONFIDENCE_CEILING: f64 = 0.95;

/// Learning weight applied to an approved action.
pub const APPROVED_LEARNING_WEIGHT: f64 = 1.5;
/// Learning weight applied to a rejected action.
pub const REJECTED_LEARNING_WEIGHT: f64 = 0.5;
/// Learning weight for modified or unreviewed actions.
pub const NEUTRAL_LEARNING_WEIGHT: f64 = 1.0;

/// Stable pattern names, one per extracted category.
pub const STYLE_CONVENTION_PATTERN: &str = "style_conventions";
pub const LAYOUT_STRATEGY_PATTERN: &str = "responsive_layout_strategy";
pub const STRUCTURAL_CONVENTION_PATTERN: &str = "component_structure_conventions";

/// Minimum approved records before a category may emit a pattern.
pub const MIN_STYLE_RECORDS: usize = 3;
pub const MIN_LAYOUT_RECORDS: usize = 2;
pub const MIN_STRUCTURAL_RECORDS: usize = 2;
