//! Pattern extraction: one pure function per category.
//!
//! Each extractor takes an immutable record slice, considers only approved
//! records, and returns `None` when its threshold is not met or nothing was
//! observed. Categories are independent; one batch may yield several patterns.

pub mod layout;
pub mod structural;
pub mod style;
pub mod text;

use lore_core::pattern::Pattern;
use lore_core::record::ActionRecord;

pub use layout::extract_layout_strategy;
pub use structural::extract_structural_conventions;
pub use style::extract_style_conventions;

/// File types style and structural patterns apply to.
pub(crate) const SCRIPT_FILE_TYPES: &[&str] = &["tsx", "ts", "jsx", "js"];

pub(crate) fn approved(records: &[ActionRecord]) -> Vec<&ActionRecord> {
    records.iter().filter(|r| r.is_approved()).collect()
}

/// Run every category extractor over the batch.
pub fn extract_all(records: &[ActionRecord]) -> Vec<Pattern> {
    [
        extract_style_conventions(records),
        extract_layout_strategy(records),
        extract_structural_conventions(records),
    ]
    .into_iter()
    .flatten()
    .collect()
}
