//! Small text helpers shared by the category extractors.

use std::path::Path;

/// Append `item` unless already present. Keeps first-seen order.
pub fn push_unique(items: &mut Vec<String>, item: impl Into<String>) {
    let item = item.into();
    if !items.contains(&item) {
        items.push(item);
    }
}

/// Case-insensitive substring test for any of `keywords` (given lower-case).
pub fn mentions_any(text: &str, keywords: &[&str]) -> bool {
    let lower = text.to_lowercase();
    keywords.iter().any(|k| lower.contains(k))
}

/// Path segments of an artifact, accepting both separators.
pub fn segments(path: &str) -> Vec<&str> {
    path.split(['/', '\\']).filter(|s| !s.is_empty()).collect()
}

/// Index of the first segment equal to one of `dirs`, if the artifact lives
/// below it (the segment is not the last one).
pub fn segment_index(path: &str, dirs: &[&str]) -> Option<usize> {
    let parts = segments(path);
    parts
        .iter()
        .position(|s| dirs.contains(s))
        .filter(|&i| i + 1 < parts.len())
}

/// File name without extension.
pub fn file_stem(path: &str) -> Option<String> {
    segments(path)
        .last()
        .and_then(|name| Path::new(name).file_stem())
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
