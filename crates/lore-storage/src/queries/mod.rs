//! SQL operations, one module per table concern.

pub mod feedback_ops;
pub mod pattern_crud;
pub mod pattern_query;
pub mod record_ops;

use chrono::{DateTime, SecondsFormat, Utc};

use lore_core::errors::{LoreError, LoreResult, StorageError};

/// Fixed-width RFC 3339 so lexicographic order matches chronological order.
pub(crate) fn format_ts(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Micros, true)
}

pub(crate) fn parse_ts(table: &str, raw: &str) -> LoreResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| corrupt(table, format!("bad timestamp '{raw}': {e}")))
}

pub(crate) fn corrupt(table: &str, details: impl Into<String>) -> LoreError {
    LoreError::Storage(StorageError::CorruptRow {
        table: table.to_string(),
        details: details.into(),
    })
}
