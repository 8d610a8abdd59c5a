//! Filtered and ranked pattern reads.

use rusqlite::{params_from_iter, Connection, ToSql};

use lore_core::errors::LoreResult;
use lore_core::pattern::{Pattern, PatternCategory};

use super::pattern_crud::{PatternRow, PATTERN_COLUMNS};
use crate::to_storage_err;

/// Active patterns at or above `min_confidence`, highest confidence first.
/// Ties break on name for a stable order.
pub fn query_active(conn: &Connection, min_confidence: f64) -> LoreResult<Vec<Pattern>> {
    collect(
        conn,
        &format!(
            "SELECT {PATTERN_COLUMNS} FROM patterns
             WHERE is_active = 1 AND confidence >= ?1
             ORDER BY confidence DESC, name ASC"
        ),
        &[&min_confidence],
    )
}

/// Patterns optionally filtered by category and activity, highest confidence first.
pub fn list_patterns(
    conn: &Connection,
    category: Option<PatternCategory>,
    include_inactive: bool,
) -> LoreResult<Vec<Pattern>> {
    let mut clauses = Vec::new();
    let mut args: Vec<&dyn ToSql> = Vec::new();
    let category_str = category.map(|c| c.as_str());
    if let Some(cat) = category_str.as_ref() {
        clauses.push("category = ?");
        args.push(cat);
    }
    if !include_inactive {
        clauses.push("is_active = 1");
    }
    let filter = if clauses.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", clauses.join(" AND "))
    };
    collect(
        conn,
        &format!(
            "SELECT {PATTERN_COLUMNS} FROM patterns {filter}
             ORDER BY confidence DESC, name ASC"
        ),
        &args,
    )
}

/// Total number of stored patterns, active or not.
pub fn count_patterns(conn: &Connection) -> LoreResult<usize> {
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM patterns", [], |row| row.get(0))
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(count.max(0) as usize)
}

fn collect(conn: &Connection, sql: &str, args: &[&dyn ToSql]) -> LoreResult<Vec<Pattern>> {
    let mut stmt = conn
        .prepare(sql)
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params_from_iter(args.iter()), PatternRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.into_iter().map(PatternRow::into_pattern).collect()
}
