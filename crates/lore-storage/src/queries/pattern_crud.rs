//! Insert, update, get, and transactional upsert for patterns.

use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};

use lore_core::errors::{LoreError, LoreResult, StorageError};
use lore_core::models::UpsertOutcome;
use lore_core::pattern::{Pattern, PatternCategory};
use lore_core::traits::PatternMerge;

use super::{corrupt, format_ts, parse_ts};
use crate::to_storage_err;

const TABLE: &str = "patterns";

pub(crate) const PATTERN_COLUMNS: &str = "name, category, confidence, success_rate, usage_frequency,
     rule_payload, applicable_contexts, is_active, created_at, updated_at";

/// Raw column values, converted to a `Pattern` outside the row closure.
pub(crate) struct PatternRow {
    name: String,
    category: String,
    confidence: f64,
    success_rate: f64,
    usage_frequency: i64,
    rule_payload: String,
    applicable_contexts: String,
    is_active: bool,
    created_at: String,
    updated_at: String,
}

impl PatternRow {
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            name: row.get(0)?,
            category: row.get(1)?,
            confidence: row.get(2)?,
            success_rate: row.get(3)?,
            usage_frequency: row.get(4)?,
            rule_payload: row.get(5)?,
            applicable_contexts: row.get(6)?,
            is_active: row.get(7)?,
            created_at: row.get(8)?,
            updated_at: row.get(9)?,
        })
    }

    pub(crate) fn into_pattern(self) -> LoreResult<Pattern> {
        let category: PatternCategory = self
            .category
            .parse()
            .map_err(|_| corrupt(TABLE, format!("unknown category '{}'", self.category)))?;
        let rule_payload = serde_json::from_str(&self.rule_payload)
            .map_err(|e| corrupt(TABLE, format!("rule_payload of '{}': {e}", self.name)))?;
        let applicable_contexts = serde_json::from_str(&self.applicable_contexts)
            .map_err(|e| corrupt(TABLE, format!("applicable_contexts of '{}': {e}", self.name)))?;
        Ok(Pattern {
            category,
            confidence: self.confidence.into(),
            success_rate: self.success_rate.clamp(0.0, 1.0),
            usage_frequency: u64::try_from(self.usage_frequency).map_err(|_| {
                corrupt(
                    TABLE,
                    format!("negative usage_frequency {} for '{}'", self.usage_frequency, self.name),
                )
            })?,
            rule_payload,
            applicable_contexts,
            is_active: self.is_active,
            created_at: parse_ts(TABLE, &self.created_at)?,
            updated_at: parse_ts(TABLE, &self.updated_at)?,
            name: self.name,
        })
    }
}

/// SQLite integers are signed; a frequency past `i64::MAX` is refused rather than wrapped.
fn stored_frequency(pattern: &Pattern) -> LoreResult<i64> {
    i64::try_from(pattern.usage_frequency).map_err(|_| {
        LoreError::Storage(StorageError::PatternWriteFailed {
            name: pattern.name.clone(),
            reason: format!("usage_frequency {} out of range", pattern.usage_frequency),
        })
    })
}

/// Fetch a pattern by exact name.
pub fn get_pattern(conn: &Connection, name: &str) -> LoreResult<Option<Pattern>> {
    let row = conn
        .query_row(
            &format!("SELECT {PATTERN_COLUMNS} FROM patterns WHERE name = ?1"),
            params![name],
            PatternRow::from_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(PatternRow::into_pattern).transpose()
}

/// Insert a new pattern row.
pub fn insert_pattern(conn: &Connection, pattern: &Pattern) -> LoreResult<()> {
    let payload = serde_json::to_string(&pattern.rule_payload)?;
    let contexts = serde_json::to_string(&pattern.applicable_contexts)?;
    let frequency = stored_frequency(pattern)?;
    conn.execute(
        "INSERT INTO patterns (
            name, category, confidence, success_rate, usage_frequency,
            rule_payload, applicable_contexts, is_active, created_at, updated_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            pattern.name,
            pattern.category.as_str(),
            pattern.confidence.value(),
            pattern.success_rate,
            frequency,
            payload,
            contexts,
            pattern.is_active,
            format_ts(&pattern.created_at),
            format_ts(&pattern.updated_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Overwrite every mutable column of an existing pattern.
pub fn update_pattern(conn: &Connection, pattern: &Pattern) -> LoreResult<()> {
    let payload = serde_json::to_string(&pattern.rule_payload)?;
    let contexts = serde_json::to_string(&pattern.applicable_contexts)?;
    let frequency = stored_frequency(pattern)?;
    conn.execute(
        "UPDATE patterns SET
            category = ?2, confidence = ?3, success_rate = ?4, usage_frequency = ?5,
            rule_payload = ?6, applicable_contexts = ?7, is_active = ?8, updated_at = ?9
         WHERE name = ?1",
        params![
            pattern.name,
            pattern.category.as_str(),
            pattern.confidence.value(),
            pattern.success_rate,
            frequency,
            payload,
            contexts,
            pattern.is_active,
            format_ts(&pattern.updated_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

/// Read-merge-write under `BEGIN IMMEDIATE`, so the fold is atomic even
/// against writers in other processes.
pub fn upsert_with(
    conn: &Connection,
    candidate: &Pattern,
    merge: PatternMerge<'_>,
) -> LoreResult<UpsertOutcome> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| to_storage_err(format!("upsert begin: {e}")))?;

    let outcome = match get_pattern(&tx, &candidate.name)? {
        None => {
            insert_pattern(&tx, candidate)?;
            UpsertOutcome::Inserted
        }
        Some(existing) => {
            let merged = merge(&existing, candidate);
            update_pattern(&tx, &merged)?;
            UpsertOutcome::Updated
        }
    };

    tx.commit()
        .map_err(|e| to_storage_err(format!("upsert commit: {e}")))?;
    Ok(outcome)
}

/// Toggle the soft-disable flag. Returns false when the name is unknown.
pub fn set_active(conn: &Connection, name: &str, active: bool) -> LoreResult<bool> {
    let changed = conn
        .execute(
            "UPDATE patterns SET is_active = ?2, updated_at = ?3 WHERE name = ?1",
            params![name, active, format_ts(&chrono::Utc::now())],
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(changed > 0)
}
