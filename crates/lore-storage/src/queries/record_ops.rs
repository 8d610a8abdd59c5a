//! Action record insert and corpus reads.

use rusqlite::{params, Connection, OptionalExtension};

use lore_core::errors::LoreResult;
use lore_core::record::{ActionRecord, Verdict};

use super::{corrupt, format_ts, parse_ts};
use crate::to_storage_err;

const TABLE: &str = "action_records";

const RECORD_COLUMNS: &str = "id, method, description, artifacts_touched, verdict,
     verdict_reason, learning_weight, created_at";

struct RecordRow {
    id: String,
    method: String,
    description: String,
    artifacts_touched: String,
    verdict: String,
    verdict_reason: Option<String>,
    learning_weight: f64,
    created_at: String,
}

impl RecordRow {
    fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            method: row.get(1)?,
            description: row.get(2)?,
            artifacts_touched: row.get(3)?,
            verdict: row.get(4)?,
            verdict_reason: row.get(5)?,
            learning_weight: row.get(6)?,
            created_at: row.get(7)?,
        })
    }

    fn into_record(self) -> LoreResult<ActionRecord> {
        let verdict: Verdict = self
            .verdict
            .parse()
            .map_err(|_| corrupt(TABLE, format!("unknown verdict '{}'", self.verdict)))?;
        let artifacts_touched = serde_json::from_str(&self.artifacts_touched)
            .map_err(|e| corrupt(TABLE, format!("artifacts of '{}': {e}", self.id)))?;
        Ok(ActionRecord {
            method: self.method,
            description: self.description,
            artifacts_touched,
            verdict,
            verdict_reason: self.verdict_reason,
            learning_weight: self.learning_weight,
            created_at: parse_ts(TABLE, &self.created_at)?,
            id: self.id,
        })
    }
}

/// Insert a record as supplied by an external producer.
pub fn insert_record(conn: &Connection, record: &ActionRecord) -> LoreResult<()> {
    let artifacts = serde_json::to_string(&record.artifacts_touched)?;
    conn.execute(
        &format!(
            "INSERT INTO action_records ({RECORD_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
        ),
        params![
            record.id,
            record.method,
            record.description,
            artifacts,
            record.verdict.as_str(),
            record.verdict_reason,
            record.learning_weight,
            format_ts(&record.created_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;
    Ok(())
}

pub fn get_record(conn: &Connection, id: &str) -> LoreResult<Option<ActionRecord>> {
    let row = conn
        .query_row(
            &format!("SELECT {RECORD_COLUMNS} FROM action_records WHERE id = ?1"),
            params![id],
            RecordRow::from_row,
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    row.map(RecordRow::into_record).transpose()
}

/// Most recent records that carry a verdict, newest first.
pub fn recent_reviewed(conn: &Connection, limit: usize) -> LoreResult<Vec<ActionRecord>> {
    let mut stmt = conn
        .prepare(&format!(
            "SELECT {RECORD_COLUMNS} FROM action_records
             WHERE verdict != 'unset'
             ORDER BY created_at DESC, rowid DESC
             LIMIT ?1"
        ))
        .map_err(|e| to_storage_err(e.to_string()))?;
    let rows = stmt
        .query_map(params![limit as i64], RecordRow::from_row)
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;
    rows.into_iter().map(RecordRow::into_record).collect()
}

/// Overwrite the current verdict fields. Returns rows changed.
pub(crate) fn update_verdict(
    conn: &Connection,
    id: &str,
    verdict: Verdict,
    reason: Option<&str>,
    learning_weight: f64,
) -> LoreResult<usize> {
    conn.execute(
        "UPDATE action_records
         SET verdict = ?2, verdict_reason = ?3, learning_weight = ?4
         WHERE id = ?1",
        params![id, verdict.as_str(), reason, learning_weight],
    )
    .map_err(|e| to_storage_err(e.to_string()))
}
