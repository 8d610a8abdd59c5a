//! Verdict application and the append-only feedback log.

use rusqlite::{params, Connection, OptionalExtension, Transaction, TransactionBehavior};

use lore_core::errors::LoreResult;
use lore_core::record::{FeedbackEvent, Verdict};

use super::record_ops::update_verdict;
use super::{corrupt, format_ts, parse_ts};
use crate::to_storage_err;

const TABLE: &str = "feedback_events";

/// Read the current verdict, overwrite it, and append the audit event, all in
/// one transaction. Returns `None` and writes nothing when the record is unknown.
pub fn apply_verdict(
    conn: &Connection,
    action_id: &str,
    verdict: Verdict,
    reason: Option<String>,
    reviewer_id: Option<String>,
) -> LoreResult<Option<FeedbackEvent>> {
    let tx = Transaction::new_unchecked(conn, TransactionBehavior::Immediate)
        .map_err(|e| to_storage_err(format!("apply_verdict begin: {e}")))?;

    let previous: Option<String> = tx
        .query_row(
            "SELECT verdict FROM action_records WHERE id = ?1",
            params![action_id],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| to_storage_err(e.to_string()))?;
    let Some(previous) = previous else {
        tx.rollback()
            .map_err(|e| to_storage_err(format!("apply_verdict rollback: {e}")))?;
        return Ok(None);
    };

    let event = FeedbackEvent::new(
        action_id,
        verdict,
        parse_verdict(&previous)?,
        reason,
        reviewer_id,
    );
    update_verdict(
        &tx,
        &event.action_id,
        event.verdict,
        event.reason.as_deref(),
        event.learning_weight,
    )?;

    tx.execute(
        "INSERT INTO feedback_events (
            id, action_id, verdict, previous_verdict, reason, reviewer_id,
            learning_weight, recorded_at
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            event.id,
            event.action_id,
            event.verdict.as_str(),
            event.previous_verdict.as_str(),
            event.reason,
            event.reviewer_id,
            event.learning_weight,
            format_ts(&event.recorded_at),
        ],
    )
    .map_err(|e| to_storage_err(e.to_string()))?;

    tx.commit()
        .map_err(|e| to_storage_err(format!("apply_verdict commit: {e}")))?;
    Ok(Some(event))
}

/// Events for one action in the order they were recorded.
pub fn feedback_history(conn: &Connection, action_id: &str) -> LoreResult<Vec<FeedbackEvent>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, action_id, verdict, previous_verdict, reason, reviewer_id,
                    learning_weight, recorded_at
             FROM feedback_events WHERE action_id = ?1
             ORDER BY rowid ASC",
        )
        .map_err(|e| to_storage_err(e.to_string()))?;
    type Raw = (
        String,
        String,
        String,
        String,
        Option<String>,
        Option<String>,
        f64,
        String,
    );
    let rows: Vec<Raw> = stmt
        .query_map(params![action_id], |row| {
            Ok((
                row.get(0)?,
                row.get(1)?,
                row.get(2)?,
                row.get(3)?,
                row.get(4)?,
                row.get(5)?,
                row.get(6)?,
                row.get(7)?,
            ))
        })
        .map_err(|e| to_storage_err(e.to_string()))?
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| to_storage_err(e.to_string()))?;

    rows.into_iter()
        .map(
            |(id, action_id, verdict, previous, reason, reviewer_id, weight, recorded_at)| {
                Ok(FeedbackEvent {
                    verdict: parse_verdict(&verdict)?,
                    previous_verdict: parse_verdict(&previous)?,
                    recorded_at: parse_ts(TABLE, &recorded_at)?,
                    id,
                    action_id,
                    reason,
                    reviewer_id,
                    learning_weight: weight,
                })
            },
        )
        .collect()
}

fn parse_verdict(raw: &str) -> LoreResult<Verdict> {
    raw.parse()
        .map_err(|_| corrupt(TABLE, format!("unknown verdict '{raw}'")))
}
