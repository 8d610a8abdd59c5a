//! Versioned schema migrations tracked through `PRAGMA user_version`.

pub mod v001_patterns;
pub mod v002_action_records;
pub mod v003_feedback_events;

use rusqlite::Connection;
use tracing::info;

use lore_core::errors::{LoreResult, StorageError};

/// Latest schema version.
pub const LATEST_VERSION: u32 = 3;

const MIGRATIONS: &[(&str, u32)] = &[
    (v001_patterns::MIGRATION_SQL, 1),
    (v002_action_records::MIGRATION_SQL, 2),
    (v003_feedback_events::MIGRATION_SQL, 3),
];

/// Apply every migration newer than the database's current version.
pub fn run_migrations(conn: &Connection) -> LoreResult<u32> {
    let current = current_version(conn)?;

    for (sql, version) in MIGRATIONS {
        if current < *version {
            conn.execute_batch(sql)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            conn.pragma_update(None, "user_version", version)
                .map_err(|e| StorageError::MigrationFailed {
                    version: *version,
                    reason: e.to_string(),
                })?;
            info!(version = *version, "applied migration");
        }
    }

    current_version(conn)
}

/// Read the schema version stored in the database header.
pub fn current_version(conn: &Connection) -> LoreResult<u32> {
    let version: u32 = conn
        .pragma_query_value(None, "user_version", |row| row.get(0))
        .map_err(|e| StorageError::MigrationFailed {
            version: 0,
            reason: e.to_string(),
        })?;
    Ok(version)
}
