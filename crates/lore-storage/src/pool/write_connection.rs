//! The writer. Pattern upserts run read, merge and write inside one
//! `with_conn` closure and one `BEGIN IMMEDIATE` transaction.

use std::path::Path;
use std::sync::Mutex;

use rusqlite::Connection;

use lore_core::config::defaults::DEFAULT_BUSY_TIMEOUT_MS;
use lore_core::errors::LoreResult;

use super::pragmas::apply_pragmas;
use crate::to_storage_err;

pub struct WriteConnection {
    conn: Mutex<Connection>,
}

impl WriteConnection {
    pub fn open(path: &Path, busy_timeout_ms: u32) -> LoreResult<Self> {
        let conn = Connection::open(path).map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, busy_timeout_ms)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Used by `StorageEngine::open_in_memory`.
    pub fn open_in_memory() -> LoreResult<Self> {
        let conn = Connection::open_in_memory().map_err(|e| to_storage_err(e.to_string()))?;
        apply_pragmas(&conn, DEFAULT_BUSY_TIMEOUT_MS)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// Run `f` with exclusive use of the writer. A poisoned lock surfaces as
    /// `StorageError::SqliteError`.
    pub fn with_conn<F, T>(&self, f: F) -> LoreResult<T>
    where
        F: FnOnce(&Connection) -> LoreResult<T>,
    {
        let guard = self
            .conn
            .lock()
            .map_err(|e| to_storage_err(format!("write connection lock poisoned: {e}")))?;
        f(&guard)
    }
}
