//! SQLite-backed pattern store and action-record corpus. Migrations run
//! once when the engine is opened.

use std::path::Path;

use lore_core::config::defaults::{DEFAULT_BUSY_TIMEOUT_MS, DEFAULT_READ_POOL_SIZE};
use lore_core::config::StorageConfig;
use lore_core::errors::LoreResult;
use lore_core::models::UpsertOutcome;
use lore_core::pattern::{Pattern, PatternCategory};
use lore_core::record::{ActionRecord, FeedbackEvent, Verdict};
use lore_core::traits::{IActionRecordStorage, IPatternStorage, PatternMerge};

use crate::migrations;
use crate::pool::ConnectionPool;
use crate::queries::{feedback_ops, pattern_crud, pattern_query, record_ops};

/// Implements both `IPatternStorage` and `IActionRecordStorage` over one database.
pub struct StorageEngine {
    pool: ConnectionPool,
    /// False for in-memory databases, whose readers cannot see written patterns.
    use_read_pool: bool,
}

impl StorageEngine {
    /// Default pool size and busy timeout.
    pub fn open(path: &Path) -> LoreResult<Self> {
        Self::open_with(path, DEFAULT_READ_POOL_SIZE, DEFAULT_BUSY_TIMEOUT_MS)
    }

    pub fn open_with(path: &Path, read_pool_size: usize, busy_timeout_ms: u32) -> LoreResult<Self> {
        let pool = ConnectionPool::open(path, read_pool_size, busy_timeout_ms)?;
        let engine = Self {
            pool,
            use_read_pool: true,
        };
        engine.initialize()?;
        Ok(engine)
    }

    /// Honors `storage.db_path`, `read_pool_size` and `busy_timeout_ms`.
    pub fn from_config(config: &StorageConfig) -> LoreResult<Self> {
        Self::open_with(
            Path::new(&config.db_path),
            config.read_pool_size,
            config.busy_timeout_ms,
        )
    }

    /// Throwaway database for tests and dry runs. Reads go through the writer.
    pub fn open_in_memory() -> LoreResult<Self> {
        let pool = ConnectionPool::open_in_memory()?;
        let engine = Self {
            pool,
            use_read_pool: false,
        };
        engine.initialize()?;
        Ok(engine)
    }

    fn initialize(&self) -> LoreResult<()> {
        self.pool.writer.with_conn(|conn| {
            migrations::run_migrations(conn)?;
            Ok(())
        })
    }

    pub fn pool(&self) -> &ConnectionPool {
        &self.pool
    }

    fn with_reader<F, T>(&self, f: F) -> LoreResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> LoreResult<T>,
    {
        if self.use_read_pool {
            self.pool.readers.with_conn(f)
        } else {
            self.pool.writer.with_conn(f)
        }
    }
}

impl IPatternStorage for StorageEngine {
    fn get_pattern(&self, name: &str) -> LoreResult<Option<Pattern>> {
        self.with_reader(|conn| pattern_crud::get_pattern(conn, name))
    }

    fn upsert_with(&self, candidate: &Pattern, merge: PatternMerge<'_>) -> LoreResult<UpsertOutcome> {
        self.pool
            .writer
            .with_conn(|conn| pattern_crud::upsert_with(conn, candidate, merge))
    }

    fn query_active(&self, min_confidence: f64) -> LoreResult<Vec<Pattern>> {
        self.with_reader(|conn| pattern_query::query_active(conn, min_confidence))
    }

    fn list_patterns(
        &self,
        category: Option<PatternCategory>,
        include_inactive: bool,
    ) -> LoreResult<Vec<Pattern>> {
        self.with_reader(|conn| pattern_query::list_patterns(conn, category, include_inactive))
    }

    fn set_pattern_active(&self, name: &str, active: bool) -> LoreResult<bool> {
        self.pool
            .writer
            .with_conn(|conn| pattern_crud::set_active(conn, name, active))
    }

    fn count_patterns(&self) -> LoreResult<usize> {
        self.with_reader(pattern_query::count_patterns)
    }
}

impl IActionRecordStorage for StorageEngine {
    fn insert_record(&self, record: &ActionRecord) -> LoreResult<()> {
        self.pool
            .writer
            .with_conn(|conn| record_ops::insert_record(conn, record))
    }

    fn get_record(&self, id: &str) -> LoreResult<Option<ActionRecord>> {
        self.with_reader(|conn| record_ops::get_record(conn, id))
    }

    fn recent_reviewed(&self, limit: usize) -> LoreResult<Vec<ActionRecord>> {
        self.with_reader(|conn| record_ops::recent_reviewed(conn, limit))
    }

    fn apply_verdict(
        &self,
        action_id: &str,
        verdict: Verdict,
        reason: Option<String>,
        reviewer_id: Option<String>,
    ) -> LoreResult<Option<FeedbackEvent>> {
        self.pool.writer.with_conn(|conn| {
            feedback_ops::apply_verdict(conn, action_id, verdict, reason, reviewer_id)
        })
    }

    fn feedback_history(&self, action_id: &str) -> LoreResult<Vec<FeedbackEvent>> {
        self.with_reader(|conn| feedback_ops::feedback_history(conn, action_id))
    }
}
