//! SQLite connections behind the pattern and record stores: one writer that
//! every upsert and verdict goes through, plus a small set of query-only readers.

pub mod pragmas;
pub mod read_pool;
pub mod write_connection;

use std::path::Path;

use lore_core::errors::LoreResult;

pub use read_pool::ReadPool;
pub use write_connection::WriteConnection;

pub struct ConnectionPool {
    pub writer: WriteConnection,
    pub readers: ReadPool,
}

impl ConnectionPool {
    /// Writer and readers on the same lore database file.
    pub fn open(path: &Path, read_pool_size: usize, busy_timeout_ms: u32) -> LoreResult<Self> {
        let writer = WriteConnection::open(path, busy_timeout_ms)?;
        let readers = ReadPool::open(path, read_pool_size, busy_timeout_ms)?;
        Ok(Self { writer, readers })
    }

    /// Private in-memory database. The reader here shares nothing with the
    /// writer, so `StorageEngine` never reads through it.
    pub fn open_in_memory() -> LoreResult<Self> {
        let writer = WriteConnection::open_in_memory()?;
        let readers = ReadPool::open_in_memory(1)?;
        Ok(Self { writer, readers })
    }
}
