//! Historical corpus reader: the bounded page of reviewed records `train` learns from.

use std::sync::Arc;

use lore_core::errors::LoreResult;
use lore_core::record::ActionRecord;
use lore_core::traits::IActionRecordStorage;
use tracing::debug;

pub struct CorpusReader {
    records: Arc<dyn IActionRecordStorage>,
    page_size: usize,
}

impl CorpusReader {
    pub fn new(records: Arc<dyn IActionRecordStorage>, page_size: usize) -> Self {
        Self {
            records,
            page_size: page_size.max(1),
        }
    }

    /// The most recent reviewed records, newest first. An empty corpus is a
    /// valid "nothing to learn" outcome.
    pub fn load(&self) -> LoreResult<Vec<ActionRecord>> {
        let records = self.records.recent_reviewed(self.page_size)?;
        debug!(count = records.len(), page_size = self.page_size, "corpus loaded");
        Ok(records)
    }
}
