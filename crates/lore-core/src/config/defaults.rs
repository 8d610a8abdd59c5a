// Single source of truth for all default values.

// --- Engine ---
pub const DEFAULT_ENGINE_ENABLED: bool = true;

// --- Storage ---
pub const DEFAULT_DB_FILENAME: &str = "lore.db";
pub const DEFAULT_READ_POOL_SIZE: usize = 4;
pub const DEFAULT_BUSY_TIMEOUT_MS: u32 = 5_000;

// --- Learning ---
pub const DEFAULT_CORPUS_PAGE_SIZE: usize = 100;
pub const DEFAULT_CONFIDENCE_CEILING: f64 = 0.95;

// --- Prediction ---
pub const DEFAULT_MIN_PREDICTION_CONFIDENCE: f64 = 0.7;
pub const DEFAULT_HIGH_CONFIDENCE: f64 = 0.8;
pub const DEFAULT_MATCH_DIRECTORIES: bool = false;
