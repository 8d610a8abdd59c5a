//! Configuration: one struct per subsystem, aggregated by `LoreConfig`.

pub mod defaults;
pub mod engine_config;
pub mod learning_config;
pub mod lore_config;
pub mod prediction_config;
pub mod storage_config;

pub use engine_config::EngineConfig;
pub use learning_config::{LearningConfig, SuccessRatePolicy};
pub use lore_config::LoreConfig;
pub use prediction_config::PredictionConfig;
pub use storage_config::StorageConfig;
