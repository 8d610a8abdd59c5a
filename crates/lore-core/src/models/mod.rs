//! Request and result models exchanged across the engine boundary.

pub mod analysis_result;
pub mod feedback_request;
pub mod prediction;
pub mod training_report;

pub use analysis_result::{CategorySummary, PatternAnalysis};
pub use feedback_request::{FeedbackReceipt, FeedbackRequest};
pub use prediction::{Prediction, PredictionContext, PredictionReport};
pub use training_report::{TrainingReport, UpsertOutcome};
