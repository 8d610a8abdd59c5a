//! Historical corrective actions and the human verdicts recorded against them.

pub mod action_record;
pub mod feedback_event;
pub mod verdict;

pub use action_record::ActionRecord;
pub use feedback_event::FeedbackEvent;
pub use verdict::Verdict;
