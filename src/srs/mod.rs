pub mod scheduler;
pub mod selector;
pub mod session;

pub use scheduler::{apply_review, feedback_message, interval_phrase};
pub use selector::{select_session_words, summarize, ProgressSummary};
pub use session::{LearningSession, SessionPhase, SessionSummary};
