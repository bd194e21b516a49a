pub mod learning;
pub mod word;

pub use learning::{LearningState, MasteryLevel, RecallGrade};
pub use word::{Definition, WordEntry, WordRecord};
