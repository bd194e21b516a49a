//! Word lookup: local dictionary file first, online fallback second.

pub mod local;
pub mod online;

pub use local::LocalDictionary;
