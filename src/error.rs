//! Crate error taxonomy and `Result` alias.
//!
//! A single `thiserror` enum (idiom from Yomine's `core/errors.rs`) with
//! `#[from]` conversions for the collaborator error types propagated via
//! `?` (io / serde_json / reqwest / atomic persist), plus the domain
//! variants the stores surface directly.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, WordbookError>;

/// Every error the crate can produce. No variant is fatal to the process;
/// recoverable collaborator failures are logged via `LogOnError` at the
/// call site.
#[derive(Error, Debug)]
pub enum WordbookError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("network error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("persistence failure: {0}")]
    Persist(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("word not found: {0}")]
    WordNotFound(String),
}

impl From<tempfile::PersistError> for WordbookError {
    fn from(error: tempfile::PersistError) -> Self {
        WordbookError::Persist(error.to_string())
    }
}
