//! Project path functions - single source of truth for all file paths.
//!
//! This module centralizes path definitions to avoid hardcoded strings
//! scattered throughout the codebase.
//!
//! ## Environment Variables
//!
//! - `DATA_DIR`: Override the base data directory (default: "data")
//!
//! This allows running isolated instances side by side:
//! ```bash
//! DATA_DIR=data/test cargo run
//! ```

use std::env;
use std::sync::OnceLock;

/// Lazily initialized data directory from DATA_DIR env var
static DATA_DIR_VALUE: OnceLock<String> = OnceLock::new();

/// Get the base data directory (from DATA_DIR env var or default "data")
pub fn data_dir() -> &'static str {
    DATA_DIR_VALUE.get_or_init(|| env::var("DATA_DIR").unwrap_or_else(|_| "data".to_string()))
}

/// Saved-word notebook path
pub fn notebook_path() -> String {
    format!("{}/notebook.json", data_dir())
}

/// Local dictionary file (tab-separated: word, phonetic, definitions)
pub fn dictionary_path() -> String {
    format!("{}/dictionary.tsv", data_dir())
}

/// Directory holding fixed vocabulary category word lists
pub fn categories_dir() -> String {
    format!("{}/categories", data_dir())
}

/// Word list file for a category
pub fn category_path(name: &str) -> String {
    format!("{}/{name}.json", categories_dir())
}

/// Directory holding per-category learning progress
pub fn progress_dir() -> String {
    format!("{}/progress", data_dir())
}

/// Learning progress file for a category
pub fn progress_path(name: &str) -> String {
    format!("{}/{name}.json", progress_dir())
}

// ==================== Tests ====================

#[cfg(test)]
mod tests {
    use super::*;

    // Note: We can't easily test env var override because OnceLock
    // initializes once. These tests verify the default behavior.

    #[test]
    fn test_data_dir_default() {
        let dir = data_dir();
        assert!(!dir.is_empty());
    }

    #[test]
    fn test_notebook_path_format() {
        let path = notebook_path();
        assert!(path.ends_with("/notebook.json"));
    }

    #[test]
    fn test_category_path() {
        let path = category_path("cet4");
        assert!(path.contains("/categories/cet4.json"));
    }

    #[test]
    fn test_progress_path() {
        let path = progress_path("cet4");
        assert!(path.contains("/progress/cet4.json"));
    }
}
