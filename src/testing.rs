//! Test utilities for store and session setup.
//!
//! Provides a temp-dir environment for file-backed store tests and an
//! in-memory WordStore fake so the session state machine is testable
//! without touching the filesystem.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::domain::{LearningState, WordRecord};
use crate::error::{Result, WordbookError};
use crate::store::WordStore;

/// Test environment with an isolated data directory.
///
/// The directory is removed automatically when dropped.
pub struct TestEnv {
    /// Temporary directory (kept alive for file persistence)
    pub temp: TempDir,
}

impl TestEnv {
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp: TempDir::new()?,
        })
    }

    /// Get the temporary directory path for creating test files.
    pub fn path(&self) -> &Path {
        self.temp.path()
    }

    /// Path of a (not necessarily existing) file inside the environment.
    pub fn file(&self, name: &str) -> PathBuf {
        self.temp.path().join(name)
    }
}

/// In-memory word store fake.
///
/// Records every accepted update so tests can assert on write-through
/// behavior; `fail_updates` simulates a broken state sink.
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub records: Vec<WordRecord>,
    /// Log of (word, state) pairs accepted by update_learning_state
    pub updates: Vec<(String, LearningState)>,
    /// When true, every update fails with a persistence error
    pub fail_updates: bool,
}

impl MemoryStore {
    pub fn with_words(records: Vec<WordRecord>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    pub fn state_of(&self, word: &str) -> Option<&LearningState> {
        self.records
            .iter()
            .find(|r| r.entry.word == word)
            .map(|r| &r.learning)
    }
}

impl WordStore for MemoryStore {
    fn list_words(&self) -> Vec<WordRecord> {
        self.records.clone()
    }

    fn update_learning_state(&mut self, word: &str, state: &LearningState) -> Result<()> {
        if self.fail_updates {
            return Err(WordbookError::Persist("simulated write failure".to_string()));
        }
        let record = self
            .records
            .iter_mut()
            .find(|r| r.entry.word == word)
            .ok_or_else(|| WordbookError::WordNotFound(word.to_string()))?;
        record.learning = state.clone();
        self.updates.push((word.to_string(), state.clone()));
        Ok(())
    }
}
