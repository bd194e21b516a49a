pub mod category;
pub mod notebook;

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::{LearningState, WordRecord};
use crate::error::Result;

pub use category::CategoryStore;
pub use notebook::NotebookStore;

/// Word-source / state-sink contract the drill session runs against.
///
/// The flat notebook and the category stores both implement this, so one
/// session state machine serves both without knowing which backend it is
/// writing to.
pub trait WordStore {
    /// All records in collection order, learning state attached or defaulted
    fn list_words(&self) -> Vec<WordRecord>;

    /// Persist the replacement learning state for one word, matched by key
    fn update_learning_state(&mut self, word: &str, state: &LearningState) -> Result<()>;
}

/// Extension trait for logging errors before discarding them
pub trait LogOnError<T> {
    /// Log the error at warn level and return None
    fn log_warn(self, context: &str) -> Option<T>;
    /// Log the error at warn level and return the default
    fn log_warn_default(self, context: &str) -> T
    where
        T: Default;
}

impl<T, E: std::fmt::Display> LogOnError<T> for std::result::Result<T, E> {
    fn log_warn(self, context: &str) -> Option<T> {
        match self {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                None
            }
        }
    }

    fn log_warn_default(self, context: &str) -> T
    where
        T: Default,
    {
        match self {
            Ok(v) => v,
            Err(e) => {
                tracing::warn!("{}: {}", context, e);
                T::default()
            }
        }
    }
}

/// Write a JSON file through a temp file in the same directory, then
/// atomically replace the target. A crash mid-write leaves the old file
/// intact.
pub(crate) fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    std::fs::create_dir_all(parent)?;

    let temp = tempfile::NamedTempFile::new_in(parent)?;
    {
        let mut writer = std::io::BufWriter::new(&temp);
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
    }
    temp.persist(path)?;
    Ok(())
}

/// Read a JSON file, returning the default value when the file does not
/// exist yet (first run).
pub(crate) fn read_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestEnv;
    use std::collections::BTreeMap;

    #[test]
    fn test_write_then_read_roundtrip() {
        let env = TestEnv::new().unwrap();
        let path = env.file("nested/dir/out.json");

        let mut value = BTreeMap::new();
        value.insert("alpha".to_string(), 1i64);
        write_json_atomic(&path, &value).unwrap();

        let loaded: BTreeMap<String, i64> = read_json_or_default(&path).unwrap();
        assert_eq!(loaded, value);
    }

    #[test]
    fn test_read_missing_file_yields_default() {
        let env = TestEnv::new().unwrap();
        let loaded: BTreeMap<String, i64> =
            read_json_or_default(&env.file("absent.json")).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_write_replaces_existing() {
        let env = TestEnv::new().unwrap();
        let path = env.file("out.json");

        write_json_atomic(&path, &vec![1, 2, 3]).unwrap();
        write_json_atomic(&path, &vec![9]).unwrap();

        let loaded: Vec<i64> = read_json_or_default(&path).unwrap();
        assert_eq!(loaded, vec![9]);
    }

    #[test]
    fn test_log_warn_default_swallows_error() {
        let failed: std::result::Result<Vec<i64>, std::io::Error> =
            Err(std::io::Error::other("boom"));
        let v = failed.log_warn_default("test context");
        assert!(v.is_empty());
    }
}
