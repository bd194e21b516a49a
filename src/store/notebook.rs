use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{LearningState, WordEntry, WordRecord};
use crate::error::{Result, WordbookError};
use crate::store::{read_json_or_default, write_json_atomic, WordStore};

/// On-disk layout of the notebook file
#[derive(Debug, Default, Serialize, Deserialize)]
struct NotebookFile {
  #[serde(default)]
  words: Vec<WordRecord>,
}

/// The user's flat saved-word notebook, one JSON file, insertion order
/// preserved.
#[derive(Debug)]
pub struct NotebookStore {
  path: PathBuf,
  words: Vec<WordRecord>,
}

impl NotebookStore {
  /// Open the notebook, creating an empty one in memory if the file does
  /// not exist yet. Individual records with missing learning fields are
  /// repaired to defaults by serde.
  pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
    let path = path.into();
    let file: NotebookFile = read_json_or_default(&path)?;
    Ok(Self {
      path,
      words: file.words,
    })
  }

  pub fn len(&self) -> usize {
    self.words.len()
  }

  pub fn is_empty(&self) -> bool {
    self.words.is_empty()
  }

  pub fn contains(&self, word: &str) -> bool {
    self.words.iter().any(|r| r.entry.word == word)
  }

  /// Save a looked-up entry. Returns false if the word was already saved.
  pub fn add(&mut self, entry: WordEntry) -> Result<bool> {
    if self.contains(&entry.word) {
      return Ok(false);
    }
    self.words.push(WordRecord::new(entry));
    self.save()?;
    Ok(true)
  }

  /// Remove a saved word. Returns false if it was not in the notebook.
  pub fn remove(&mut self, word: &str) -> Result<bool> {
    let before = self.words.len();
    self.words.retain(|r| r.entry.word != word);
    if self.words.len() == before {
      return Ok(false);
    }
    self.save()?;
    Ok(true)
  }

  fn save(&self) -> Result<()> {
    let file = NotebookFile {
      words: self.words.clone(),
    };
    write_json_atomic(&self.path, &file)
  }
}

impl WordStore for NotebookStore {
  fn list_words(&self) -> Vec<WordRecord> {
    self.words.clone()
  }

  fn update_learning_state(&mut self, word: &str, state: &LearningState) -> Result<()> {
    let record = self
      .words
      .iter_mut()
      .find(|r| r.entry.word == word)
      .ok_or_else(|| WordbookError::WordNotFound(word.to_string()))?;
    record.learning = state.clone();
    self.save()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::Definition;
  use crate::testing::TestEnv;

  fn entry(word: &str) -> WordEntry {
    let mut e = WordEntry::new(word);
    e.definitions.push(Definition::new("a test definition"));
    e
  }

  #[test]
  fn test_open_missing_file_is_empty() {
    let env = TestEnv::new().unwrap();
    let store = NotebookStore::open(env.file("notebook.json")).unwrap();
    assert!(store.is_empty());
  }

  #[test]
  fn test_add_and_reload() {
    let env = TestEnv::new().unwrap();
    let path = env.file("notebook.json");

    let mut store = NotebookStore::open(&path).unwrap();
    assert!(store.add(entry("apple")).unwrap());
    assert!(store.add(entry("brook")).unwrap());

    let reloaded = NotebookStore::open(&path).unwrap();
    assert_eq!(reloaded.len(), 2);
    assert!(reloaded.contains("apple"));
    // Insertion order survives the round trip
    assert_eq!(reloaded.list_words()[0].key(), "apple");
    assert_eq!(reloaded.list_words()[1].key(), "brook");
  }

  #[test]
  fn test_add_duplicate_rejected() {
    let env = TestEnv::new().unwrap();
    let mut store = NotebookStore::open(env.file("notebook.json")).unwrap();
    assert!(store.add(entry("apple")).unwrap());
    assert!(!store.add(entry("apple")).unwrap());
    assert_eq!(store.len(), 1);
  }

  #[test]
  fn test_remove() {
    let env = TestEnv::new().unwrap();
    let mut store = NotebookStore::open(env.file("notebook.json")).unwrap();
    store.add(entry("apple")).unwrap();

    assert!(store.remove("apple").unwrap());
    assert!(!store.remove("apple").unwrap());
    assert!(store.is_empty());
  }

  #[test]
  fn test_update_learning_state_persists() {
    let env = TestEnv::new().unwrap();
    let path = env.file("notebook.json");
    let mut store = NotebookStore::open(&path).unwrap();
    store.add(entry("apple")).unwrap();

    let state = LearningState {
      level: 2,
      interval_days: 6,
      review_count: 2,
      correct_count: 2,
      ..LearningState::default()
    };
    store.update_learning_state("apple", &state).unwrap();

    let reloaded = NotebookStore::open(&path).unwrap();
    assert_eq!(reloaded.list_words()[0].learning, state);
  }

  #[test]
  fn test_update_unknown_word_fails() {
    let env = TestEnv::new().unwrap();
    let mut store = NotebookStore::open(env.file("notebook.json")).unwrap();
    let result = store.update_learning_state("ghost", &LearningState::default());
    assert!(matches!(result, Err(WordbookError::WordNotFound(_))));
  }

  #[test]
  fn test_malformed_learning_block_repaired() {
    let env = TestEnv::new().unwrap();
    let path = env.file("notebook.json");
    std::fs::write(
      &path,
      r#"{"words": [{"word": "apple", "learning": {"interval_days": 6}}]}"#,
    )
    .unwrap();

    let store = NotebookStore::open(&path).unwrap();
    let learning = &store.list_words()[0].learning;
    assert_eq!(learning.interval_days, 6);
    assert!((learning.ease_factor - 2.5).abs() < f64::EPSILON);
    assert_eq!(learning.review_count, 0);
  }
}
