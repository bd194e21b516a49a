use serde::{Deserialize, Serialize};

use super::LearningState;

/// One sense of a word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Definition {
  /// Part of speech ("n.", "v.", "adj.", ...) when known
  #[serde(default)]
  pub part_of_speech: Option<String>,
  pub text: String,
}

impl Definition {
  pub fn new(text: impl Into<String>) -> Self {
    Self {
      part_of_speech: None,
      text: text.into(),
    }
  }

  pub fn with_part_of_speech(mut self, pos: impl Into<String>) -> Self {
    self.part_of_speech = Some(pos.into());
    self
  }
}

/// A dictionary entry: everything the drill displays but never interprets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
  pub word: String,
  #[serde(default)]
  pub phonetic: Option<String>,
  #[serde(default)]
  pub definitions: Vec<Definition>,
  #[serde(default)]
  pub examples: Vec<String>,
}

impl WordEntry {
  pub fn new(word: impl Into<String>) -> Self {
    Self {
      word: word.into(),
      phonetic: None,
      definitions: Vec::new(),
      examples: Vec::new(),
    }
  }
}

/// A word entry plus its owned learning state, as held by a store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordRecord {
  #[serde(flatten)]
  pub entry: WordEntry,
  #[serde(default)]
  pub learning: LearningState,
}

impl WordRecord {
  pub fn new(entry: WordEntry) -> Self {
    Self {
      entry,
      learning: LearningState::default(),
    }
  }

  /// The identity key used when writing state back to a store
  pub fn key(&self) -> &str {
    &self.entry.word
  }
}
