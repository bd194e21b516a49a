//! Local dictionary file parsing.
//!
//! The dictionary is a tab-separated file, one entry per line:
//!
//! ```text
//! word<TAB>/phonetic/<TAB>n. first sense | v. second sense
//! ```
//!
//! The phonetic column may be empty. Senses are separated by " | " and an
//! optional leading part-of-speech tag ("n.", "v.", "adj.", ...).

use std::collections::HashMap;
use std::path::Path;

use crate::domain::{Definition, WordEntry};
use crate::error::Result;

#[derive(Debug, Default)]
pub struct LocalDictionary {
  entries: HashMap<String, WordEntry>,
}

impl LocalDictionary {
  /// Load the dictionary file. A missing file yields an empty dictionary
  /// so the tool still works with only the online fallback.
  pub fn load(path: &Path) -> Result<Self> {
    if !path.exists() {
      tracing::info!("No local dictionary at {}, relying on online lookup", path.display());
      return Ok(Self::default());
    }

    let contents = std::fs::read_to_string(path)?;
    let mut entries = HashMap::new();
    for line in contents.lines() {
      if let Some(entry) = parse_line(line) {
        entries.insert(entry.word.clone(), entry);
      }
    }
    tracing::info!("Loaded {} local dictionary entries", entries.len());
    Ok(Self { entries })
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn lookup(&self, word: &str) -> Option<WordEntry> {
    self.entries.get(word).cloned()
  }
}

fn parse_line(line: &str) -> Option<WordEntry> {
  let line = line.trim();
  if line.is_empty() || line.starts_with('#') {
    return None;
  }

  let mut columns = line.split('\t');
  let word = columns.next()?.trim();
  if word.is_empty() {
    return None;
  }
  let phonetic = columns.next().map(str::trim).filter(|s| !s.is_empty());
  let senses = columns.next().map(str::trim).unwrap_or_default();

  let definitions: Vec<Definition> = senses
    .split(" | ")
    .map(str::trim)
    .filter(|s| !s.is_empty())
    .map(parse_sense)
    .collect();
  if definitions.is_empty() {
    return None;
  }

  Some(WordEntry {
    word: word.to_lowercase(),
    phonetic: phonetic.map(str::to_string),
    definitions,
    examples: Vec::new(),
  })
}

/// Split an optional leading part-of-speech tag off a sense
fn parse_sense(text: &str) -> Definition {
  let mut parts = text.splitn(2, ' ');
  if let (Some(head), Some(rest)) = (parts.next(), parts.next()) {
    if head.len() <= 5 && head.ends_with('.') {
      return Definition::new(rest.trim()).with_part_of_speech(head);
    }
  }
  Definition::new(text)
}
