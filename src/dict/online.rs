//! Online dictionary fallback.
//!
//! Queries a dictionaryapi.dev-compatible endpoint when the local
//! dictionary has no entry. Network failures degrade to "not found"
//! at the call site; they never end the REPL.

use serde::Deserialize;

use crate::domain::{Definition, WordEntry};
use crate::error::Result;

#[derive(Debug, Deserialize)]
struct ApiEntry {
  word: String,
  #[serde(default)]
  phonetic: Option<String>,
  #[serde(default)]
  meanings: Vec<ApiMeaning>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ApiMeaning {
  #[serde(default)]
  part_of_speech: Option<String>,
  #[serde(default)]
  definitions: Vec<ApiDefinition>,
}

#[derive(Debug, Deserialize)]
struct ApiDefinition {
  definition: String,
  #[serde(default)]
  example: Option<String>,
}

/// Look a word up online. Returns Ok(None) when the word is unknown to
/// the service (HTTP 404).
pub async fn lookup(client: &reqwest::Client, base_url: &str, word: &str) -> Result<Option<WordEntry>> {
  let url = format!("{}/{}", base_url.trim_end_matches('/'), word);
  let response = client.get(&url).send().await?;

  if response.status() == reqwest::StatusCode::NOT_FOUND {
    return Ok(None);
  }
  let entries: Vec<ApiEntry> = response.error_for_status()?.json().await?;
  Ok(entries.into_iter().next().map(to_entry))
}

/// Flatten the API shape into one display entry
fn to_entry(api: ApiEntry) -> WordEntry {
  let mut definitions = Vec::new();
  let mut examples = Vec::new();

  for meaning in api.meanings {
    let pos = meaning.part_of_speech.as_deref().map(abbreviate_pos);
    for def in meaning.definitions {
      let mut definition = Definition::new(def.definition);
      if let Some(pos) = &pos {
        definition = definition.with_part_of_speech(pos.clone());
      }
      definitions.push(definition);
      if let Some(example) = def.example {
        examples.push(example);
      }
    }
  }

  WordEntry {
    word: api.word.to_lowercase(),
    phonetic: api.phonetic,
    definitions,
    examples,
  }
}

fn abbreviate_pos(pos: &str) -> String {
  match pos {
    "noun" => "n.".to_string(),
    "verb" => "v.".to_string(),
    "adjective" => "adj.".to_string(),
    "adverb" => "adv.".to_string(),
    "pronoun" => "pron.".to_string(),
    "preposition" => "prep.".to_string(),
    "conjunction" => "conj.".to_string(),
    "interjection" => "interj.".to_string(),
    other => other.to_string(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const SAMPLE: &str = r#"
  [
    {
      "word": "Brook",
      "phonetic": "/brʊk/",
      "meanings": [
        {
          "partOfSpeech": "noun",
          "definitions": [
            { "definition": "A small natural stream of fresh water." }
          ]
        },
        {
          "partOfSpeech": "verb",
          "definitions": [
            {
              "definition": "To tolerate or endure.",
              "example": "The manager would brook no dissent."
            }
          ]
        }
      ]
    }
  ]
  "#;

  #[test]
  fn test_parse_api_response() {
    let entries: Vec<ApiEntry> = serde_json::from_str(SAMPLE).unwrap();
    let entry = to_entry(entries.into_iter().next().unwrap());

    assert_eq!(entry.word, "brook");
    assert_eq!(entry.phonetic.as_deref(), Some("/brʊk/"));
    assert_eq!(entry.definitions.len(), 2);
    assert_eq!(entry.definitions[0].part_of_speech.as_deref(), Some("n."));
    assert_eq!(entry.definitions[1].part_of_speech.as_deref(), Some("v."));
    assert_eq!(entry.examples, vec!["The manager would brook no dissent."]);
  }

  #[test]
  fn test_parse_minimal_entry() {
    let entries: Vec<ApiEntry> = serde_json::from_str(r#"[{"word": "x"}]"#).unwrap();
    let entry = to_entry(entries.into_iter().next().unwrap());
    assert_eq!(entry.word, "x");
    assert!(entry.definitions.is_empty());
    assert!(entry.examples.is_empty());
  }

  #[test]
  fn test_abbreviate_pos() {
    assert_eq!(abbreviate_pos("noun"), "n.");
    assert_eq!(abbreviate_pos("adjective"), "adj.");
    assert_eq!(abbreviate_pos("numeral"), "numeral");
  }
}
