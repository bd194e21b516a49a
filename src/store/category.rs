//! Fixed vocabulary category lists with a per-category progress overlay.
//!
//! Word lists live under data/categories/ and are read-only; learning
//! progress is kept per category under data/progress/, keyed by word.
//! A small starter category is seeded on first run.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::{Definition, LearningState, WordEntry, WordRecord};
use crate::error::{Result, WordbookError};
use crate::paths;
use crate::store::{read_json_or_default, write_json_atomic, WordStore};

/// On-disk layout of a category word list
#[derive(Debug, Default, Serialize, Deserialize)]
struct CategoryFile {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    words: Vec<WordEntry>,
}

/// A fixed word list plus the user's progress through it
#[derive(Debug)]
pub struct CategoryStore {
    name: String,
    title: Option<String>,
    words: Vec<WordEntry>,
    progress: BTreeMap<String, LearningState>,
    progress_path: PathBuf,
}

impl CategoryStore {
    /// Open a category by name using the standard data layout
    pub fn open(name: &str) -> Result<Self> {
        Self::open_at(
            name,
            PathBuf::from(paths::category_path(name)),
            PathBuf::from(paths::progress_path(name)),
        )
    }

    /// Open from explicit paths (used by tests)
    pub fn open_at(name: &str, words_path: PathBuf, progress_path: PathBuf) -> Result<Self> {
        if !words_path.exists() {
            return Err(WordbookError::UnknownCategory(name.to_string()));
        }
        let contents = std::fs::read_to_string(&words_path)?;
        let file: CategoryFile = serde_json::from_str(&contents)?;
        let progress: BTreeMap<String, LearningState> = read_json_or_default(&progress_path)?;

        Ok(Self {
            name: name.to_string(),
            title: file.title,
            words: file.words,
            progress,
            progress_path,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display title, falling back to the category name
    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(&self.name)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Names of all installed categories, sorted
    pub fn available() -> Vec<String> {
        let mut names: Vec<String> = std::fs::read_dir(paths::categories_dir())
            .map(|entries| {
                entries
                    .filter_map(|e| e.ok())
                    .filter_map(|e| {
                        let path = e.path();
                        if path.extension().is_some_and(|ext| ext == "json") {
                            path.file_stem().map(|s| s.to_string_lossy().into_owned())
                        } else {
                            None
                        }
                    })
                    .collect()
            })
            .unwrap_or_default();
        names.sort();
        names
    }

    fn save_progress(&self) -> Result<()> {
        write_json_atomic(&self.progress_path, &self.progress)
    }
}

impl WordStore for CategoryStore {
    fn list_words(&self) -> Vec<WordRecord> {
        self.words
            .iter()
            .map(|entry| WordRecord {
                entry: entry.clone(),
                learning: self.progress.get(&entry.word).cloned().unwrap_or_default(),
            })
            .collect()
    }

    fn update_learning_state(&mut self, word: &str, state: &LearningState) -> Result<()> {
        if !self.words.iter().any(|e| e.word == word) {
            return Err(WordbookError::WordNotFound(word.to_string()));
        }
        self.progress.insert(word.to_string(), state.clone());
        self.save_progress()
    }
}

/// Install the built-in starter category if no categories are present yet
pub fn seed_starter_category() -> Result<()> {
    let dir = paths::categories_dir();
    std::fs::create_dir_all(&dir)?;
    if !CategoryStore::available().is_empty() {
        return Ok(());
    }

    let file = CategoryFile {
        title: Some("Starter Words".to_string()),
        words: starter_words(),
    };
    write_json_atomic(&PathBuf::from(paths::category_path("starter")), &file)?;
    tracing::info!("Seeded starter category ({} words)", file.words.len());
    Ok(())
}

// Helper to build a seed entry
fn seed(word: &str, phonetic: &str, pos: &str, def: &str, example: &str) -> WordEntry {
    WordEntry {
        word: word.to_string(),
        phonetic: Some(phonetic.to_string()),
        definitions: vec![Definition::new(def).with_part_of_speech(pos)],
        examples: vec![example.to_string()],
    }
}

fn starter_words() -> Vec<WordEntry> {
    vec![
        seed(
            "serendipity",
            "/ˌsɛrənˈdɪpɪti/",
            "n.",
            "the occurrence of events by chance in a happy or beneficial way",
            "Meeting her at the bookshop was pure serendipity.",
        ),
        seed(
            "ephemeral",
            "/ɪˈfɛmərəl/",
            "adj.",
            "lasting for a very short time",
            "The beauty of the cherry blossoms is ephemeral.",
        ),
        seed(
            "ubiquitous",
            "/juːˈbɪkwɪtəs/",
            "adj.",
            "present, appearing, or found everywhere",
            "Smartphones have become ubiquitous in daily life.",
        ),
        seed(
            "resilient",
            "/rɪˈzɪliənt/",
            "adj.",
            "able to withstand or recover quickly from difficult conditions",
            "Children are often remarkably resilient.",
        ),
        seed(
            "meticulous",
            "/məˈtɪkjʊləs/",
            "adj.",
            "showing great attention to detail; very careful and precise",
            "She kept meticulous records of every expense.",
        ),
        seed(
            "pragmatic",
            "/præɡˈmætɪk/",
            "adj.",
            "dealing with things sensibly and realistically",
            "He took a pragmatic approach to the problem.",
        ),
        seed(
            "eloquent",
            "/ˈɛləkwənt/",
            "adj.",
            "fluent or persuasive in speaking or writing",
            "Her eloquent speech moved the entire audience.",
        ),
        seed(
            "tenacious",
            "/təˈneɪʃəs/",
            "adj.",
            "holding firmly to something; persistent",
            "A tenacious reporter eventually uncovered the story.",
        ),
        seed(
            "ambiguous",
            "/æmˈbɪɡjuəs/",
            "adj.",
            "open to more than one interpretation; not having one obvious meaning",
            "The contract language was dangerously ambiguous.",
        ),
        seed(
            "candor",
            "/ˈkændər/",
            "n.",
            "the quality of being open and honest in expression",
            "I appreciated the candor of her answer.",
        ),
        seed(
            "alleviate",
            "/əˈliːvieɪt/",
            "v.",
            "to make suffering or a problem less severe",
            "The medicine helped alleviate the pain.",
        ),
        seed(
            "scrutinize",
            "/ˈskruːtənaɪz/",
            "v.",
            "to examine or inspect closely and thoroughly",
            "Auditors scrutinize the accounts every quarter.",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestEnv;

    fn write_category(env: &TestEnv, name: &str, words: Vec<WordEntry>) -> (PathBuf, PathBuf) {
        let words_path = env.file(&format!("{name}.json"));
        let progress_path = env.file(&format!("{name}-progress.json"));
        let file = CategoryFile {
            title: Some("Test Category".to_string()),
            words,
        };
        write_json_atomic(&words_path, &file).unwrap();
        (words_path, progress_path)
    }

    #[test]
    fn test_open_missing_category_fails() {
        let env = TestEnv::new().unwrap();
        let result = CategoryStore::open_at(
            "nope",
            env.file("nope.json"),
            env.file("nope-progress.json"),
        );
        assert!(matches!(result, Err(WordbookError::UnknownCategory(_))));
    }

    #[test]
    fn test_words_default_to_unreviewed() {
        let env = TestEnv::new().unwrap();
        let (w, p) = write_category(&env, "t", starter_words());
        let store = CategoryStore::open_at("t", w, p).unwrap();

        let records = store.list_words();
        assert_eq!(records.len(), starter_words().len());
        assert!(records.iter().all(|r| r.learning.is_new()));
    }

    #[test]
    fn test_list_preserves_file_order() {
        let env = TestEnv::new().unwrap();
        let (w, p) = write_category(&env, "t", starter_words());
        let store = CategoryStore::open_at("t", w, p).unwrap();

        let records = store.list_words();
        assert_eq!(records[0].key(), "serendipity");
        assert_eq!(records[1].key(), "ephemeral");
    }

    #[test]
    fn test_progress_overlay_roundtrip() {
        let env = TestEnv::new().unwrap();
        let (w, p) = write_category(&env, "t", starter_words());
        let mut store = CategoryStore::open_at("t", w.clone(), p.clone()).unwrap();

        let state = LearningState {
            level: 2,
            interval_days: 1,
            review_count: 1,
            correct_count: 1,
            ..LearningState::default()
        };
        store.update_learning_state("ephemeral", &state).unwrap();

        // Reopen and check only that word carries progress
        let reopened = CategoryStore::open_at("t", w, p).unwrap();
        let records = reopened.list_words();
        assert_eq!(records[1].learning, state);
        assert!(records[0].learning.is_new());
    }

    #[test]
    fn test_update_word_outside_list_fails() {
        let env = TestEnv::new().unwrap();
        let (w, p) = write_category(&env, "t", starter_words());
        let mut store = CategoryStore::open_at("t", w, p).unwrap();

        let result = store.update_learning_state("zzz", &LearningState::default());
        assert!(matches!(result, Err(WordbookError::WordNotFound(_))));
    }

    #[test]
    fn test_title_fallback() {
        let env = TestEnv::new().unwrap();
        let words_path = env.file("bare.json");
        write_json_atomic(
            &words_path,
            &CategoryFile {
                title: None,
                words: vec![],
            },
        )
        .unwrap();

        let store =
            CategoryStore::open_at("bare", words_path, env.file("bare-progress.json")).unwrap();
        assert_eq!(store.title(), "bare");
        assert!(store.is_empty());
    }
}
