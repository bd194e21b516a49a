//! Application configuration constants.
//!
//! This module centralizes all configurable values that were previously
//! hardcoded throughout the codebase.

use serde::Deserialize;

// ==================== File Configuration ====================

/// Configuration file structure for config.toml
#[derive(Debug, Default, Deserialize)]
struct AppConfig {
    study: Option<StudyConfig>,
    lookup: Option<LookupConfig>,
}

#[derive(Debug, Default, Deserialize)]
struct StudyConfig {
    max_new_words: Option<usize>,
    feedback_pause_ms: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
struct LookupConfig {
    online_api_url: Option<String>,
}

/// Runtime settings resolved at startup
#[derive(Debug, Clone)]
pub struct Settings {
    /// Cap on never-reviewed words pulled into one drill session
    pub max_new_words: usize,
    /// Cosmetic pause between grade feedback and the next card (0 disables)
    pub feedback_pause_ms: u64,
    /// Base URL of the online dictionary fallback
    pub online_api_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_new_words: DEFAULT_MAX_NEW_WORDS,
            feedback_pause_ms: DEFAULT_FEEDBACK_PAUSE_MS,
            online_api_url: DEFAULT_ONLINE_API_URL.to_string(),
        }
    }
}

/// Load settings with priority: config.toml > env > default
pub fn load_settings() -> Settings {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let file_config = std::fs::read_to_string("config.toml")
        .ok()
        .and_then(|contents| match toml::from_str::<AppConfig>(&contents) {
            Ok(config) => {
                tracing::info!("Loaded config.toml");
                Some(config)
            }
            Err(e) => {
                tracing::warn!("Ignoring malformed config.toml: {}", e);
                None
            }
        })
        .unwrap_or_default();

    let study = file_config.study.unwrap_or_default();
    let lookup = file_config.lookup.unwrap_or_default();

    Settings {
        max_new_words: study
            .max_new_words
            .or_else(|| env_parse("WORDBOOK_MAX_NEW_WORDS"))
            .unwrap_or(DEFAULT_MAX_NEW_WORDS),
        feedback_pause_ms: study
            .feedback_pause_ms
            .or_else(|| env_parse("WORDBOOK_FEEDBACK_PAUSE_MS"))
            .unwrap_or(DEFAULT_FEEDBACK_PAUSE_MS),
        online_api_url: lookup
            .online_api_url
            .or_else(|| std::env::var("WORDBOOK_ONLINE_API_URL").ok())
            .unwrap_or_else(|| DEFAULT_ONLINE_API_URL.to_string()),
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok().and_then(|v| v.parse().ok())
}

// ==================== Study Configuration ====================

/// Default cap on new (never-reviewed) words per drill session
pub const DEFAULT_MAX_NEW_WORDS: usize = 10;

/// Default pause after grade feedback, in milliseconds
pub const DEFAULT_FEEDBACK_PAUSE_MS: u64 = 800;

// ==================== Lookup Configuration ====================

/// Free dictionary API; the looked-up word is appended to this base
pub const DEFAULT_ONLINE_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

// ==================== Tests ====================
