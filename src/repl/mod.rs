//! Interactive command loop: word lookup plus slash commands.

pub mod drill;

use std::path::Path;

use chrono::Utc;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::config::Settings;
use crate::dict::{self, LocalDictionary};
use crate::domain::WordEntry;
use crate::error::{Result, WordbookError};
use crate::paths;
use crate::render;
use crate::srs::{select_session_words, summarize};
use crate::store::{CategoryStore, LogOnError, NotebookStore, WordStore};

pub type InputLines = Lines<BufReader<Stdin>>;

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
  Lookup(String),
  Save(Option<String>),
  Delete(String),
  List,
  Review,
  Study(String),
  Categories,
  Stats(Option<String>),
  Help,
  Quit,
  Empty,
  /// Recognized command missing its argument
  Usage(&'static str),
  Unknown(String),
}

fn parse_command(line: &str) -> Command {
  let line = line.trim();
  if line.is_empty() {
    return Command::Empty;
  }
  if !line.starts_with('/') {
    return Command::Lookup(line.to_lowercase());
  }

  let mut parts = line.splitn(2, char::is_whitespace);
  let head = parts.next().unwrap_or_default().to_lowercase();
  let arg = parts
    .next()
    .map(|s| s.trim().to_lowercase())
    .filter(|s| !s.is_empty());

  match (head.as_str(), arg) {
    ("/save", arg) => Command::Save(arg),
    ("/del" | "/delete", Some(word)) => Command::Delete(word),
    ("/del" | "/delete", None) => Command::Usage("usage: /del <word>"),
    ("/list", _) => Command::List,
    ("/review", _) => Command::Review,
    ("/study", Some(name)) => Command::Study(name),
    ("/study", None) => Command::Usage("usage: /study <category>"),
    ("/cats" | "/categories", _) => Command::Categories,
    ("/stats", arg) => Command::Stats(arg),
    ("/help" | "/h", _) => Command::Help,
    ("/quit" | "/exit" | "/q", _) => Command::Quit,
    _ => Command::Unknown(head),
  }
}

pub struct Repl {
  settings: Settings,
  notebook: NotebookStore,
  dictionary: LocalDictionary,
  client: reqwest::Client,
  /// Most recent successful lookup, the implicit target of /save
  last_lookup: Option<WordEntry>,
}

/// Open the stores and run the command loop until /quit or EOF.
pub async fn run(settings: Settings) -> Result<()> {
  let notebook = NotebookStore::open(paths::notebook_path())?;
  let dictionary = LocalDictionary::load(Path::new(&paths::dictionary_path()))?;

  let mut repl = Repl {
    settings,
    notebook,
    dictionary,
    client: reqwest::Client::new(),
    last_lookup: None,
  };

  let mut lines = BufReader::new(tokio::io::stdin()).lines();

  render::banner();
  render::prompt();
  while let Some(line) = lines.next_line().await? {
    if !repl.dispatch(&line, &mut lines).await? {
      break;
    }
    render::prompt();
  }
  render::goodbye();
  Ok(())
}

impl Repl {
  /// Handle one input line. Returns false when the loop should end.
  async fn dispatch(&mut self, line: &str, lines: &mut InputLines) -> Result<bool> {
    match parse_command(line) {
      Command::Empty => {}
      Command::Quit => return Ok(false),
      Command::Lookup(word) => self.lookup(&word).await,
      Command::Save(word) => self.save(word).await,
      Command::Delete(word) => match self.notebook.remove(&word) {
        Ok(true) => render::removed(&word),
        Ok(false) => render::not_in_notebook(&word),
        Err(e) => render::error_line(&e.to_string()),
      },
      Command::List => render::notebook_list(&self.notebook.list_words(), Utc::now()),
      Command::Review => self.review(lines).await?,
      Command::Study(name) => self.study(&name, lines).await?,
      Command::Categories => render::categories(&CategoryStore::available()),
      Command::Stats(target) => self.stats(target.as_deref()),
      Command::Help => render::help(),
      Command::Usage(hint) => render::invalid_input(hint),
      Command::Unknown(cmd) => {
        render::invalid_input(&format!("unknown command '{cmd}' - try /help"))
      }
    }
    Ok(true)
  }

  /// Local dictionary first, online fallback second. Local hits without
  /// example sentences borrow them from the online entry when available.
  async fn lookup(&mut self, word: &str) {
    if let Some(mut entry) = self.dictionary.lookup(word) {
      if entry.examples.is_empty() {
        let online = dict::online::lookup(&self.client, &self.settings.online_api_url, word)
          .await
          .log_warn("Example enrichment failed")
          .flatten();
        if let Some(online) = online {
          entry.examples = online.examples;
        }
      }
      render::entry(&entry);
      self.last_lookup = Some(entry);
      return;
    }

    match dict::online::lookup(&self.client, &self.settings.online_api_url, word).await {
      Ok(Some(entry)) => {
        render::entry(&entry);
        self.last_lookup = Some(entry);
      }
      Ok(None) => render::not_found(word),
      Err(e) => {
        tracing::warn!("Online lookup failed for '{}': {}", word, e);
        render::not_found(word);
      }
    }
  }

  async fn save(&mut self, word: Option<String>) {
    let entry = match word {
      None => match self.last_lookup.clone() {
        Some(entry) => entry,
        None => {
          render::invalid_input("look a word up first, then /save");
          return;
        }
      },
      Some(word) => {
        if let Some(last) = self.last_lookup.clone().filter(|e| e.word == word) {
          last
        } else if let Some(entry) = self.dictionary.lookup(&word) {
          entry
        } else {
          match dict::online::lookup(&self.client, &self.settings.online_api_url, &word).await {
            Ok(Some(entry)) => entry,
            _ => {
              render::not_found(&word);
              return;
            }
          }
        }
      }
    };

    let word = entry.word.clone();
    match self.notebook.add(entry) {
      Ok(true) => render::saved(&word),
      Ok(false) => render::already_saved(&word),
      Err(e) => render::error_line(&e.to_string()),
    }
  }

  async fn review(&mut self, lines: &mut InputLines) -> Result<()> {
    let words = self.notebook.list_words();
    if words.is_empty() {
      render::info("your notebook is empty - look words up and /save them first");
      return Ok(());
    }

    let selected = select_session_words(&words, self.settings.max_new_words, Utc::now());
    if selected.is_empty() {
      render::all_caught_up();
      return Ok(());
    }
    drill::run(&mut self.notebook, selected, &self.settings, lines).await
  }

  async fn study(&mut self, name: &str, lines: &mut InputLines) -> Result<()> {
    let mut store = match CategoryStore::open(name) {
      Ok(store) => store,
      Err(WordbookError::UnknownCategory(_)) => {
        render::error_line(&format!("unknown category '{name}'"));
        render::categories(&CategoryStore::available());
        return Ok(());
      }
      Err(e) => {
        render::error_line(&e.to_string());
        return Ok(());
      }
    };

    let words = store.list_words();
    let selected = select_session_words(&words, self.settings.max_new_words, Utc::now());
    if selected.is_empty() {
      render::all_caught_up();
      return Ok(());
    }
    drill::run(&mut store, selected, &self.settings, lines).await
  }

  fn stats(&self, target: Option<&str>) {
    let now = Utc::now();
    match target {
      None => render::progress("notebook", &summarize(&self.notebook.list_words(), now)),
      Some(name) => match CategoryStore::open(name) {
        Ok(store) => render::progress(store.title(), &summarize(&store.list_words(), now)),
        Err(WordbookError::UnknownCategory(_)) => {
          render::error_line(&format!("unknown category '{name}'"));
        }
        Err(e) => render::error_line(&e.to_string()),
      },
    }
  }
}
