//! Terminal output formatting. Pure display surface: render calls take
//! core data and print, nothing flows back into the core.

use std::io::Write;

use chrono::{DateTime, Utc};
use crossterm::style::Stylize;

use crate::domain::{MasteryLevel, WordEntry, WordRecord};
use crate::srs::{interval_phrase, ProgressSummary, SessionSummary};

pub fn banner() {
  println!();
  println!("{}", "wordbook - vocabulary notebook".bold());
  println!("{}", "type a word to look it up, /help for commands".dark_grey());
  println!();
}

pub fn prompt() {
  print!("{} ", "wordbook>".green().bold());
  let _ = std::io::stdout().flush();
}

fn level_color(level: MasteryLevel, text: String) -> String {
  let styled = match level {
    MasteryLevel::New => text.dark_grey(),
    MasteryLevel::Learning => text.yellow(),
    MasteryLevel::Reviewing => text.cyan(),
    MasteryLevel::Familiar => text.blue(),
    MasteryLevel::Confident => text.magenta(),
    MasteryLevel::Mastered => text.green(),
  };
  styled.to_string()
}

pub fn entry(entry: &WordEntry) {
  println!();
  match &entry.phonetic {
    Some(phonetic) => println!("  {}  {}", entry.word.clone().cyan().bold(), phonetic.clone().dark_grey()),
    None => println!("  {}", entry.word.clone().cyan().bold()),
  }
  for (i, def) in entry.definitions.iter().enumerate() {
    match &def.part_of_speech {
      Some(pos) => println!("  {}. {} {}", i + 1, pos.clone().dark_yellow(), def.text),
      None => println!("  {}. {}", i + 1, def.text),
    }
  }
  if !entry.examples.is_empty() {
    println!("  {}", "Examples:".dark_grey());
    for example in &entry.examples {
      println!("    {}", example.clone().dark_grey().italic());
    }
  }
  println!();
}

pub fn not_found(word: &str) {
  println!("{} no entry found for '{}'", "!".yellow(), word);
}

pub fn saved(word: &str) {
  println!("{} saved '{}' to your notebook", "+".green(), word);
}

pub fn already_saved(word: &str) {
  println!("'{word}' is already in your notebook");
}

pub fn removed(word: &str) {
  println!("{} removed '{}' from your notebook", "-".red(), word);
}

pub fn not_in_notebook(word: &str) {
  println!("'{word}' is not in your notebook");
}

pub fn notebook_list(records: &[WordRecord], now: DateTime<Utc>) {
  if records.is_empty() {
    println!("your notebook is empty - look a word up and /save it");
    return;
  }
  println!();
  for record in records {
    let mastery = record.learning.mastery();
    let badge = level_color(mastery, format!("[{}]", mastery.label()));
    let due = due_phrase(record, now);
    println!(
      "  {:<18} {:<12} {}",
      record.entry.word.clone().bold(),
      badge,
      due.dark_grey()
    );
  }
  println!();
}

fn due_phrase(record: &WordRecord, now: DateTime<Utc>) -> String {
  if record.learning.is_new() {
    return "not studied yet".to_string();
  }
  if record.learning.is_due(now) {
    return "due now".to_string();
  }
  match record.learning.next_review_at {
    Some(at) => format!("due in {}", interval_phrase((at - now).num_days().max(1))),
    None => String::new(),
  }
}

pub fn progress(title: &str, summary: &ProgressSummary) {
  println!();
  println!("  {}", title.to_string().bold());
  println!("  {} words total", summary.total);
  for level in 0..=5u8 {
    let mastery = MasteryLevel::from_u8(level);
    let count = summary.by_level[level as usize];
    let bar = "#".repeat(count.min(40));
    println!(
      "  {:<10} {:>4}  {}",
      level_color(mastery, mastery.label().to_string()),
      count,
      bar.dark_grey()
    );
  }
  println!(
    "  due today: {}   new: {}   mastered: {}",
    summary.due_today.to_string().yellow(),
    summary.new_available.to_string().cyan(),
    summary.mastered.to_string().green()
  );
  println!();
}

pub fn all_caught_up() {
  println!("{} all caught up - nothing due and no new words to learn", "*".green());
}

pub fn card_front(record: &WordRecord, position: (usize, usize)) {
  let (current, total) = position;
  println!();
  println!("{}", format!("--- card {current}/{total} ---").dark_grey());
  match &record.entry.phonetic {
    Some(phonetic) => println!("  {}  {}", record.entry.word.clone().cyan().bold(), phonetic.clone().dark_grey()),
    None => println!("  {}", record.entry.word.clone().cyan().bold()),
  }
}

pub fn front_hint() {
  println!("{}", "  [enter] show answer   [q] end session".dark_grey());
}

pub fn card_back(record: &WordRecord) {
  for (i, def) in record.entry.definitions.iter().enumerate() {
    match &def.part_of_speech {
      Some(pos) => println!("  {}. {} {}", i + 1, pos.clone().dark_yellow(), def.text),
      None => println!("  {}. {}", i + 1, def.text),
    }
  }
}

pub fn examples(entry: &WordEntry) {
  if entry.examples.is_empty() {
    println!("  {}", "no example sentences for this word".dark_grey());
    return;
  }
  for example in &entry.examples {
    println!("    {}", example.clone().dark_grey().italic());
  }
}

pub fn grade_hint() {
  println!(
    "  {} {} {} {}   {}",
    "[1] forgot".red(),
    "[2] hard".yellow(),
    "[3] good".cyan(),
    "[4] easy".green(),
    "[e] examples  [q] end".dark_grey()
  );
}

pub fn invalid_input(hint: &str) {
  println!("  {} {}", "?".yellow(), hint);
}

pub fn feedback(message: &str) {
  println!("  {}", message.to_string().green());
}

pub fn persist_warning() {
  println!(
    "  {}",
    "warning: progress for this word could not be saved".yellow()
  );
}

pub fn session_summary(summary: &SessionSummary) {
  println!();
  println!("{}", "--- session complete ---".bold());
  println!(
    "  reviewed: {}   correct: {}   need practice: {}   score: {}%",
    summary.reviewed,
    summary.correct.to_string().green(),
    summary.need_practice.to_string().yellow(),
    summary.percentage
  );
  println!();
}

pub fn session_abandoned(summary: &SessionSummary) {
  println!();
  println!("session ended early - progress on graded cards is saved");
  if summary.reviewed > 0 {
    session_summary(summary);
  }
}

pub fn categories(names: &[String]) {
  if names.is_empty() {
    println!("no categories installed under data/categories/");
    return;
  }
  println!("available categories:");
  for name in names {
    println!("  {name}");
  }
}

pub fn help() {
  println!();
  println!("  {:<22} look a word up", "<word>");
  println!("  {:<22} save the last looked-up word (or a named one)", "/save [word]");
  println!("  {:<22} remove a word from the notebook", "/del <word>");
  println!("  {:<22} list notebook words", "/list");
  println!("  {:<22} drill due and new notebook words", "/review");
  println!("  {:<22} drill a vocabulary category", "/study <category>");
  println!("  {:<22} list vocabulary categories", "/cats");
  println!("  {:<22} progress dashboard (notebook or category)", "/stats [category]");
  println!("  {:<22} this help", "/help");
  println!("  {:<22} exit", "/quit");
  println!();
}

pub fn info(message: &str) {
  println!("{message}");
}

pub fn goodbye() {
  println!("bye - keep the streak going");
}

pub fn error_line(message: &str) {
  println!("{} {}", "error:".red(), message);
}
