//! Flashcard drill session state machine.
//!
//! A session owns a fixed word queue chosen at start, a cursor, and the
//! reveal flag for the current card. Grading applies the scheduler and
//! writes the new state straight through to the owning store, so a session
//! abandoned mid-way loses nothing already graded.

use chrono::{DateTime, Utc};

use crate::domain::{LearningState, RecallGrade, WordRecord};
use crate::srs::scheduler;
use crate::store::WordStore;

/// Which prompt the drill is currently showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
  /// Word shown, answer hidden; waiting for reveal
  Front,
  /// Answer shown; waiting for a grade
  Back,
  /// Queue exhausted; session object is done
  Complete,
}

/// One completed card
#[derive(Debug, Clone)]
pub struct SessionResult {
  pub word: String,
  pub grade: RecallGrade,
  pub was_revealed: bool,
}

/// Outcome of grading the current card
#[derive(Debug, Clone)]
pub struct GradeOutcome {
  pub word: String,
  pub new_state: LearningState,
  /// False when the state sink rejected the write; the grade still counts
  /// toward session results
  pub persisted: bool,
}

/// Final statistics shown on completion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSummary {
  pub reviewed: usize,
  pub correct: usize,
  pub need_practice: usize,
  pub percentage: i64,
}

#[derive(Debug)]
pub struct LearningSession {
  words: Vec<WordRecord>,
  current_index: usize,
  revealed: bool,
  results: Vec<SessionResult>,
}

impl LearningSession {
  /// The queue is fixed for the session's lifetime; an empty queue makes
  /// the session complete before any interaction.
  pub fn new(words: Vec<WordRecord>) -> Self {
    Self {
      words,
      current_index: 0,
      revealed: false,
      results: Vec::new(),
    }
  }

  pub fn is_complete(&self) -> bool {
    self.current_index >= self.words.len()
  }

  pub fn phase(&self) -> SessionPhase {
    if self.is_complete() {
      SessionPhase::Complete
    } else if self.revealed {
      SessionPhase::Back
    } else {
      SessionPhase::Front
    }
  }

  pub fn current(&self) -> Option<&WordRecord> {
    self.words.get(self.current_index)
  }

  /// 1-based position of the current card and the queue length
  pub fn position(&self) -> (usize, usize) {
    (self.current_index + 1, self.words.len())
  }

  pub fn is_revealed(&self) -> bool {
    self.revealed
  }

  /// Show the answer side of the current card. No other side effect.
  pub fn reveal(&mut self) {
    if !self.is_complete() {
      self.revealed = true;
    }
  }

  pub fn results(&self) -> &[SessionResult] {
    &self.results
  }

  /// Grade the current card: apply the scheduler, write the new state
  /// through to the store, log the result and advance the cursor.
  ///
  /// A store failure is surfaced in the outcome and logged, never fatal -
  /// the grade still enters the session results and the drill moves on.
  /// Returns None when the session is already complete.
  pub fn grade_current(
    &mut self,
    grade: RecallGrade,
    now: DateTime<Utc>,
    store: &mut dyn WordStore,
  ) -> Option<GradeOutcome> {
    let record = self.words.get(self.current_index)?;
    let word = record.entry.word.clone();
    let new_state = scheduler::apply_review(&record.learning, grade, now);

    let persisted = match store.update_learning_state(&word, &new_state) {
      Ok(()) => true,
      Err(e) => {
        tracing::warn!("Failed to persist learning state for '{}': {}", word, e);
        false
      }
    };

    self.results.push(SessionResult {
      word: word.clone(),
      grade,
      was_revealed: self.revealed,
    });
    self.current_index += 1;
    self.revealed = false;

    Some(GradeOutcome {
      word,
      new_state,
      persisted,
    })
  }

  pub fn summary(&self) -> SessionSummary {
    let reviewed = self.results.len();
    let correct = self.results.iter().filter(|r| r.grade.is_correct()).count();
    let percentage = if reviewed == 0 {
      0
    } else {
      ((correct as f64 / reviewed as f64) * 100.0).round() as i64
    };
    SessionSummary {
      reviewed,
      correct,
      need_practice: reviewed - correct,
      percentage,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::WordEntry;
  use crate::testing::MemoryStore;

  fn record(word: &str) -> WordRecord {
    WordRecord::new(WordEntry::new(word))
  }

  fn at() -> DateTime<Utc> {
    "2026-03-01T12:00:00Z".parse().unwrap()
  }

  #[test]
  fn test_empty_session_immediately_complete() {
    let session = LearningSession::new(Vec::new());
    assert!(session.is_complete());
    assert_eq!(session.phase(), SessionPhase::Complete);
    assert!(session.current().is_none());
  }

  #[test]
  fn test_front_to_back_transition() {
    let mut session = LearningSession::new(vec![record("apple")]);
    assert_eq!(session.phase(), SessionPhase::Front);
    assert!(!session.is_revealed());

    session.reveal();
    assert_eq!(session.phase(), SessionPhase::Back);
    assert!(session.is_revealed());
  }

  #[test]
  fn test_grading_advances_and_hides_answer() {
    let words = vec![record("apple"), record("brook")];
    let mut store = MemoryStore::with_words(words.clone());
    let mut session = LearningSession::new(words);

    session.reveal();
    let outcome = session
      .grade_current(RecallGrade::Good, at(), &mut store)
      .unwrap();
    assert_eq!(outcome.word, "apple");
    assert!(outcome.persisted);
    assert_eq!(outcome.new_state.interval_days, 1);

    // Next card starts face down
    assert_eq!(session.phase(), SessionPhase::Front);
    assert_eq!(session.position(), (2, 2));
  }

  #[test]
  fn test_completion_after_last_card() {
    let words = vec![record("apple")];
    let mut store = MemoryStore::with_words(words.clone());
    let mut session = LearningSession::new(words);

    session.reveal();
    session.grade_current(RecallGrade::Easy, at(), &mut store);
    assert_eq!(session.phase(), SessionPhase::Complete);

    // Grading past the end is a no-op
    assert!(session
      .grade_current(RecallGrade::Good, at(), &mut store)
      .is_none());
    assert_eq!(session.results().len(), 1);
  }

  #[test]
  fn test_write_through_updates_exact_word() {
    let words = vec![record("apple"), record("brook"), record("cairn")];
    let mut store = MemoryStore::with_words(words.clone());
    let mut session = LearningSession::new(words);

    session.reveal();
    session.grade_current(RecallGrade::Good, at(), &mut store);

    assert_eq!(store.updates.len(), 1);
    assert_eq!(store.updates[0].0, "apple");
    assert_eq!(store.state_of("apple").unwrap().review_count, 1);
    assert_eq!(store.state_of("brook").unwrap().review_count, 0);
  }

  #[test]
  fn test_write_through_on_abandon() {
    let words = vec![record("apple"), record("brook")];
    let mut store = MemoryStore::with_words(words.clone());
    {
      let mut session = LearningSession::new(words);
      session.reveal();
      session.grade_current(RecallGrade::Hard, at(), &mut store);
      // Session dropped here with one card left
    }
    assert_eq!(store.updates.len(), 1);
    assert_eq!(store.updates[0].0, "apple");
  }

  #[test]
  fn test_persist_failure_is_not_fatal() {
    let words = vec![record("apple"), record("brook")];
    let mut store = MemoryStore::with_words(words.clone());
    store.fail_updates = true;
    let mut session = LearningSession::new(words);

    session.reveal();
    let outcome = session
      .grade_current(RecallGrade::Good, at(), &mut store)
      .unwrap();

    assert!(!outcome.persisted);
    // Grade still recorded, cursor still advanced
    assert_eq!(session.results().len(), 1);
    assert_eq!(session.position(), (2, 2));
    assert!(store.updates.is_empty());
  }

  #[test]
  fn test_results_track_reveal_flag() {
    let words = vec![record("apple"), record("brook")];
    let mut store = MemoryStore::with_words(words.clone());
    let mut session = LearningSession::new(words);

    session.reveal();
    session.grade_current(RecallGrade::Good, at(), &mut store);
    session.grade_current(RecallGrade::Forgot, at(), &mut store);

    assert!(session.results()[0].was_revealed);
    assert!(!session.results()[1].was_revealed);
  }

  #[test]
  fn test_summary_counts() {
    let words = vec![record("a"), record("b"), record("c")];
    let mut store = MemoryStore::with_words(words.clone());
    let mut session = LearningSession::new(words);

    for grade in [RecallGrade::Good, RecallGrade::Easy, RecallGrade::Forgot] {
      session.reveal();
      session.grade_current(grade, at(), &mut store);
    }

    let summary = session.summary();
    assert_eq!(summary.reviewed, 3);
    assert_eq!(summary.correct, 2);
    assert_eq!(summary.need_practice, 1);
    assert_eq!(summary.percentage, 67);
  }

  #[test]
  fn test_summary_hard_counts_as_need_practice() {
    let words = vec![record("a")];
    let mut store = MemoryStore::with_words(words.clone());
    let mut session = LearningSession::new(words);

    session.reveal();
    session.grade_current(RecallGrade::Hard, at(), &mut store);

    let summary = session.summary();
    assert_eq!(summary.correct, 0);
    assert_eq!(summary.need_practice, 1);
  }

  #[test]
  fn test_summary_empty_session_no_division_by_zero() {
    let session = LearningSession::new(Vec::new());
    let summary = session.summary();
    assert_eq!(summary.reviewed, 0);
    assert_eq!(summary.percentage, 0);
  }
}
