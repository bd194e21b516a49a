use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

fn default_ease_factor() -> f64 {
  2.5
}

/// Per-word spaced-repetition state.
///
/// Every field carries a serde default so a partially written or
/// hand-edited store entry is repaired to a sane state instead of
/// failing the whole file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningState {
  /// Mastery level 0-5, derived from `interval_days`
  #[serde(default)]
  pub level: u8,
  #[serde(default = "default_ease_factor")]
  pub ease_factor: f64,
  /// Days until the next review; 0 for unreviewed words
  #[serde(default)]
  pub interval_days: i64,
  #[serde(default)]
  pub last_reviewed_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub next_review_at: Option<DateTime<Utc>>,
  #[serde(default)]
  pub review_count: i64,
  #[serde(default)]
  pub correct_count: i64,
}

impl Default for LearningState {
  fn default() -> Self {
    Self {
      level: 0,
      ease_factor: default_ease_factor(),
      interval_days: 0,
      last_reviewed_at: None,
      next_review_at: None,
      review_count: 0,
      correct_count: 0,
    }
  }
}

impl LearningState {
  /// Never shown in a drill yet
  pub fn is_new(&self) -> bool {
    self.level == 0
  }

  /// Reviewed before and the next review timestamp has passed
  pub fn is_due(&self, now: DateTime<Utc>) -> bool {
    self.level > 0 && self.next_review_at.is_some_and(|at| at <= now)
  }

  pub fn mastery(&self) -> MasteryLevel {
    MasteryLevel::from_u8(self.level)
  }
}

/// Mastery level buckets, a pure function of the review interval
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MasteryLevel {
  New = 0,
  Learning = 1,
  Reviewing = 2,
  Familiar = 3,
  Confident = 4,
  Mastered = 5,
}

impl MasteryLevel {
  /// Threshold rules evaluated highest first.
  ///
  /// An interval of 0 maps to Learning, not New: once a word has been
  /// reviewed it is never New again, even right after a Forgot reset.
  pub fn from_interval(interval_days: i64) -> Self {
    match interval_days {
      d if d >= 21 => Self::Mastered,
      d if d >= 14 => Self::Confident,
      d if d >= 7 => Self::Familiar,
      d if d >= 1 => Self::Reviewing,
      d if d >= 0 => Self::Learning,
      _ => Self::New,
    }
  }

  pub fn from_u8(value: u8) -> Self {
    match value {
      1 => Self::Learning,
      2 => Self::Reviewing,
      3 => Self::Familiar,
      4 => Self::Confident,
      5 => Self::Mastered,
      _ => Self::New,
    }
  }

  pub fn as_u8(&self) -> u8 {
    *self as u8
  }

  pub fn label(&self) -> &'static str {
    match self {
      Self::New => "New",
      Self::Learning => "Learning",
      Self::Reviewing => "Reviewing",
      Self::Familiar => "Familiar",
      Self::Confident => "Confident",
      Self::Mastered => "Mastered",
    }
  }
}

/// User-reported recall quality for one flashcard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecallGrade {
  Forgot = 1,
  Hard = 2,
  Good = 3,
  Easy = 4,
}

impl RecallGrade {
  pub fn from_u8(value: u8) -> Option<Self> {
    match value {
      1 => Some(Self::Forgot),
      2 => Some(Self::Hard),
      3 => Some(Self::Good),
      4 => Some(Self::Easy),
      _ => None,
    }
  }

  /// Parse a trimmed, lower-cased drill input token
  pub fn from_input(s: &str) -> Option<Self> {
    s.parse::<u8>().ok().and_then(Self::from_u8)
  }

  /// Any recall at all - drives the long-term correct_count stat
  pub fn is_successful(&self) -> bool {
    !matches!(self, Self::Forgot)
  }

  /// Comfortable recall (Good or better) - drives session summaries
  pub fn is_correct(&self) -> bool {
    matches!(self, Self::Good | Self::Easy)
  }

  pub fn label(&self) -> &'static str {
    match self {
      Self::Forgot => "Forgot",
      Self::Hard => "Hard",
      Self::Good => "Good",
      Self::Easy => "Easy",
    }
  }
}
