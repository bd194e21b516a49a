//! Due/new word selection and aggregate progress statistics.

use chrono::{DateTime, Utc};

use crate::domain::WordRecord;

/// Build the word queue for one drill session.
///
/// Due words come first, then at most `max_new_words` never-reviewed words.
/// Both partitions keep the store's collection order - no reordering by
/// difficulty or frequency. Words reviewed before but not yet due are left
/// out entirely. Recomputed fresh at every session start.
pub fn select_session_words(
  records: &[WordRecord],
  max_new_words: usize,
  now: DateTime<Utc>,
) -> Vec<WordRecord> {
  let due = records.iter().filter(|r| r.learning.is_due(now));
  let fresh = records
    .iter()
    .filter(|r| r.learning.is_new())
    .take(max_new_words);
  due.chain(fresh).cloned().collect()
}

/// Read-only progress snapshot over a word set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProgressSummary {
  pub total: usize,
  /// Histogram indexed by mastery level 0-5
  pub by_level: [usize; 6],
  pub due_today: usize,
  pub new_available: usize,
  pub mastered: usize,
}

/// Compute dashboard statistics. Purely derived, nothing is stored.
pub fn summarize(records: &[WordRecord], now: DateTime<Utc>) -> ProgressSummary {
  let mut summary = ProgressSummary {
    total: records.len(),
    ..ProgressSummary::default()
  };

  for record in records {
    let level = record.learning.level.min(5) as usize;
    summary.by_level[level] += 1;
    if record.learning.is_due(now) {
      summary.due_today += 1;
    }
  }

  summary.new_available = summary.by_level[0];
  summary.mastered = summary.by_level[5];
  summary
}
