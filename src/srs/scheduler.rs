use chrono::{DateTime, Duration, Utc};

use crate::domain::{LearningState, MasteryLevel, RecallGrade};

const MIN_EASE_FACTOR: f64 = 1.3;
const FORGOT_EASE_PENALTY: f64 = 0.2;
const EASE_STEP: f64 = 0.15;

/// Compute the full replacement learning state for one graded review.
///
/// Pure function of (current state, grade, now); callers pass the clock in
/// so scheduling stays deterministic under test. All seven fields of the
/// result are recomputed or carried - never a partial update.
pub fn apply_review(
  current: &LearningState,
  grade: RecallGrade,
  now: DateTime<Utc>,
) -> LearningState {
  let (interval_days, ease_factor, correct_count) = if grade == RecallGrade::Forgot {
    (
      0,
      (current.ease_factor - FORGOT_EASE_PENALTY).max(MIN_EASE_FACTOR),
      current.correct_count,
    )
  } else {
    // Interval grows from the pre-adjustment ease factor
    let interval = match current.interval_days {
      0 => 1,
      1 => 6,
      days => ((days as f64) * current.ease_factor).round() as i64,
    };
    let ease = match grade {
      RecallGrade::Hard => (current.ease_factor - EASE_STEP).max(MIN_EASE_FACTOR),
      RecallGrade::Easy => current.ease_factor + EASE_STEP,
      _ => current.ease_factor,
    };
    (interval, ease, current.correct_count + 1)
  };

  LearningState {
    level: MasteryLevel::from_interval(interval_days).as_u8(),
    ease_factor,
    interval_days,
    last_reviewed_at: Some(now),
    next_review_at: Some(now + Duration::days(interval_days)),
    review_count: current.review_count + 1,
    correct_count,
  }
}

/// Short display message for the grade just given. Display only,
/// no scheduling logic lives here.
pub fn feedback_message(grade: RecallGrade, interval_days: i64) -> String {
  let when = if interval_days == 0 {
    "today".to_string()
  } else {
    format!("in {}", interval_phrase(interval_days))
  };
  match grade {
    RecallGrade::Forgot => "Reset - this word comes back today.".to_string(),
    RecallGrade::Hard => format!("Kept it. Next review {when}."),
    RecallGrade::Good => format!("Nice. Next review {when}."),
    RecallGrade::Easy => format!("Easy! Next review {when}."),
  }
}

/// Human-readable review interval
pub fn interval_phrase(days: i64) -> String {
  match days {
    0 => "today".to_string(),
    1 => "1 day".to_string(),
    2..=6 => format!("{days} days"),
    7..=13 => "1 week".to_string(),
    14..=20 => "2 weeks".to_string(),
    21..=29 => "3 weeks".to_string(),
    30..=59 => "1 month".to_string(),
    _ => format!("{} months", ((days as f64) / 30.0).round() as i64),
  }
}
