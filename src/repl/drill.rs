//! Interactive flashcard drill driver.
//!
//! Wires a LearningSession to the terminal: front -> reveal -> grade for
//! each card, with a short pause after grade feedback. Unrecognized input
//! re-prompts and never advances the session. Works against any WordStore,
//! so the notebook and category drills share this code unchanged.

use chrono::Utc;

use crate::config::Settings;
use crate::domain::{RecallGrade, WordRecord};
use crate::error::Result;
use crate::render;
use crate::srs::{feedback_message, LearningSession, SessionPhase};
use crate::store::WordStore;

use super::InputLines;

pub async fn run<S: WordStore>(
  store: &mut S,
  words: Vec<WordRecord>,
  settings: &Settings,
  lines: &mut InputLines,
) -> Result<()> {
  let mut session = LearningSession::new(words);

  loop {
    match session.phase() {
      SessionPhase::Complete => {
        render::session_summary(&session.summary());
        return Ok(());
      }
      SessionPhase::Front => {
        let Some(record) = session.current().cloned() else {
          continue;
        };
        render::card_front(&record, session.position());
        render::front_hint();

        loop {
          let Some(input) = read_input(lines).await? else {
            render::session_abandoned(&session.summary());
            return Ok(());
          };
          match input.as_str() {
            "" | "s" | "show" => {
              session.reveal();
              break;
            }
            "q" | "quit" => {
              render::session_abandoned(&session.summary());
              return Ok(());
            }
            _ => render::invalid_input("press enter to show the answer, or q to end"),
          }
        }
      }
      SessionPhase::Back => {
        let Some(record) = session.current().cloned() else {
          continue;
        };
        render::card_back(&record);
        render::grade_hint();

        loop {
          let Some(input) = read_input(lines).await? else {
            render::session_abandoned(&session.summary());
            return Ok(());
          };
          if let Some(grade) = RecallGrade::from_input(&input) {
            if let Some(outcome) = session.grade_current(grade, Utc::now(), store) {
              if !outcome.persisted {
                render::persist_warning();
              }
              render::feedback(&feedback_message(grade, outcome.new_state.interval_days));
              pause(settings).await;
            }
            break;
          }
          match input.as_str() {
            "e" | "examples" => render::examples(&record.entry),
            "q" | "quit" => {
              render::session_abandoned(&session.summary());
              return Ok(());
            }
            _ => render::invalid_input("grade with 1-4, e for examples, q to end"),
          }
        }
      }
    }
  }
}

async fn read_input(lines: &mut InputLines) -> Result<Option<String>> {
  Ok(lines.next_line().await?.map(|l| l.trim().to_lowercase()))
}

/// Cosmetic pacing between grade feedback and the next card
async fn pause(settings: &Settings) {
  if settings.feedback_pause_ms > 0 {
    tokio::time::sleep(std::time::Duration::from_millis(settings.feedback_pause_ms)).await;
  }
}
