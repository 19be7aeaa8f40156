//! crates/cura_core/src/domain.rs
//!
//! Defines the pure, core data structures for the symptom-guidance assistant.
//! These structs carry no runtime behaviour beyond construction helpers.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::pathway::Pathway;

/// Who wrote a message in the chat transcript.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Author {
    User,
    Assistant,
}

/// A single entry of the append-only chat transcript.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Message {
    pub id: Uuid,
    pub author: Author,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(Author::User, text)
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(Author::Assistant, text)
    }

    fn new(author: Author, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

/// The position of a conversation within the scripted question sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    #[default]
    Symptoms,
    Duration,
    Severity,
    Notes,
    Done,
}

impl Step {
    /// The numeric step, `0` for symptoms through `4` once the pathway is fixed.
    pub fn index(self) -> u8 {
        match self {
            Step::Symptoms => 0,
            Step::Duration => 1,
            Step::Severity => 2,
            Step::Notes => 3,
            Step::Done => 4,
        }
    }

    pub(crate) fn next(self) -> Self {
        match self {
            Step::Symptoms => Step::Duration,
            Step::Duration => Step::Severity,
            Step::Severity => Step::Notes,
            Step::Notes | Step::Done => Step::Done,
        }
    }
}

/// Everything collected from the user during one session.
///
/// Created empty at session start and threaded through
/// [`crate::engine::advance`]; never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ConversationState {
    pub step: Step,
    pub symptoms: Vec<String>,
    pub duration: String,
    /// The raw severity text as typed by the user.
    pub severity_raw: String,
    /// The display label, `<raw>/10`.
    pub severity_label: String,
    pub severity_score: u8,
    pub notes: String,
    pub pathway: Option<Pathway>,
}

impl ConversationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_done(&self) -> bool {
        self.step == Step::Done
    }
}

/// One entry of the fixed doctor directory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoctorRecord {
    pub id: &'static str,
    pub name: &'static str,
    pub specialization: &'static str,
    pub distance: &'static str,
    pub next_availability: &'static str,
    pub rating: f32,
}

/// An appointment held in memory for the current session only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingRecord {
    pub doctor_id: String,
    pub date: NaiveDate,
    pub time_slot: String,
}

/// How a notice should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Info,
    Destructive,
}

/// A short, non-blocking notification shown to the user (a "toast").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub level: NoticeLevel,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: NoticeLevel::Info,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level: NoticeLevel::Destructive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_get_distinct_ids() {
        let a = Message::user("hello");
        let b = Message::user("hello");
        assert_ne!(a.id, b.id);
        assert_eq!(a.author, Author::User);
    }

    #[test]
    fn state_serializes_with_snake_case_tags() {
        let mut state = ConversationState::new();
        state.pathway = Some(Pathway::DoctorVisit);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["step"], "symptoms");
        assert_eq!(json["pathway"], "doctor_visit");
    }
}
