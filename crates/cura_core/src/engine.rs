//! crates/cura_core/src/engine.rs
//!
//! The scripted conversation: four questions, then a care pathway.
//!
//! `advance` is the only transition function. It mutates the caller's
//! [`ConversationState`] and returns what the assistant should say next; it
//! performs no I/O and knows nothing about reply latency.

use serde::Serialize;

use crate::domain::{ConversationState, Step};
use crate::pathway::Pathway;

pub const DURATION_PROMPT: &str =
    "Thank you for sharing that. How long have you been experiencing these symptoms?";
pub const SEVERITY_PROMPT: &str = "On a scale of 1-10, how would you rate the severity of your symptoms, with 10 being the most severe?";
pub const NOTES_PROMPT: &str = "Are there any other details you'd like to share about your symptoms or how they're affecting you?";

/// The first assistant message of every session.
pub fn greeting(assistant_name: &str) -> String {
    format!(
        "Hi, I'm {assistant_name}. I'm here to help guide you through understanding your symptoms and finding the right next step for care. Can you tell me what symptoms you're experiencing?"
    )
}

/// What the assistant answers after a user turn.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EngineReply {
    /// The next scripted question.
    Prompt { text: &'static str },
    /// The final recommendation, also repeated for any input after it.
    Recommendation {
        pathway: Pathway,
        text: String,
        show_doctors: bool,
    },
}

impl EngineReply {
    pub fn text(&self) -> &str {
        match self {
            EngineReply::Prompt { text } => text,
            EngineReply::Recommendation { text, .. } => text.as_str(),
        }
    }
}

/// Applies one user turn to `state`.
///
/// The step moves forward by exactly one until it reaches [`Step::Done`];
/// after that the state is left untouched and the recommendation is repeated.
pub fn advance(state: &mut ConversationState, input: &str) -> EngineReply {
    match state.step {
        Step::Symptoms => {
            state.symptoms = split_symptoms(input);
            state.step = state.step.next();
            EngineReply::Prompt {
                text: DURATION_PROMPT,
            }
        }
        Step::Duration => {
            state.duration = input.to_string();
            state.step = state.step.next();
            EngineReply::Prompt {
                text: SEVERITY_PROMPT,
            }
        }
        Step::Severity => {
            state.severity_raw = input.to_string();
            state.severity_label = format!("{input}/10");
            state.severity_score = parse_severity(input);
            state.step = state.step.next();
            EngineReply::Prompt { text: NOTES_PROMPT }
        }
        Step::Notes => {
            state.notes = input.to_string();
            let pathway = Pathway::from_score(state.severity_score);
            state.pathway = Some(pathway);
            state.step = state.step.next();
            recommendation(pathway)
        }
        Step::Done => {
            let pathway = state
                .pathway
                .unwrap_or_else(|| Pathway::from_score(state.severity_score));
            recommendation(pathway)
        }
    }
}

fn recommendation(pathway: Pathway) -> EngineReply {
    EngineReply::Recommendation {
        pathway,
        text: pathway.recommendation_reply(),
        show_doctors: pathway.surfaces_doctors(),
    }
}

/// Splits a comma-separated symptom list, trimming each entry.
/// Empty entries are kept in place.
pub fn split_symptoms(input: &str) -> Vec<String> {
    input.split(',').map(|s| s.trim().to_string()).collect()
}

/// Reads the leading integer of the severity text and clamps it to `0..=10`.
///
/// Leading whitespace and a sign are accepted, anything after the digits is
/// ignored (`"6/10"` reads as 6). Text with no leading digits scores 0.
pub fn parse_severity(raw: &str) -> u8 {
    leading_integer(raw).map_or(0, |n| n.clamp(0, 10) as u8)
}

fn leading_integer(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        seen = true;
        value = value.saturating_mul(10).saturating_add(i64::from(d));
    }

    seen.then_some(if negative { -value } else { value })
}
