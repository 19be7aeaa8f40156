//! crates/cura_core/src/summary.rs
//!
//! Formats the collected conversation into the plain-text report a user can
//! copy or download for their doctor.

use chrono::NaiveDate;

use crate::domain::ConversationState;

/// Renders the report. Sections always come in the same order and no field
/// is escaped or truncated.
pub fn format_report(
    state: &ConversationState,
    assistant_name: &str,
    generated_on: NaiveDate,
) -> String {
    let pathway = state.pathway.map_or("", |p| p.description());

    format!(
        "PATIENT SYMPTOM SUMMARY

Symptoms Reported:
• {symptoms}

Duration: {duration}
Severity Rating: {severity}

Care Pathway Recommended:
{pathway}

Additional Notes:
{notes}

Generated by {assistant_name} Health Assistant
Date: {date}",
        symptoms = state.symptoms.join("\n• "),
        duration = state.duration,
        severity = state.severity_label,
        notes = state.notes,
        date = generated_on.format("%-m/%-d/%Y"),
    )
    .trim()
    .to_string()
}

/// The file name used when the report is downloaded.
pub fn report_file_name(assistant_name: &str, generated_on: NaiveDate) -> String {
    format!(
        "{assistant_name}-health-summary-{}.txt",
        generated_on.format("%Y-%m-%d")
    )
}
