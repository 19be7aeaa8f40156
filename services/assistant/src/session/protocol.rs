//! services/assistant/src/session/protocol.rs
//!
//! Defines the events a chat session pushes to the presentation layer.

use cura_core::{BookingRecord, DoctorRecord, Message, Notice, Pathway};
use serde::Serialize;

/// Everything the presentation layer needs to redraw after a session change.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionEvent {
    /// A message was appended to the transcript.
    MessageAppended { message: Message },

    /// A user turn was accepted and an assistant reply is on its way.
    /// The UI can show a typing indicator until the next assistant message.
    ReplyPending,

    /// The conversation is complete. The summary can now be generated.
    RecommendationReady { pathway: Pathway, show_doctors: bool },

    /// The nearby-doctor listing should be shown.
    DoctorsListed { doctors: Vec<DoctorRecord> },

    /// The booking dialog was opened for a doctor.
    BookingOpened { doctor: DoctorRecord },

    /// An appointment was booked.
    BookingConfirmed { booking: BookingRecord },

    /// A toast notification.
    Notice { notice: Notice },

    /// The session was torn down; no further events follow.
    SessionClosed,
}
