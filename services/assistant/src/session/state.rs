//! services/assistant/src/session/state.rs
//!
//! Defines the application's shared and session-specific states.

use crate::config::Config;
use cura_core::{
    engine::greeting, BookingRecord, ClipboardService, ConversationState, DoctorRecord, Message,
    ReportStore,
};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

//=========================================================================================
// AppState (Shared Across All Sessions)
//=========================================================================================

/// The shared application state, created once at startup and handed to every session.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub clipboard: Arc<dyn ClipboardService>,
    pub reports: Arc<dyn ReportStore>,
}

//=========================================================================================
// SessionState (Specific to One Conversation)
//=========================================================================================

/// The state for a single chat session. Only the owning `ChatSession` and its
/// reply task ever touch it, always through the same lock.
pub struct SessionState {
    pub session_id: Uuid,
    pub conversation: ConversationState,
    /// Append-only.
    pub transcript: Vec<Message>,
    /// Set once the final recommendation has actually been shown.
    pub recommendation_shown: bool,
    /// The doctor whose booking dialog is open.
    pub selected_doctor: Option<&'static DoctorRecord>,
    pub booking: Option<BookingRecord>,
    pub closed: bool,
    /// Cancels the reply that is currently pending, if any.
    pub reply_token: CancellationToken,
    pub reply_task: Option<JoinHandle<()>>,
}

impl SessionState {
    /// Creates a fresh session whose transcript holds only the greeting.
    pub fn new(assistant_name: &str, reply_token: CancellationToken) -> Self {
        Self {
            session_id: Uuid::new_v4(),
            conversation: ConversationState::new(),
            transcript: vec![Message::assistant(greeting(assistant_name))],
            recommendation_shown: false,
            selected_doctor: None,
            booking: None,
            closed: false,
            reply_token,
            reply_task: None,
        }
    }
}
