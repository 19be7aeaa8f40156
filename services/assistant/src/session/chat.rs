//! services/assistant/src/session/chat.rs
//!
//! The controller for one chat session. It owns the session state, runs the
//! conversation engine on every user turn, schedules the deferred reply and
//! drives the booking and export flows.

use crate::{
    error::AssistantError,
    session::{
        protocol::SessionEvent,
        reply_task::{deliver_reply, emit},
        state::{AppState, SessionState},
    },
};
use chrono::{Local, NaiveDate};
use cura_core::{
    advance, book, find_doctor, format_report, list_doctors, pathway, report_file_name,
    BookingRecord, ConversationState, DoctorRecord, Message, Notice,
};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::{
    mpsc::{self, UnboundedReceiver, UnboundedSender},
    Mutex,
};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// A live conversation between one user and the scripted assistant.
///
/// Dropping the session cancels any reply still pending.
pub struct ChatSession {
    app_state: Arc<AppState>,
    session_state_lock: Arc<Mutex<SessionState>>,
    events: UnboundedSender<SessionEvent>,
    /// Parent of every per-reply token.
    shutdown: CancellationToken,
}

impl ChatSession {
    /// Opens a session. The greeting is already in the transcript and is the
    /// first event on the returned receiver.
    pub fn start(app_state: Arc<AppState>) -> (Self, UnboundedReceiver<SessionEvent>) {
        let (events, receiver) = mpsc::unbounded_channel();
        let shutdown = CancellationToken::new();
        let state = SessionState::new(&app_state.config.assistant_name, shutdown.child_token());

        info!("Chat session {} started.", state.session_id);
        for message in &state.transcript {
            emit(
                &events,
                SessionEvent::MessageAppended {
                    message: message.clone(),
                },
            );
        }

        let session = Self {
            app_state,
            session_state_lock: Arc::new(Mutex::new(state)),
            events,
            shutdown,
        };
        (session, receiver)
    }

    pub async fn session_id(&self) -> Uuid {
        self.session_state_lock.lock().await.session_id
    }

    /// Handles one user turn.
    ///
    /// Returns `false` when the text is blank or the session is closed; nothing
    /// happens in either case. Otherwise the user message is appended, the
    /// conversation advances immediately and the assistant reply is scheduled.
    /// A reply still pending from an earlier turn is cancelled, so a burst of
    /// sends yields only the reply to the last one.
    pub async fn send(&self, text: &str) -> bool {
        if text.trim().is_empty() {
            debug!("Ignoring blank message.");
            return false;
        }

        let mut session = self.session_state_lock.lock().await;
        if session.closed {
            warn!("Message sent to closed session {}.", session.session_id);
            return false;
        }

        let message = Message::user(text);
        session.transcript.push(message.clone());
        emit(&self.events, SessionEvent::MessageAppended { message });

        let step_before = session.conversation.step;
        let reply = advance(&mut session.conversation, text);
        info!(
            "Session {} turn processed: step {} -> {}.",
            session.session_id,
            step_before.index(),
            session.conversation.step.index()
        );

        if session.reply_task.as_ref().is_some_and(|t| !t.is_finished()) {
            debug!("Superseding the pending reply.");
        }
        session.reply_token.cancel();
        session.reply_token = self.shutdown.child_token();

        let task = {
            let session_state_lock = self.session_state_lock.clone();
            let events = self.events.clone();
            let delay = self.app_state.config.reply_delay;
            let token = session.reply_token.clone();
            tokio::spawn(deliver_reply(
                session_state_lock,
                events,
                reply,
                delay,
                token,
            ))
        };
        session.reply_task = Some(task);
        emit(&self.events, SessionEvent::ReplyPending);
        true
    }

    pub async fn transcript(&self) -> Vec<Message> {
        self.session_state_lock.lock().await.transcript.clone()
    }

    pub async fn conversation(&self) -> ConversationState {
        self.session_state_lock.lock().await.conversation.clone()
    }

    /// The nearby doctors, once a recommendation naming a doctor, physician or
    /// urgent care has been shown.
    pub async fn doctors(&self) -> Option<&'static [DoctorRecord]> {
        let session = self.session_state_lock.lock().await;
        doctors_listed(&session).then(list_doctors)
    }

    //=====================================================================================
    // Booking
    //=====================================================================================

    /// Opens the booking dialog for a listed doctor.
    ///
    /// A no-op while no doctor listing is shown, for an unknown id, and after
    /// the session is closed.
    pub async fn select_doctor(&self, doctor_id: &str) -> Option<&'static DoctorRecord> {
        let mut session = self.session_state_lock.lock().await;
        if session.closed || !doctors_listed(&session) {
            debug!("No doctor listing is shown; booking dialog stays closed.");
            return None;
        }
        let Some(doctor) = find_doctor(doctor_id) else {
            debug!("No doctor with id '{}'; booking dialog stays closed.", doctor_id);
            return None;
        };

        session.selected_doctor = Some(doctor);
        emit(
            &self.events,
            SessionEvent::BookingOpened {
                doctor: doctor.clone(),
            },
        );
        Some(doctor)
    }

    /// Closes the booking dialog without booking.
    pub async fn dismiss_booking(&self) {
        let mut session = self.session_state_lock.lock().await;
        if !session.closed {
            session.selected_doctor = None;
        }
    }

    /// Books the selected doctor. Without a selected doctor, a date and a time
    /// slot, or once the session is closed, nothing happens and `None` is returned.
    pub async fn confirm_booking(
        &self,
        date: Option<NaiveDate>,
        time_slot: Option<&str>,
    ) -> Option<BookingRecord> {
        let mut session = self.session_state_lock.lock().await;
        if session.closed {
            warn!("Booking attempted on closed session {}.", session.session_id);
            return None;
        }
        let doctor_id = session.selected_doctor.map(|d| d.id);

        let booking = match book(doctor_id, date, time_slot) {
            Ok(booking) => booking,
            Err(e) => {
                debug!("Booking not confirmed: {}", e);
                return None;
            }
        };

        info!(
            "Session {} booked {} on {} at {}.",
            session.session_id, booking.doctor_name, booking.record.date, booking.record.time_slot
        );

        let message = Message::assistant(booking.confirmation);
        session.transcript.push(message.clone());
        session.booking = Some(booking.record.clone());
        session.selected_doctor = None;

        emit(&self.events, SessionEvent::MessageAppended { message });
        emit(
            &self.events,
            SessionEvent::BookingConfirmed {
                booking: booking.record.clone(),
            },
        );
        emit(
            &self.events,
            SessionEvent::Notice {
                notice: booking.notice,
            },
        );
        Some(booking.record)
    }

    pub async fn booking(&self) -> Option<BookingRecord> {
        self.session_state_lock.lock().await.booking.clone()
    }

    //=====================================================================================
    // Summary export
    //=====================================================================================

    /// The doctor-ready summary, available once the recommendation is shown.
    pub async fn summary(&self) -> Result<String, AssistantError> {
        let session = self.session_state_lock.lock().await;
        if !session.recommendation_shown {
            return Err(AssistantError::SummaryNotReady);
        }
        Ok(format_report(
            &session.conversation,
            &self.app_state.config.assistant_name,
            today(),
        ))
    }

    /// Copies the summary to the clipboard. A clipboard failure is reported as
    /// a destructive notice, not as an error, and is not retried.
    pub async fn copy_summary(&self) -> Result<Notice, AssistantError> {
        let report = self.report_for_export().await?;

        let notice = match self.app_state.clipboard.write_text(&report).await {
            Ok(()) => Notice::info(
                "Copied to clipboard",
                "Summary has been copied to your clipboard.",
            ),
            Err(e) => {
                warn!("Clipboard write failed: {}", e);
                Notice::destructive("Copy failed", "Unable to copy to clipboard. Please try again.")
            }
        };

        emit(
            &self.events,
            SessionEvent::Notice {
                notice: notice.clone(),
            },
        );
        Ok(notice)
    }

    /// Saves the summary as a plain-text file and returns its path.
    pub async fn download_summary(&self) -> Result<PathBuf, AssistantError> {
        let report = self.report_for_export().await?;
        let file_name = report_file_name(&self.app_state.config.assistant_name, today());

        let path = self
            .app_state
            .reports
            .save_report(&file_name, &report)
            .await
            .map_err(|e| {
                error!("Failed to save summary: {}", e);
                e
            })?;

        emit(
            &self.events,
            SessionEvent::Notice {
                notice: Notice::info("Summary downloaded", "Your health summary has been downloaded."),
            },
        );
        Ok(path)
    }

    /// The summary, refused once the session is closed so that no export
    /// notice follows `SessionClosed`.
    async fn report_for_export(&self) -> Result<String, AssistantError> {
        if self.session_state_lock.lock().await.closed {
            return Err(AssistantError::SessionClosed);
        }
        self.summary().await
    }

    //=====================================================================================
    // Teardown
    //=====================================================================================

    /// Ends the session. A pending reply is discarded and later sends are ignored.
    pub async fn close(&self) {
        let mut session = self.session_state_lock.lock().await;
        if session.closed {
            return;
        }
        session.closed = true;
        self.shutdown.cancel();
        if let Some(handle) = session.reply_task.take() {
            handle.abort();
        }
        emit(&self.events, SessionEvent::SessionClosed);
        info!("Chat session {} closed.", session.session_id);
    }
}

impl Drop for ChatSession {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

/// Whether the nearby-doctor listing is on screen: the recommendation has been
/// shown and its text names a doctor, physician or urgent care.
fn doctors_listed(session: &SessionState) -> bool {
    session.conversation.is_done()
        && session.recommendation_shown
        && session
            .conversation
            .pathway
            .is_some_and(|p| pathway::surfaces_doctors(p.description()))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
