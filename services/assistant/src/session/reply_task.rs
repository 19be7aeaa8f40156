//! services/assistant/src/session/reply_task.rs
//!
//! This module contains the deferred "worker" that delivers one scripted
//! assistant reply after the simulated thinking delay.

use crate::session::{protocol::SessionEvent, state::SessionState};
use cura_core::{list_doctors, EngineReply, Message};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc::UnboundedSender, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Waits `delay`, then appends the reply to the transcript and notifies the
/// presentation layer.
///
/// A cancelled token turns the whole task into a no-op. This is how a newer
/// turn supersedes a pending reply and how session teardown discards one.
pub async fn deliver_reply(
    session_state_lock: Arc<Mutex<SessionState>>,
    events: UnboundedSender<SessionEvent>,
    reply: EngineReply,
    delay: Duration,
    cancellation_token: CancellationToken,
) {
    tokio::select! {
        _ = cancellation_token.cancelled() => {
            debug!("Pending reply cancelled before delivery.");
            return;
        }
        _ = tokio::time::sleep(delay) => {}
    }

    let mut session = session_state_lock.lock().await;
    // A send or close may have won the lock between the timer and here.
    if cancellation_token.is_cancelled() || session.closed {
        debug!("Pending reply cancelled while waiting for the session lock.");
        return;
    }

    let message = Message::assistant(reply.text());
    session.transcript.push(message.clone());
    emit(&events, SessionEvent::MessageAppended { message });

    if let EngineReply::Recommendation {
        pathway,
        show_doctors,
        ..
    } = reply
    {
        info!(
            "Session {} recommended '{}'.",
            session.session_id,
            pathway.label()
        );
        session.recommendation_shown = true;
        emit(
            &events,
            SessionEvent::RecommendationReady {
                pathway,
                show_doctors,
            },
        );
        if show_doctors {
            emit(
                &events,
                SessionEvent::DoctorsListed {
                    doctors: list_doctors().to_vec(),
                },
            );
        }
    }
}

/// Sends an event, logging instead of failing when nobody is listening.
pub(crate) fn emit(events: &UnboundedSender<SessionEvent>, event: SessionEvent) {
    if events.send(event).is_err() {
        warn!("Session event dropped: the presentation layer has gone away.");
    }
}
