//! services/assistant/src/bin/demo.rs
//!
//! Plays one scripted conversation through a chat session and prints every
//! event the presentation layer would receive, as JSON lines.

use assistant_lib::{
    adapters::{FileReportAdapter, MemoryClipboard},
    config::Config,
    error::AssistantError,
    session::{AppState, ChatSession, SessionEvent},
};
use chrono::{Duration, Local};
use cura_core::booking::TIME_SLOTS;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SCRIPT: [&str; 4] = ["headache, fever", "2 days", "6", "no other symptoms"];

#[tokio::main]
async fn main() -> Result<(), AssistantError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting walkthrough...");

    // --- 2. Build the Shared AppState ---
    let app_state = Arc::new(AppState {
        config: config.clone(),
        clipboard: Arc::new(MemoryClipboard::new()),
        reports: Arc::new(FileReportAdapter::new(config.export_dir.clone())),
    });

    // --- 3. Run the Conversation ---
    let (session, mut events) = ChatSession::start(app_state);
    while let Ok(event) = events.try_recv() {
        print_event(&event)?;
    }
    for turn in SCRIPT {
        session.send(turn).await;
        // Wait for the assistant before typing the next answer.
        loop {
            let Some(event) = events.recv().await else {
                return Err(AssistantError::Internal(
                    "session event channel closed".to_string(),
                ));
            };
            print_event(&event)?;
            if is_assistant_message(&event) {
                break;
            }
        }
    }

    // --- 4. Book the First Listed Doctor & Export the Summary ---
    let doctors = session.doctors().await.ok_or_else(|| {
        AssistantError::Internal("the scripted pathway should list doctors".to_string())
    })?;
    session.select_doctor(doctors[0].id).await;
    let tomorrow = Local::now().date_naive() + Duration::days(1);
    session
        .confirm_booking(Some(tomorrow), Some(TIME_SLOTS[1]))
        .await;

    session.copy_summary().await?;
    let path = session.download_summary().await?;
    info!("Summary saved to {}", path.display());

    session.close().await;
    while let Ok(event) = events.try_recv() {
        print_event(&event)?;
    }

    println!("\n{}", session.summary().await?);
    Ok(())
}

fn is_assistant_message(event: &SessionEvent) -> bool {
    matches!(
        event,
        SessionEvent::MessageAppended { message } if message.author == cura_core::Author::Assistant
    )
}

fn print_event(event: &SessionEvent) -> Result<(), AssistantError> {
    let json =
        serde_json::to_string(event).map_err(|e| AssistantError::Internal(e.to_string()))?;
    println!("{json}");
    Ok(())
}
