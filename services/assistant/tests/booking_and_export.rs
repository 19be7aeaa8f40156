//! Booking flow and summary export through a live chat session.

use assistant_lib::{
    adapters::{FileReportAdapter, MemoryClipboard},
    config::Config,
    error::AssistantError,
    session::{AppState, ChatSession, SessionEvent},
};
use chrono::NaiveDate;
use cura_core::{Author, BookingRecord, ClipboardService, NoticeLevel, ReportStore};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

const DELAY: Duration = Duration::from_millis(1000);

struct Harness {
    session: ChatSession,
    events: tokio::sync::mpsc::UnboundedReceiver<SessionEvent>,
    clipboard: Arc<MemoryClipboard>,
    export_dir: TempDir,
}

fn harness(clipboard: MemoryClipboard) -> Harness {
    let export_dir = tempfile::tempdir().unwrap();
    let clipboard = Arc::new(clipboard);
    let config = Config {
        reply_delay: DELAY,
        export_dir: export_dir.path().to_path_buf(),
        ..Config::default()
    };
    let app_state = Arc::new(AppState {
        reports: Arc::new(FileReportAdapter::new(config.export_dir.clone())) as Arc<dyn ReportStore>,
        clipboard: clipboard.clone() as Arc<dyn ClipboardService>,
        config: Arc::new(config),
    });
    let (session, events) = ChatSession::start(app_state);
    Harness {
        session,
        events,
        clipboard,
        export_dir,
    }
}

async fn complete_conversation(session: &ChatSession) {
    converse(session, &["headache, fever", "2 days", "6", "no other symptoms"]).await;
}

async fn converse(session: &ChatSession, turns: &[&str]) {
    for turn in turns {
        session.send(turn).await;
        tokio::time::sleep(DELAY + Duration::from_millis(10)).await;
    }
}

fn new_year() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

#[tokio::test(start_paused = true)]
async fn booking_appends_a_confirmation_immediately() {
    let mut h = harness(MemoryClipboard::new());
    complete_conversation(&h.session).await;

    let doctor = h.session.select_doctor("2").await.expect("doctor 2 exists");
    assert_eq!(doctor.name, "Dr. Michael Rodriguez");

    let record = h
        .session
        .confirm_booking(Some(new_year()), Some("10:00 AM"))
        .await
        .expect("booking succeeds");
    assert_eq!(
        record,
        BookingRecord {
            doctor_id: "2".to_string(),
            date: new_year(),
            time_slot: "10:00 AM".to_string(),
        }
    );
    assert_eq!(h.session.booking().await, Some(record.clone()));

    let last = h.session.transcript().await.pop().unwrap();
    assert_eq!(last.author, Author::Assistant);
    assert!(last.text.contains("Dr. Michael Rodriguez"));
    assert!(last.text.contains("Monday, January 1, 2024 at 10:00 AM"));

    let mut saw_confirmation = false;
    let mut saw_notice = false;
    while let Ok(event) = h.events.try_recv() {
        match event {
            SessionEvent::BookingConfirmed { booking } => {
                assert_eq!(booking, record);
                saw_confirmation = true;
            }
            SessionEvent::Notice { notice } if notice.title == "Appointment Booked!" => {
                saw_notice = true;
            }
            _ => {}
        }
    }
    assert!(saw_confirmation && saw_notice);
}

#[tokio::test(start_paused = true)]
async fn unknown_doctor_keeps_the_dialog_closed() {
    let h = harness(MemoryClipboard::new());
    complete_conversation(&h.session).await;
    let before = h.session.transcript().await.len();
    assert!(h.session.select_doctor("7").await.is_none());
    assert!(h
        .session
        .confirm_booking(Some(new_year()), Some("10:00 AM"))
        .await
        .is_none());
    assert_eq!(h.session.transcript().await.len(), before);
}

#[tokio::test(start_paused = true)]
async fn incomplete_booking_is_a_no_op() {
    let h = harness(MemoryClipboard::new());
    complete_conversation(&h.session).await;
    assert!(h.session.select_doctor("1").await.is_some());

    assert!(h.session.confirm_booking(None, Some("09:00 AM")).await.is_none());
    assert!(h.session.confirm_booking(Some(new_year()), None).await.is_none());
    assert!(h.session.booking().await.is_none());

    h.session.dismiss_booking().await;
    assert!(h
        .session
        .confirm_booking(Some(new_year()), Some("09:00 AM"))
        .await
        .is_none());
}

#[tokio::test(start_paused = true)]
async fn summary_is_refused_before_the_conversation_ends() {
    let h = harness(MemoryClipboard::new());
    assert!(matches!(
        h.session.copy_summary().await,
        Err(AssistantError::SummaryNotReady)
    ));
    assert!(h.clipboard.contents().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn copy_puts_the_report_on_the_clipboard() {
    let h = harness(MemoryClipboard::new());
    complete_conversation(&h.session).await;

    let notice = h.session.copy_summary().await.unwrap();
    assert_eq!(notice.level, NoticeLevel::Info);
    assert_eq!(notice.title, "Copied to clipboard");

    let copied = h.clipboard.contents().await.unwrap();
    assert_eq!(copied, h.session.summary().await.unwrap());
    assert!(copied.starts_with("PATIENT SYMPTOM SUMMARY"));
    assert!(copied.contains("• headache\n• fever"));
    assert!(copied.contains("Severity Rating: 6/10"));
}

#[tokio::test(start_paused = true)]
async fn clipboard_failure_becomes_a_destructive_notice() {
    let h = harness(MemoryClipboard::denied());
    complete_conversation(&h.session).await;

    let notice = h.session.copy_summary().await.unwrap();
    assert_eq!(notice.level, NoticeLevel::Destructive);
    assert_eq!(notice.title, "Copy failed");
}

#[tokio::test(start_paused = true)]
async fn download_writes_a_text_file() {
    let h = harness(MemoryClipboard::new());
    complete_conversation(&h.session).await;

    let path = h.session.download_summary().await.unwrap();
    assert!(path.starts_with(h.export_dir.path()));
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("Cura-health-summary-"));
    assert!(name.ends_with(".txt"));

    let written = tokio::fs::read_to_string(&path).await.unwrap();
    assert_eq!(written, h.session.summary().await.unwrap());
}

#[tokio::test]
async fn file_adapter_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("a").join("b");
    let adapter = FileReportAdapter::new(nested.clone());

    let path = adapter.save_report("report.txt", "hello").await.unwrap();
    assert_eq!(path, nested.join("report.txt"));
    assert_eq!(tokio::fs::read_to_string(path).await.unwrap(), "hello");
}

#[tokio::test(start_paused = true)]
async fn doctors_cannot_be_booked_under_emergency_care() {
    let h = harness(MemoryClipboard::new());
    converse(&h.session, &["chest pain", "1 hour", "9", "none"]).await;
    assert!(h.session.doctors().await.is_none());

    assert!(h.session.select_doctor("1").await.is_none());
    assert!(h
        .session
        .confirm_booking(Some(new_year()), Some("10:00 AM"))
        .await
        .is_none());
    assert!(h.session.booking().await.is_none());
}

#[tokio::test(start_paused = true)]
async fn doctors_cannot_be_booked_before_the_recommendation() {
    let h = harness(MemoryClipboard::new());
    converse(&h.session, &["cough", "2 days", "6"]).await;
    h.session.send("nothing else").await;

    // The pathway is fixed but the reply listing the doctors has not arrived.
    assert!(h.session.select_doctor("2").await.is_none());

    tokio::time::sleep(DELAY + Duration::from_millis(10)).await;
    assert!(h.session.select_doctor("2").await.is_some());
}

#[tokio::test(start_paused = true)]
async fn closed_session_ignores_booking_and_export() {
    let mut h = harness(MemoryClipboard::new());
    complete_conversation(&h.session).await;
    h.session.select_doctor("2").await;
    h.session.close().await;
    while let Ok(event) = h.events.try_recv() {
        if event == SessionEvent::SessionClosed {
            break;
        }
    }
    let transcript_len = h.session.transcript().await.len();

    assert!(h.session.select_doctor("1").await.is_none());
    assert!(h
        .session
        .confirm_booking(Some(new_year()), Some("10:00 AM"))
        .await
        .is_none());
    assert!(matches!(
        h.session.copy_summary().await,
        Err(AssistantError::SessionClosed)
    ));
    assert!(matches!(
        h.session.download_summary().await,
        Err(AssistantError::SessionClosed)
    ));

    assert!(h.session.booking().await.is_none());
    assert_eq!(h.session.transcript().await.len(), transcript_len);
    assert!(h.clipboard.contents().await.is_none());
    assert!(h.events.try_recv().is_err());
}
