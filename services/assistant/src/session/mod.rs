pub mod chat;
pub mod protocol;
pub mod reply_task;
pub mod state;

// Re-export the session controller and its event type so the presentation
// layer only needs one import path.
pub use chat::ChatSession;
pub use protocol::SessionEvent;
pub use state::AppState;
