//! services/assistant/src/error.rs
//!
//! Defines the primary error type for the assistant service.

use crate::config::ConfigError;
use cura_core::ports::PortError;

/// The primary error type for the `assistant` service.
#[derive(Debug, thiserror::Error)]
pub enum AssistantError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents an error that propagated up from one of the core service ports.
    #[error("Service Port Error: {0}")]
    Port(#[from] PortError),

    /// The summary was requested before the recommendation was shown.
    #[error("The summary is not available until the conversation is complete")]
    SummaryNotReady,

    /// The session was closed before the request arrived.
    #[error("The chat session is closed")]
    SessionClosed,

    /// A catch-all for any other unexpected errors.
    #[error("An unexpected internal error occurred: {0}")]
    Internal(String),
}
