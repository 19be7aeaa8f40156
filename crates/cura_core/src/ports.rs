//! crates/cura_core/src/ports.rs
//!
//! Defines the service contracts (traits) the core needs from the outside world.
//! These traits form the boundary of the hexagonal architecture: the core only
//! produces report text, the adapters decide where it goes.

use async_trait::async_trait;
use std::path::PathBuf;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    #[error("The clipboard is unavailable: {0}")]
    ClipboardUnavailable(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait ClipboardService: Send + Sync {
    /// Replaces the clipboard contents with `text`.
    async fn write_text(&self, text: &str) -> PortResult<()>;
}

#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Saves a plain-text report under `file_name` and returns where it landed.
    async fn save_report(&self, file_name: &str, contents: &str) -> PortResult<PathBuf>;
}
