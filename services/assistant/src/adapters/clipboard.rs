//! services/assistant/src/adapters/clipboard.rs
//!
//! An in-process clipboard implementing the `ClipboardService` port. The
//! presentation layer reads back whatever was last copied.

use async_trait::async_trait;
use cura_core::ports::{ClipboardService, PortError, PortResult};
use tokio::sync::Mutex;

/// Holds the most recently copied text.
#[derive(Default)]
pub struct MemoryClipboard {
    contents: Mutex<Option<String>>,
    /// When set, every write fails, as a browser does without clipboard permission.
    denied: bool,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that refuses every write.
    pub fn denied() -> Self {
        Self {
            contents: Mutex::new(None),
            denied: true,
        }
    }

    pub async fn contents(&self) -> Option<String> {
        self.contents.lock().await.clone()
    }
}

#[async_trait]
impl ClipboardService for MemoryClipboard {
    async fn write_text(&self, text: &str) -> PortResult<()> {
        if self.denied {
            return Err(PortError::ClipboardUnavailable(
                "write permission denied".to_string(),
            ));
        }
        *self.contents.lock().await = Some(text.to_string());
        Ok(())
    }
}
