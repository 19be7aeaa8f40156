//! services/assistant/src/adapters/report_file.rs
//!
//! This module contains the adapter that "downloads" a summary by writing it
//! as a plain-text file. It implements the `ReportStore` port from the core crate.

use async_trait::async_trait;
use cura_core::ports::{PortError, PortResult, ReportStore};
use std::path::PathBuf;
use tracing::info;

/// Writes reports into a single export directory.
#[derive(Clone, Debug)]
pub struct FileReportAdapter {
    export_dir: PathBuf,
}

impl FileReportAdapter {
    /// Creates a new `FileReportAdapter`. The directory is created on first save.
    pub fn new(export_dir: PathBuf) -> Self {
        Self { export_dir }
    }
}

#[async_trait]
impl ReportStore for FileReportAdapter {
    async fn save_report(&self, file_name: &str, contents: &str) -> PortResult<PathBuf> {
        tokio::fs::create_dir_all(&self.export_dir)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // A later download on the same day replaces the earlier file.
        let path = self.export_dir.join(file_name);
        tokio::fs::write(&path, contents)
            .await
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        info!("Summary written to {}", path.display());
        Ok(path)
    }
}
