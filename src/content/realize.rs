//! Leaf realization: write inline content or download remote content.

use crate::content::client::{Download, RemoteClient};
use crate::error::ApiError;
use crate::progress::ProgressReporter;
use crate::tree::node::{FileKind, FileRecord};
use std::path::Path;

/// Outcome of realizing one file record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Realized {
    Written { bytes: u64 },
    Downloaded { bytes: u64 },
    /// Download answered with a non-success status; no file was created.
    Rejected { status: u16 },
}

pub struct ContentRealizer<'c> {
    client: &'c dyn RemoteClient,
    progress: &'c dyn ProgressReporter,
}

impl<'c> ContentRealizer<'c> {
    pub fn new(client: &'c dyn RemoteClient, progress: &'c dyn ProgressReporter) -> Self {
        Self { client, progress }
    }

    /// Realize `record` at `filename`.
    ///
    /// Errors are file-scoped; the caller decides whether they abort the run.
    pub fn realize(&self, filename: &Path, record: &FileRecord) -> Result<Realized, ApiError> {
        match &record.kind {
            FileKind::InlineFile { content } => {
                std::fs::write(filename, content.as_bytes())
                    .map_err(|e| ApiError::io("Failed to write file", filename, e))?;
                Ok(Realized::Written {
                    bytes: content.len() as u64,
                })
            }
            FileKind::RemoteFile { url } => {
                self.progress.download_started(url, &record.name);
                match self.client.download_to(url, filename)? {
                    Download::Saved { bytes } => Ok(Realized::Downloaded { bytes }),
                    Download::Rejected { status } => {
                        self.progress.download_rejected(status, filename);
                        tracing::warn!(
                            url = url.as_str(),
                            status,
                            file = %filename.display(),
                            "download rejected"
                        );
                        Ok(Realized::Rejected { status })
                    }
                }
            }
            FileKind::Folder { .. } => Err(ApiError::Usage(format!(
                "Record '{}' is a folder, not a file",
                record.id
            ))),
        }
    }
}
