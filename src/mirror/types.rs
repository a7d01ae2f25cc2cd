//! Request and summary types for a mirror run.

use crate::tree::ProjectReport;
use serde::Serialize;
use std::path::PathBuf;

/// Parameters for one run.
#[derive(Debug, Clone)]
pub struct MirrorRequest {
    pub username: String,
    /// Re-fetch the listing even when a cached snapshot exists
    pub refresh: bool,
}

impl MirrorRequest {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            refresh: false,
        }
    }
}

/// Aggregated result of a run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub username: String,
    pub user_dir: PathBuf,
    pub index_path: PathBuf,
    pub projects: Vec<ProjectReport>,
}

impl RunSummary {
    pub fn total_folders(&self) -> usize {
        self.projects.iter().map(|p| p.folders).sum()
    }

    pub fn total_files(&self) -> usize {
        self.projects.iter().map(|p| p.files_written()).sum()
    }

    pub fn total_skipped(&self) -> usize {
        self.projects.iter().map(|p| p.skipped.len()).sum()
    }

    pub fn projects_without_root(&self) -> usize {
        self.projects.iter().filter(|p| p.root_missing).count()
    }
}
