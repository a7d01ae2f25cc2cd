//! Shared fixtures: an in-memory remote, record builders, progress capture.
#![allow(dead_code)]

use p5mirror::content::{Download, RemoteClient, RemoteResponse};
use p5mirror::progress::ProgressReporter;
use p5mirror::tree::{FileKind, FileRecord, Project};
use p5mirror::ApiError;
use std::cell::RefCell;
use std::collections::{BTreeSet, HashMap};
use std::path::{Path, PathBuf};

#[derive(Clone)]
pub enum Canned {
    Status(u16, Vec<u8>),
    TransportError,
}

/// Remote that answers from a fixed table and records every requested URL.
#[derive(Default)]
pub struct StubClient {
    responses: HashMap<String, Canned>,
    pub requests: RefCell<Vec<String>>,
}

impl StubClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, status: u16, body: &[u8]) -> Self {
        self.responses
            .insert(url.to_string(), Canned::Status(status, body.to_vec()));
        self
    }

    pub fn with_transport_error(mut self, url: &str) -> Self {
        self.responses
            .insert(url.to_string(), Canned::TransportError);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }

    fn lookup(&self, url: &str) -> Result<(u16, Vec<u8>), ApiError> {
        self.requests.borrow_mut().push(url.to_string());
        match self.responses.get(url) {
            Some(Canned::Status(status, body)) => Ok((*status, body.clone())),
            Some(Canned::TransportError) => Err(ApiError::transport(url, "connection refused")),
            None => Ok((404, b"not found".to_vec())),
        }
    }
}

impl RemoteClient for StubClient {
    fn get(&self, url: &str) -> Result<RemoteResponse, ApiError> {
        let (status, body) = self.lookup(url)?;
        Ok(RemoteResponse { status, body })
    }

    fn download_to(&self, url: &str, dest: &Path) -> Result<Download, ApiError> {
        let (status, body) = self.lookup(url)?;
        if !(200..300).contains(&status) {
            return Ok(Download::Rejected { status });
        }
        std::fs::write(dest, &body).map_err(|e| ApiError::io("Failed to write file", dest, e))?;
        Ok(Download::Saved {
            bytes: body.len() as u64,
        })
    }
}

/// Progress sink that keeps every line it is given.
#[derive(Default)]
pub struct RecordingProgress {
    pub lines: RefCell<Vec<String>>,
}

impl ProgressReporter for RecordingProgress {
    fn project_started(&self, position: usize, total: usize, name: &str) {
        self.lines
            .borrow_mut()
            .push(p5mirror::progress::format_project_line(position, total, name));
    }

    fn download_started(&self, url: &str, name: &str) {
        self.lines
            .borrow_mut()
            .push(format!("fetching {} --> {}", url, name));
    }

    fn download_rejected(&self, status: u16, filename: &Path) {
        self.lines
            .borrow_mut()
            .push(format!("status: {} {}", status, filename.display()));
    }

    fn notice(&self, message: &str) {
        self.lines.borrow_mut().push(message.to_string());
    }
}

fn record(id: &str, name: &str, kind: FileKind) -> FileRecord {
    FileRecord {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        created_at: String::new(),
        updated_at: String::new(),
        is_selected_file: false,
    }
}

pub fn folder(id: &str, name: &str, children: &[&str]) -> FileRecord {
    record(
        id,
        name,
        FileKind::Folder {
            children: children.iter().map(|c| c.to_string()).collect(),
        },
    )
}

pub fn inline(id: &str, name: &str, content: &str) -> FileRecord {
    record(
        id,
        name,
        FileKind::InlineFile {
            content: content.to_string(),
        },
    )
}

pub fn remote(id: &str, name: &str, url: &str) -> FileRecord {
    record(
        id,
        name,
        FileKind::RemoteFile {
            url: url.to_string(),
        },
    )
}

pub fn project(id: &str, name: &str, files: Vec<FileRecord>) -> Project {
    Project {
        internal_id: format!("internal-{}", id),
        id: id.to_string(),
        name: name.to_string(),
        created_at: String::new(),
        updated_at: String::new(),
        files,
    }
}

/// Every path under `root`, relative to it, with a trailing `/` on directories.
pub fn tree_snapshot(root: &Path) -> BTreeSet<String> {
    walkdir::WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .map(|entry| entry.unwrap())
        .map(|entry| {
            let rel: PathBuf = entry.path().strip_prefix(root).unwrap().to_path_buf();
            let mut s = rel.to_string_lossy().replace('\\', "/");
            if entry.file_type().is_dir() {
                s.push('/');
            }
            s
        })
        .collect()
}

pub fn set(items: &[&str]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}
