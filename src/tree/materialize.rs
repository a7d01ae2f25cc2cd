//! Recursive materialization of a project's record graph onto disk.

use crate::config::TransportFailurePolicy;
use crate::content::{ContentRealizer, Realized};
use crate::error::ApiError;
use crate::tree::index::IdIndex;
use crate::tree::node::{FileKind, FileRecord, Project};
use crate::tree::root::locate_root;
use crate::tree::validation::validate_project;
use crate::types::FileId;
use serde::Serialize;
use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A node that was skipped without aborting its project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedNode {
    pub path: PathBuf,
    pub reason: String,
}

/// What one project's walk produced.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProjectReport {
    pub project_id: String,
    pub project_name: String,
    pub project_dir: PathBuf,
    pub root_missing: bool,
    /// Folders ensured beneath the project directory
    pub folders: usize,
    pub inline_files: usize,
    pub downloads: usize,
    pub skipped: Vec<SkippedNode>,
    pub dangling_ids: Vec<FileId>,
    pub warnings: Vec<String>,
}

impl ProjectReport {
    fn new(project: &Project, project_dir: &Path) -> Self {
        Self {
            project_id: project.id.clone(),
            project_name: project.name.clone(),
            project_dir: project_dir.to_path_buf(),
            ..Default::default()
        }
    }

    /// Report for a project that was not materialized at all.
    pub fn rejected(project: &Project, project_dir: &Path, reason: String) -> Self {
        let mut report = Self::new(project, project_dir);
        report.skip(project_dir.to_path_buf(), reason);
        report
    }

    pub fn files_written(&self) -> usize {
        self.inline_files + self.downloads
    }

    fn skip(&mut self, path: PathBuf, reason: String) {
        self.skipped.push(SkippedNode { path, reason });
    }
}

/// `parent + "/" + name` without normalization.
///
/// Unlike [`Path::join`], an absolute or empty `name` stays beneath
/// `parent`; the resulting path is whatever the literal concatenation says.
pub fn join_literal(parent: &Path, name: &str) -> PathBuf {
    let mut joined = OsString::from(parent.as_os_str());
    joined.push("/");
    joined.push(name);
    PathBuf::from(joined)
}

struct Walk<'a> {
    index: IdIndex<'a>,
    /// Ids already materialized in this project
    visited: HashSet<&'a str>,
    /// Records waiting to be materialized, with the directory they belong in
    pending: Vec<(&'a FileRecord, PathBuf)>,
    report: ProjectReport,
}

/// Walks a project's record graph and realizes it beneath a directory.
pub struct TreeMaterializer<'c> {
    realizer: ContentRealizer<'c>,
    transport_policy: TransportFailurePolicy,
}

impl<'c> TreeMaterializer<'c> {
    pub fn new(realizer: ContentRealizer<'c>, transport_policy: TransportFailurePolicy) -> Self {
        Self {
            realizer,
            transport_policy,
        }
    }

    /// Materialize `project` into `project_dir`.
    ///
    /// Only a failure to create `project_dir` itself, or a transport failure
    /// under [`TransportFailurePolicy::Abort`], is returned as an error.
    pub fn materialize_project(
        &self,
        project: &Project,
        project_dir: &Path,
    ) -> Result<ProjectReport, ApiError> {
        std::fs::create_dir_all(project_dir)
            .map_err(|e| ApiError::io("Failed to create project directory", project_dir, e))?;

        let index = IdIndex::build(project);
        let validation = validate_project(project, &index);
        for warning in &validation.warnings {
            warn!(project = project.id.as_str(), "{}", warning);
        }

        let mut walk = Walk {
            index,
            visited: HashSet::new(),
            pending: Vec::new(),
            report: ProjectReport::new(project, project_dir),
        };
        walk.report.warnings = validation.warnings;

        match locate_root(project) {
            Some(root) => self.materialize(root, project_dir, &mut walk)?,
            None => walk.report.root_missing = true,
        }

        info!(
            project = project.id.as_str(),
            folders = walk.report.folders,
            files = walk.report.files_written(),
            skipped = walk.report.skipped.len(),
            "project materialized"
        );
        Ok(walk.report)
    }

    /// Depth-first walk from `record`, children in list order.
    ///
    /// Uses an explicit work stack so deep folder chains cannot exhaust the
    /// call stack; each id is materialized at most once per project.
    fn materialize<'a>(
        &self,
        record: &'a FileRecord,
        current_path: &Path,
        walk: &mut Walk<'a>,
    ) -> Result<(), ApiError> {
        walk.pending.push((record, current_path.to_path_buf()));
        while let Some((record, current_path)) = walk.pending.pop() {
            if !walk.visited.insert(record.id.as_str()) {
                let message = format!(
                    "Record '{}' is referenced more than once; materialized only the first time",
                    record.id
                );
                warn!("{}", message);
                walk.report.warnings.push(message);
                continue;
            }
            match &record.kind {
                FileKind::Folder { children } => {
                    self.materialize_folder(record, children, &current_path, walk)
                }
                FileKind::InlineFile { .. } | FileKind::RemoteFile { .. } => {
                    self.materialize_file(record, &current_path, walk)?
                }
            }
        }
        Ok(())
    }

    /// Ensure the folder's directory and queue its resolvable children.
    fn materialize_folder<'a>(
        &self,
        record: &'a FileRecord,
        children: &'a [FileId],
        current_path: &Path,
        walk: &mut Walk<'a>,
    ) {
        let target = if record.is_root_marker() {
            current_path.to_path_buf()
        } else {
            join_literal(current_path, &record.name)
        };

        if !record.is_root_marker() {
            if let Err(e) = std::fs::create_dir_all(&target) {
                warn!(path = %target.display(), error = %e, "failed to create folder");
                walk.report
                    .skip(target, format!("Failed to create directory: {}", e));
                return;
            }
            walk.report.folders += 1;
        }
        debug!(path = %target.display(), children = children.len(), "folder ready");

        let mut resolved = Vec::with_capacity(children.len());
        for child_id in children {
            match walk.index.get(child_id) {
                Some(child) => resolved.push(child),
                None => {
                    warn!(
                        folder = record.id.as_str(),
                        child = child_id.as_str(),
                        "child id not found; skipping"
                    );
                    walk.report.dangling_ids.push(child_id.clone());
                }
            }
        }
        for child in resolved.into_iter().rev() {
            walk.pending.push((child, target.clone()));
        }
    }

    fn materialize_file(
        &self,
        record: &FileRecord,
        current_path: &Path,
        walk: &mut Walk<'_>,
    ) -> Result<(), ApiError> {
        let filename = join_literal(current_path, &record.name);
        match self.realizer.realize(&filename, record) {
            Ok(Realized::Written { .. }) => walk.report.inline_files += 1,
            Ok(Realized::Downloaded { .. }) => walk.report.downloads += 1,
            Ok(Realized::Rejected { status }) => {
                walk.report.skip(filename, format!("HTTP status {}", status));
            }
            Err(err @ ApiError::Transport { .. }) => {
                if self.transport_policy == TransportFailurePolicy::Abort {
                    return Err(err);
                }
                warn!(path = %filename.display(), error = %err, "download failed; skipping");
                walk.report.skip(filename, err.to_string());
            }
            Err(err) => {
                warn!(path = %filename.display(), error = %err, "failed to realize file");
                walk.report.skip(filename, err.to_string());
            }
        }
        Ok(())
    }
}
