//! Drives a whole run: listing, per-project materialization, index page.

use crate::config::MirrorConfig;
use crate::content::{ContentRealizer, RemoteClient};
use crate::error::ApiError;
use crate::index_page::write_index;
use crate::listing::{decode_listing, ListingSource};
use crate::mirror::types::{MirrorRequest, RunSummary};
use crate::progress::ProgressReporter;
use crate::tree::{join_literal, Project, ProjectReport, TreeMaterializer};
use std::path::PathBuf;
use tracing::{info, warn};

fn is_single_segment(name: &str) -> bool {
    let trimmed = name.trim();
    !(trimmed.is_empty()
        || trimmed == "."
        || trimmed == ".."
        || trimmed.contains('/')
        || trimmed.contains('\\'))
}

/// Reject usernames that would not stay a single path segment.
pub fn validate_username(username: &str) -> Result<(), ApiError> {
    if username.trim().is_empty() {
        return Err(ApiError::Usage("username cannot be empty".to_string()));
    }
    if !is_single_segment(username) {
        return Err(ApiError::Usage(format!(
            "username '{}' is not a valid path segment",
            username
        )));
    }
    Ok(())
}

pub struct MirrorRunner<'a> {
    config: &'a MirrorConfig,
    client: &'a dyn RemoteClient,
    progress: &'a dyn ProgressReporter,
}

impl<'a> MirrorRunner<'a> {
    pub fn new(
        config: &'a MirrorConfig,
        client: &'a dyn RemoteClient,
        progress: &'a dyn ProgressReporter,
    ) -> Self {
        Self {
            config,
            client,
            progress,
        }
    }

    /// `<output_root>/<username>`
    pub fn user_dir(&self, username: &str) -> PathBuf {
        self.config.output_root.join(username)
    }

    /// Load the listing for `request.username` and mirror every project.
    pub fn run(&self, request: &MirrorRequest) -> Result<RunSummary, ApiError> {
        validate_username(&request.username)?;

        let source = ListingSource::new(
            self.client,
            &self.config.editor_base_url,
            &self.config.cache_dir,
        );
        let payload = source.load(&request.username, request.refresh, self.progress)?;
        let projects = decode_listing(&payload)?;
        info!(
            username = request.username.as_str(),
            projects = projects.len(),
            "listing decoded"
        );

        self.mirror_projects(&request.username, &projects)
    }

    /// Materialize already-decoded projects and write the index page.
    pub fn mirror_projects(
        &self,
        username: &str,
        projects: &[Project],
    ) -> Result<RunSummary, ApiError> {
        validate_username(username)?;
        let user_dir = self.user_dir(username);
        std::fs::create_dir_all(&user_dir)
            .map_err(|e| ApiError::io("Failed to create output directory", &user_dir, e))?;

        let realizer = ContentRealizer::new(self.client, self.progress);
        let materializer =
            TreeMaterializer::new(realizer, self.config.downloads.on_transport_error);

        let total = projects.len();
        let mut reports = Vec::with_capacity(total);
        for (i, project) in projects.iter().enumerate() {
            self.progress.project_started(i + 1, total, &project.name);
            let project_dir = join_literal(&user_dir, &project.id);
            if !is_single_segment(&project.id) {
                let reason = format!(
                    "Project id '{}' is not a single path segment; not materialized",
                    project.id
                );
                warn!(project = project.name.as_str(), "{}", reason);
                reports.push(ProjectReport::rejected(project, &project_dir, reason));
                continue;
            }
            reports.push(materializer.materialize_project(project, &project_dir)?);
        }

        let index_path = write_index(
            &user_dir,
            username,
            projects,
            &self.config.editor_base_url,
        )?;
        info!(index = %index_path.display(), "index written");

        Ok(RunSummary {
            username: username.to_string(),
            user_dir,
            index_path,
            projects: reports,
        })
    }
}
