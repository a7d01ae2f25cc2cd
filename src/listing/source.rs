//! Cache-or-fetch access to a user's raw project listing.

use crate::content::RemoteClient;
use crate::error::ApiError;
use crate::progress::ProgressReporter;
use std::path::{Path, PathBuf};
use tracing::info;

/// Listing endpoint for `username` under the editor base URL.
pub fn listing_url(editor_base_url: &str, username: &str) -> String {
    format!(
        "{}/editor/{}/projects",
        editor_base_url.trim_end_matches('/'),
        username
    )
}

/// Loads `<cache_dir>/<username>.json`, fetching and persisting it when absent.
pub struct ListingSource<'c> {
    client: &'c dyn RemoteClient,
    editor_base_url: String,
    cache_dir: PathBuf,
}

impl<'c> ListingSource<'c> {
    pub fn new(client: &'c dyn RemoteClient, editor_base_url: &str, cache_dir: &Path) -> Self {
        Self {
            client,
            editor_base_url: editor_base_url.to_string(),
            cache_dir: cache_dir.to_path_buf(),
        }
    }

    pub fn cache_path(&self, username: &str) -> PathBuf {
        self.cache_dir.join(format!("{}.json", username))
    }

    /// Raw listing bytes. A present cache file is used as-is unless `refresh`.
    pub fn load(
        &self,
        username: &str,
        refresh: bool,
        progress: &dyn ProgressReporter,
    ) -> Result<Vec<u8>, ApiError> {
        let path = self.cache_path(username);
        if refresh {
            progress.notice(&format!("{} refresh requested.. fetching..", path.display()));
            return self.fetch(username);
        }

        match std::fs::read(&path) {
            Ok(bytes) => {
                info!(path = %path.display(), bytes = bytes.len(), "using cached listing");
                Ok(bytes)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                progress.notice(&format!("{} does not exist.. fetching..", path.display()));
                self.fetch(username)
            }
            Err(e) => Err(ApiError::io("Failed to read cached listing", path, e)),
        }
    }

    /// Fetch the listing and write it verbatim to the cache path.
    pub fn fetch(&self, username: &str) -> Result<Vec<u8>, ApiError> {
        let url = listing_url(&self.editor_base_url, username);
        let response = self.client.get(&url)?;
        if response.status != 200 {
            return Err(ApiError::ListingStatus {
                url,
                status: response.status,
                body: String::from_utf8_lossy(&response.body).into_owned(),
            });
        }

        if !self.cache_dir.as_os_str().is_empty() {
            std::fs::create_dir_all(&self.cache_dir).map_err(|e| {
                ApiError::io("Failed to create cache directory", &self.cache_dir, e)
            })?;
        }
        let path = self.cache_path(username);
        std::fs::write(&path, &response.body)
            .map_err(|e| ApiError::io("Failed to write cached listing", &path, e))?;
        info!(url = url.as_str(), path = %path.display(), "listing cached");

        Ok(response.body)
    }
}
