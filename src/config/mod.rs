//! Configuration
//!
//! Layered configuration for a mirror run: built-in defaults, the global
//! config file, an explicit `--config` file, then `P5MIRROR__*` environment
//! variables. CLI flags are applied on top by the caller.

mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;
pub use paths::xdg_root as xdg;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_EDITOR_BASE_URL: &str = "https://editor.p5js.org";

fn default_output_root() -> PathBuf {
    PathBuf::from("output")
}

fn default_cache_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_editor_base_url() -> String {
    DEFAULT_EDITOR_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    format!("p5mirror/{}", env!("CARGO_PKG_VERSION"))
}

/// Top-level configuration for a mirror run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MirrorConfig {
    /// Directory that receives `<username>/<projectId>/...`
    #[serde(default = "default_output_root")]
    pub output_root: PathBuf,

    /// Directory holding `<username>.json` listing snapshots
    #[serde(default = "default_cache_dir")]
    pub cache_dir: PathBuf,

    /// Editor origin used for the listing endpoint and index links
    #[serde(default = "default_editor_base_url")]
    pub editor_base_url: String,

    #[serde(default)]
    pub http: HttpConfig,

    #[serde(default)]
    pub downloads: DownloadConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            cache_dir: default_cache_dir(),
            editor_base_url: default_editor_base_url(),
            http: HttpConfig::default(),
            downloads: DownloadConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl MirrorConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        let base = self.editor_base_url.trim();
        if base.is_empty() {
            return Err(ApiError::ConfigError(
                "editor_base_url cannot be empty".to_string(),
            ));
        }
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ApiError::ConfigError(format!(
                "editor_base_url must start with http:// or https://, got {}",
                base
            )));
        }
        if self.output_root.as_os_str().is_empty() {
            return Err(ApiError::ConfigError(
                "output_root cannot be empty".to_string(),
            ));
        }
        if self.http.timeout_secs == Some(0) {
            return Err(ApiError::ConfigError(
                "http.timeout_secs must be positive when set".to_string(),
            ));
        }
        Ok(())
    }
}

/// HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Whole-request timeout; no timeout when unset
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: None,
            user_agent: default_user_agent(),
        }
    }
}

/// What a transport-level download failure does to the run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportFailurePolicy {
    /// Skip the file, report it, keep going
    #[default]
    Skip,
    /// Stop the whole run
    Abort,
}

/// Download behavior
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DownloadConfig {
    #[serde(default)]
    pub on_transport_error: TransportFailurePolicy,
}
