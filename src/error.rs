//! Error types for the mirror pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by listing, materialization, and index emission.
///
/// Only variants that abort a run reach the caller; node- and file-scoped
/// failures are recorded in a [`crate::tree::ProjectReport`] instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid usage: {0}")]
    Usage(String),

    #[error("HTTP request to {url} failed: {message}")]
    Transport { url: String, message: String },

    #[error("Unexpected status code {status} from {url}: {body}")]
    ListingStatus {
        url: String,
        status: u16,
        body: String,
    },

    #[error("Failed to decode project listing: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to encode summary: {0}")]
    Encode(String),

    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ApiError {
    /// Wrap an I/O error with the path and action it belongs to.
    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ApiError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    pub fn transport(url: &str, err: impl std::fmt::Display) -> Self {
        ApiError::Transport {
            url: url.to_string(),
            message: err.to_string(),
        }
    }
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
