//! HTTP access for the listing and for remote file content.

use crate::config::HttpConfig;
use crate::error::ApiError;
use std::io::Write;
use std::path::Path;
use std::time::Duration;

/// Fully buffered response, used for the project listing.
#[derive(Debug, Clone)]
pub struct RemoteResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Result of a download that reached the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Download {
    /// Success status; the body was streamed to the destination.
    Saved { bytes: u64 },
    /// Non-success status; the destination was not created.
    Rejected { status: u16 },
}

/// Blocking GET access to remote resources.
///
/// Transport failures (DNS, connect, timeout, broken body) are returned as
/// [`ApiError::Transport`]; HTTP status codes are not errors at this level.
pub trait RemoteClient {
    fn get(&self, url: &str) -> Result<RemoteResponse, ApiError>;

    /// GET `url` and stream a success body into `dest`, creating or
    /// truncating it. `dest` is left untouched on a non-success status and
    /// does not exist after a transport error.
    fn download_to(&self, url: &str, dest: &Path) -> Result<Download, ApiError>;
}

/// `reqwest` client driven synchronously on its own current-thread runtime.
pub struct HttpClient {
    runtime: tokio::runtime::Runtime,
    client: reqwest::Client,
}

impl HttpClient {
    pub fn new(config: &HttpConfig) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;
        Self::from_client(client)
    }

    /// Drive an already configured `reqwest::Client`.
    pub fn from_client(client: reqwest::Client) -> Result<Self, ApiError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| ApiError::ConfigError(format!("Failed to create runtime: {}", e)))?;
        Ok(Self { runtime, client })
    }
}

impl RemoteClient for HttpClient {
    fn get(&self, url: &str) -> Result<RemoteResponse, ApiError> {
        self.runtime.block_on(async {
            let response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| ApiError::transport(url, e))?;
            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|e| ApiError::transport(url, e))?;
            tracing::debug!(url, status, bytes = body.len(), "GET complete");
            Ok(RemoteResponse {
                status,
                body: body.to_vec(),
            })
        })
    }

    fn download_to(&self, url: &str, dest: &Path) -> Result<Download, ApiError> {
        self.runtime.block_on(async {
            let mut response = self
                .client
                .get(url)
                .send()
                .await
                .map_err(|e| ApiError::transport(url, e))?;

            let status = response.status();
            if !status.is_success() {
                return Ok(Download::Rejected {
                    status: status.as_u16(),
                });
            }

            let mut file = std::fs::File::create(dest)
                .map_err(|e| ApiError::io("Failed to create file", dest, e))?;
            match stream_body(&mut response, &mut file, url, dest).await {
                Ok(bytes) => {
                    tracing::debug!(url, bytes, dest = %dest.display(), "download saved");
                    Ok(Download::Saved { bytes })
                }
                Err(err) => {
                    drop(file);
                    if let Err(e) = std::fs::remove_file(dest) {
                        tracing::warn!(dest = %dest.display(), error = %e, "failed to remove partial download");
                    }
                    Err(err)
                }
            }
        })
    }
}

/// Copy the response body into `file`; a partial body is an error.
async fn stream_body(
    response: &mut reqwest::Response,
    file: &mut std::fs::File,
    url: &str,
    dest: &Path,
) -> Result<u64, ApiError> {
    let mut bytes = 0u64;
    while let Some(chunk) = response
        .chunk()
        .await
        .map_err(|e| ApiError::transport(url, e))?
    {
        file.write_all(&chunk)
            .map_err(|e| ApiError::io("Failed to write file", dest, e))?;
        bytes += chunk.len() as u64;
    }
    file.flush()
        .map_err(|e| ApiError::io("Failed to write file", dest, e))?;
    Ok(bytes)
}
