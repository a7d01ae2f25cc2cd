//! ConfigLoader facade delegating to merge service.

use super::merge::service::MergeService;
use super::MirrorConfig;
use crate::error::ApiError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from the global file, an optional explicit file, and environment, then validate.
    pub fn load(explicit_file: Option<&Path>) -> Result<MirrorConfig, ApiError> {
        let config = MergeService::load(explicit_file)?;
        config.validate()?;
        Ok(config)
    }

    /// Create default configuration.
    pub fn default() -> MirrorConfig {
        MirrorConfig::default()
    }
}
