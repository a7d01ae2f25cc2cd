//! Builder seeded with the defaults every other source overrides.

use crate::config::DEFAULT_EDITOR_BASE_URL;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("output_root", "output")?
        .set_default("cache_dir", ".")?
        .set_default("editor_base_url", DEFAULT_EDITOR_BASE_URL)?
        .set_default("downloads.on_transport_error", "skip")
}
