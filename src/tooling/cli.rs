//! CLI Tooling
//!
//! Command-line interface for mirroring a p5.js editor account. Re-running
//! the same command rewrites the same tree.

use crate::config::{ConfigLoader, MirrorConfig};
use crate::content::{HttpClient, RemoteClient};
use crate::error::ApiError;
use crate::logging::LoggingConfig;
use crate::mirror::{format_summary_json, format_summary_text, MirrorRequest, MirrorRunner};
use crate::progress::{ConsoleProgress, ProgressReporter, SilentProgress};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

/// p5mirror - Materialize a p5.js web editor account as local files
#[derive(Parser, Debug)]
#[command(name = "p5mirror")]
#[command(about = "Download every sketch of a p5.js editor user into a local directory tree")]
pub struct Cli {
    /// Editor username whose projects are mirrored
    pub username: String,

    /// Configuration file path (layered over the global config)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Output root directory (default: output)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Directory holding cached <username>.json listings (default: .)
    #[arg(long)]
    pub cache_dir: Option<PathBuf>,

    /// Re-fetch the listing even if a cached copy exists
    #[arg(long)]
    pub refresh: bool,

    /// Summary format (text or json)
    #[arg(long, default_value = "text", value_parser = ["text", "json"])]
    pub format: String,

    /// Enable verbose logging (info level)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file, file+stderr, both)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output includes "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn request(&self) -> MirrorRequest {
        MirrorRequest {
            username: self.username.clone(),
            refresh: self.refresh,
        }
    }
}

/// Loaded configuration plus the CLI overrides that apply to it.
pub struct CliContext {
    config: MirrorConfig,
}

impl CliContext {
    /// Load configuration and apply CLI flag overrides.
    pub fn new(cli: &Cli) -> Result<Self, ApiError> {
        let config = ConfigLoader::load(cli.config.as_deref())?;
        Ok(Self::with_config(config, cli))
    }

    /// Apply CLI flag overrides to an already loaded configuration.
    pub fn with_config(mut config: MirrorConfig, cli: &Cli) -> Self {
        if let Some(output) = &cli.output {
            config.output_root = output.clone();
        }
        if let Some(cache_dir) = &cli.cache_dir {
            config.cache_dir = cache_dir.clone();
        }
        apply_logging_overrides(&mut config.logging, cli);
        Self { config }
    }

    pub fn config(&self) -> &MirrorConfig {
        &self.config
    }

    pub fn logging_config(&self) -> &LoggingConfig {
        &self.config.logging
    }

    /// Run against the live editor and return the formatted summary.
    pub fn execute(&self, cli: &Cli) -> Result<String, ApiError> {
        let client = HttpClient::new(&self.config.http)?;
        if cli.format == "json" {
            self.execute_with(cli, &client, &SilentProgress)
        } else {
            self.execute_with(cli, &client, &ConsoleProgress)
        }
    }

    /// Run with an explicit client and progress sink.
    pub fn execute_with(
        &self,
        cli: &Cli,
        client: &dyn RemoteClient,
        progress: &dyn ProgressReporter,
    ) -> Result<String, ApiError> {
        let runner = MirrorRunner::new(&self.config, client, progress);
        let summary = runner.run(&cli.request())?;
        info!(
            username = summary.username.as_str(),
            projects = summary.projects.len(),
            skipped = summary.total_skipped(),
            "mirror complete"
        );
        match cli.format.as_str() {
            "json" => format_summary_json(&summary),
            _ => Ok(format_summary_text(&summary)),
        }
    }
}

fn apply_logging_overrides(logging: &mut LoggingConfig, cli: &Cli) {
    if cli.verbose {
        logging.level = "info".to_string();
    }
    if let Some(level) = &cli.log_level {
        logging.level = level.clone();
    }
    if let Some(format) = &cli.log_format {
        logging.format = format.clone();
    }
    if let Some(output) = &cli.log_output {
        logging.output = output.clone();
    }
    if let Some(file) = &cli.log_file {
        logging.file = Some(file.clone());
    }
}
