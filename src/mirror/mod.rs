//! Mirror runs: orchestration, request/summary types, and summary output.

pub mod format;
pub mod runner;
pub mod types;

pub use format::{format_summary_json, format_summary_text};
pub use runner::{validate_username, MirrorRunner};
pub use types::{MirrorRequest, RunSummary};
