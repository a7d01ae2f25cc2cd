//! Tooling & Integration Layer
//!
//! Command-line entry points for running a mirror.

pub mod cli;

pub use cli::{Cli, CliContext};
