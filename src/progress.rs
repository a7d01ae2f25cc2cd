//! User-facing progress lines.
//!
//! Progress goes to stdout independently of the tracing subscriber so a run
//! stays readable with logging turned off.

use owo_colors::OwoColorize;
use std::path::Path;

/// Receives run progress as projects and downloads are processed.
pub trait ProgressReporter {
    fn project_started(&self, position: usize, total: usize, name: &str);
    fn download_started(&self, url: &str, name: &str);
    fn download_rejected(&self, status: u16, filename: &Path);
    fn notice(&self, message: &str);
}

/// Prints progress to stdout.
pub struct ConsoleProgress;

impl ProgressReporter for ConsoleProgress {
    fn project_started(&self, position: usize, total: usize, name: &str) {
        println!("{}", format_project_line(position, total, name));
    }

    fn download_started(&self, url: &str, name: &str) {
        println!("fetching {}\n --> {}", url, name);
    }

    fn download_rejected(&self, status: u16, filename: &Path) {
        println!(
            "{} {} ({})",
            "status:".yellow(),
            status,
            filename.display()
        );
    }

    fn notice(&self, message: &str) {
        println!("{}", message);
    }
}

/// Discards progress; used by tests and `--format json` runs.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn project_started(&self, _position: usize, _total: usize, _name: &str) {}
    fn download_started(&self, _url: &str, _name: &str) {}
    fn download_rejected(&self, _status: u16, _filename: &Path) {}
    fn notice(&self, _message: &str) {}
}

/// `  3/12 name..` with the position right-aligned to three columns.
pub fn format_project_line(position: usize, total: usize, name: &str) -> String {
    format!("{:>3}/{} {}..", position, total, name)
}
