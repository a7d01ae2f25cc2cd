//! p5mirror: Local Mirrors of p5.js Editor Accounts
//!
//! Fetches a user's project listing from the p5.js web editor and rebuilds
//! each project's file tree on disk, downloading assets stored by URL.

pub mod config;
pub mod content;
pub mod error;
pub mod index_page;
pub mod listing;
pub mod logging;
pub mod mirror;
pub mod progress;
pub mod tooling;
pub mod tree;
pub mod types;

pub use error::ApiError;
