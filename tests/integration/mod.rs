//! Integration tests for the mirror pipeline

mod config_loading;
mod http_client;
mod properties;
mod support;
