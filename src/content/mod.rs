//! Content realization for file records and the HTTP client behind it.

pub mod client;
pub mod realize;

pub use client::{Download, HttpClient, RemoteClient, RemoteResponse};
pub use realize::{ContentRealizer, Realized};
