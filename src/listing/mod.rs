//! The user's project listing: cached snapshot, remote fetch, and decoding.

pub mod source;
pub mod wire;

pub use source::{listing_url, ListingSource};
pub use wire::decode_listing;
