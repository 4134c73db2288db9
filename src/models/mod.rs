// src/models/mod.rs

//! Domain models for the fetcher.

mod config;
mod listing;
mod post;

pub use config::{ClientConfig, Config, SourceConfig};
pub use listing::{Listing, ListingChild, ListingData, ListingEntry};
pub use post::{MISSING_IDENTIFIER, Outcome, Post};
