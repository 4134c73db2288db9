// src/services/hot.rs

//! Hot listing fetcher service.
//!
//! Performs a single request against a subreddit's hot listing and turns the
//! response into [`Post`] records.

use reqwest::blocking::Client;

use crate::error::Result;
use crate::models::{Listing, Outcome, Post, SourceConfig};
use crate::utils::url::hot_listing_url;

/// Service for fetching a subreddit's hot listing.
pub struct HotFetcher {
    client: Client,
    base_url: String,
    link_prefix: String,
}

impl HotFetcher {
    /// Create a new fetcher using the given client and source settings.
    pub fn new(client: Client, source: &SourceConfig) -> Self {
        Self {
            client,
            base_url: source.base_url.clone(),
            link_prefix: source.link_prefix.clone(),
        }
    }

    /// Fetch up to `limit` hot posts for `identifier`.
    ///
    /// The limit is only sent upstream; the response is not truncated.
    pub fn fetch(&self, identifier: &str, limit: u32) -> Result<Vec<Post>> {
        let url = hot_listing_url(&self.base_url, identifier, limit)?;
        log::debug!("GET {}", url);

        let body = self.client.get(url).send()?.error_for_status()?.text()?;
        let listing: Listing = serde_json::from_str(&body)?;

        let posts: Vec<Post> = listing
            .into_entries()
            .map(|entry| Post::from_entry(entry, &self.link_prefix))
            .collect();

        log::info!("Fetched {} post(s) from r/{}", posts.len(), identifier);
        Ok(posts)
    }

    /// Like [`fetch`](Self::fetch), but folds any failure into an error record.
    pub fn fetch_outcome(&self, identifier: &str, limit: u32) -> Outcome {
        let result = self.fetch(identifier, limit);
        if let Err(e) = &result {
            log::warn!("Failed to fetch r/{}: {}", identifier, e);
        }
        Outcome::from(result)
    }
}
