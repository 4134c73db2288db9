//! Output records.

use serde::Serialize;

use super::ListingEntry;
use crate::error::Result;
use crate::utils::url::permalink_url;

/// A simplified listing entry as printed to the user.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub score: i64,
    /// Absolute link to the post
    pub url: String,
    pub author: String,
}

impl Post {
    /// Build a post from an upstream entry, prefixing its permalink.
    pub fn from_entry(entry: ListingEntry, link_prefix: &str) -> Self {
        Self {
            url: permalink_url(link_prefix, &entry.permalink),
            title: entry.title,
            score: entry.score,
            author: entry.author,
        }
    }
}

/// Message printed when no subreddit is given on the command line.
pub const MISSING_IDENTIFIER: &str = "No subreddit provided";

/// Either every fetched post or a single error record, never both.
///
/// Serialized untagged: a JSON array of posts, or `{"error": "..."}`.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Outcome {
    Posts(Vec<Post>),
    Error { error: String },
}

impl Outcome {
    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            error: message.into(),
        }
    }

    pub fn missing_identifier() -> Self {
        Self::error(MISSING_IDENTIFIER)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }
}

impl From<Result<Vec<Post>>> for Outcome {
    fn from(result: Result<Vec<Post>>) -> Self {
        match result {
            Ok(posts) => Self::Posts(posts),
            Err(e) => Self::error(e.to_string()),
        }
    }
}
