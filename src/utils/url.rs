// src/utils/url.rs

//! URL construction utilities.

use url::Url;

use crate::error::Result;

/// Build the hot listing URL for a subreddit.
///
/// The identifier is inserted as-is; whatever the server makes of it is
/// reported by the request itself.
///
/// # Examples
/// ```
/// use reddit_hot::utils::url::hot_listing_url;
///
/// let url = hot_listing_url("https://www.reddit.com", "news", 3).unwrap();
/// assert_eq!(url.as_str(), "https://www.reddit.com/r/news/hot.json?limit=3");
/// ```
pub fn hot_listing_url(base_url: &str, identifier: &str, limit: u32) -> Result<Url> {
    let raw = format!(
        "{}/r/{}/hot.json?limit={}",
        base_url.trim_end_matches('/'),
        identifier,
        limit
    );
    Ok(Url::parse(&raw)?)
}

/// Join a link prefix and a relative permalink.
///
/// # Examples
/// ```
/// use reddit_hot::utils::url::permalink_url;
///
/// assert_eq!(
///     permalink_url("https://reddit.com", "/r/news/comments/abc/title/"),
///     "https://reddit.com/r/news/comments/abc/title/"
/// );
/// ```
pub fn permalink_url(prefix: &str, permalink: &str) -> String {
    format!("{prefix}{permalink}")
}
