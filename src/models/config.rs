//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub client: ClientConfig,

    /// Where listings come from and how links are built
    #[serde(default)]
    pub source: SourceConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.client.user_agent.trim().is_empty() {
            return Err(AppError::validation("client.user_agent is empty"));
        }
        if self.client.timeout_secs == Some(0) {
            return Err(AppError::validation("client.timeout_secs must be > 0"));
        }
        if self.source.default_limit == 0 {
            return Err(AppError::validation("source.default_limit must be > 0"));
        }
        if let Err(e) = Url::parse(&self.source.base_url) {
            return Err(AppError::config(format!(
                "source.base_url {:?} is not a valid URL: {}",
                self.source.base_url, e
            )));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ClientConfig {
    /// User-Agent header sent with every request
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds; `None` leaves the request unbounded
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: None,
        }
    }
}

/// Listing source settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SourceConfig {
    /// Host serving `/r/<name>/hot.json`
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Prepended verbatim to each permalink
    #[serde(default = "defaults::link_prefix")]
    pub link_prefix: String,

    /// Limit used when none is given on the command line
    #[serde(default = "defaults::default_limit")]
    pub default_limit: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            link_prefix: defaults::link_prefix(),
            default_limit: defaults::default_limit(),
        }
    }
}

mod defaults {
    pub fn user_agent() -> String {
        "AntigravityBot/1.0 by CarlosDoers".into()
    }

    pub fn base_url() -> String {
        "https://www.reddit.com".into()
    }
    pub fn link_prefix() -> String {
        "https://reddit.com".into()
    }
    pub fn default_limit() -> u32 {
        3
    }
}
