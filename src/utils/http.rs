// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::Result;
use crate::models::ClientConfig;

/// Create a configured blocking HTTP client.
///
/// Without `timeout_secs` the client waits on the transport indefinitely.
pub fn create_client(config: &ClientConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(config.timeout_secs.map(Duration::from_secs))
        .build()?;
    Ok(client)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_client_with_and_without_timeout() {
        let mut config = ClientConfig::default();
        assert!(create_client(&config).is_ok());

        config.timeout_secs = Some(5);
        assert!(create_client(&config).is_ok());
    }
}
