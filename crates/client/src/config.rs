use std::env;
use std::time::Duration;

use eyre::{Result, eyre};

/// Configuration for the booking API client.
///
/// Read from environment variables, with defaults suitable for a local
/// backend:
///
/// - `SLOTIO_API_URL`: base URL of the booking API (default
///   `http://localhost:8000`)
/// - `SLOTIO_REQUEST_TIMEOUT`: per-request timeout in seconds (default 10)
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the booking API, without a trailing slash
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            request_timeout: 10,
        }
    }
}

impl ClientConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let api_base_url = env::var("SLOTIO_API_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base_url);

        let request_timeout = match env::var("SLOTIO_REQUEST_TIMEOUT") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|_| eyre!("SLOTIO_REQUEST_TIMEOUT must be a number of seconds"))?,
            Err(_) => defaults.request_timeout,
        };

        Ok(Self {
            api_base_url,
            request_timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}
