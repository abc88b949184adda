//! Client builder for constructing [`RangoClient`] instances.
//!
//! # Invariants
//! - `base_url` is required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes

use std::time::Duration;

use crate::client::RangoClient;
use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use rango_config::{
    Config,
    constants::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS},
};

/// Builder for creating a new [`RangoClient`].
pub struct RangoClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    max_retries: usize,
    metrics: Option<MetricsCollector>,
}

impl Default for RangoClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_retries: DEFAULT_MAX_RETRIES,
            metrics: None,
        }
    }
}

impl RangoClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the server, e.g. `http://127.0.0.1:8000`.
    /// Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the request timeout. Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Disable the request timeout.
    ///
    /// Needed under a paused tokio clock, where auto-advance would otherwise
    /// fire the timeout while the request waits on real socket I/O.
    pub fn without_timeout(mut self) -> Self {
        self.timeout = None;
        self
    }

    /// Set the maximum number of retries for rate-limited requests.
    ///
    /// Default is 3 retries with exponential backoff (1s, 2s, 4s delays).
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Set the metrics collector for request tracking.
    pub fn metrics(mut self, metrics: MetricsCollector) -> Self {
        self.metrics = Some(metrics);
        self
    }

    /// Copy connection settings from a loaded configuration.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.timeout = Some(config.connection.timeout);
        self.max_retries = config.connection.max_retries;
        self
    }

    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`RangoClient`].
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::HttpError`] if the HTTP client fails to build.
    pub fn build(self) -> Result<RangoClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);
        if base_url.is_empty() {
            return Err(ClientError::InvalidUrl("base_url is empty".to_string()));
        }

        let mut http = reqwest::Client::builder()
            .user_agent(concat!("rango-client/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }
        let http = http.build()?;

        Ok(RangoClient {
            http,
            base_url,
            max_retries: self.max_retries,
            metrics: self.metrics,
        })
    }
}
