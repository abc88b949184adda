//! Main Rango client and API methods.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `fragments`: Fragment endpoint methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Applying fragments to a page (see the `rango-binder` crate)

pub mod builder;
mod fragments;

use crate::metrics::MetricsCollector;

/// Client for the Rango fragment endpoints.
///
/// Cheap to clone; clones share the underlying connection pool.
///
/// ```rust,ignore
/// use rango_client::RangoClient;
///
/// let client = RangoClient::builder()
///     .base_url("http://127.0.0.1:8000".to_string())
///     .build()?;
/// let likes = client.like_category("5").await?;
/// ```
#[derive(Debug, Clone)]
pub struct RangoClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) max_retries: usize,
    pub(crate) metrics: Option<MetricsCollector>,
}

impl RangoClient {
    /// Create a new client builder.
    pub fn builder() -> builder::RangoClientBuilder {
        builder::RangoClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn max_retries(&self) -> usize {
        self.max_retries
    }
}
