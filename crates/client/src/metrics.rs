//! Metrics collection for fragment requests.
//!
//! Records request counters, latency histograms, retries and categorized
//! errors through the `metrics` crate facade. Exposition is handled by
//! [`crate::metrics_exporter`].
//!
//! # Invariants
//! - Every metric carries an `endpoint` label. Durations add `status`, retries
//!   add `attempt`, errors add `error_category`.
//! - Recording is infallible and a no-op when no recorder is installed.

use crate::error::ClientError;
use crate::models::Endpoint;
use std::time::Duration;

/// Metric name for request duration histogram.
pub const METRIC_REQUEST_DURATION: &str = "rango_fragment_request_duration_seconds";

/// Metric name for total request counter.
pub const METRIC_REQUESTS_TOTAL: &str = "rango_fragment_requests_total";

/// Metric name for retry counter.
pub const METRIC_RETRIES_TOTAL: &str = "rango_fragment_retries_total";

/// Metric name for error counter.
pub const METRIC_ERRORS_TOTAL: &str = "rango_fragment_errors_total";

/// Error categories for metrics labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Transport,
    Http4xx,
    Http5xx,
    RateLimited,
    Unknown,
}

impl ErrorCategory {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ErrorCategory::Transport => "transport",
            ErrorCategory::Http4xx => "http_4xx",
            ErrorCategory::Http5xx => "http_5xx",
            ErrorCategory::RateLimited => "rate_limited",
            ErrorCategory::Unknown => "unknown",
        }
    }
}

impl From<&ClientError> for ErrorCategory {
    fn from(error: &ClientError) -> Self {
        match error {
            ClientError::MaxRetriesExceeded(_) => ErrorCategory::RateLimited,
            ClientError::ApiError { status, .. } if (400..500).contains(status) => {
                ErrorCategory::Http4xx
            }
            ClientError::ApiError { status, .. } if (500..600).contains(status) => {
                ErrorCategory::Http5xx
            }
            e if e.is_transport() => ErrorCategory::Transport,
            _ => ErrorCategory::Unknown,
        }
    }
}

/// Metrics collector for fragment requests.
///
/// A thin wrapper over the `metrics` macros so every call site uses the same
/// names and labels.
#[derive(Debug, Clone, Default)]
pub struct MetricsCollector {
    enabled: bool,
}

impl MetricsCollector {
    /// Create an enabled collector.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    /// Create a collector that records nothing.
    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record the duration of a request; `status` is `None` when no response arrived.
    pub fn record_request_duration(
        &self,
        endpoint: Endpoint,
        duration: Duration,
        status: Option<u16>,
    ) {
        if !self.enabled {
            return;
        }

        let status_label = status.map_or("error".to_string(), |s| s.to_string());

        metrics::histogram!(METRIC_REQUEST_DURATION,
            "endpoint" => endpoint.path(),
            "status" => status_label,
        )
        .record(duration.as_secs_f64());
    }

    /// Record a request attempt, including retries.
    pub fn record_request(&self, endpoint: Endpoint) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_REQUESTS_TOTAL, "endpoint" => endpoint.path()).increment(1);
    }

    /// Record a retry (not the initial attempt).
    pub fn record_retry(&self, endpoint: Endpoint, attempt: usize) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_RETRIES_TOTAL,
            "endpoint" => endpoint.path(),
            "attempt" => attempt.to_string(),
        )
        .increment(1);
    }

    pub fn record_error(&self, endpoint: Endpoint, category: ErrorCategory) {
        if !self.enabled {
            return;
        }

        metrics::counter!(METRIC_ERRORS_TOTAL,
            "endpoint" => endpoint.path(),
            "error_category" => category.as_str(),
        )
        .increment(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_category_from_api_error() {
        let err = ClientError::ApiError {
            status: 503,
            url: String::new(),
            message: String::new(),
        };
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Http5xx);

        let err = ClientError::ApiError {
            status: 404,
            url: String::new(),
            message: String::new(),
        };
        assert_eq!(ErrorCategory::from(&err), ErrorCategory::Http4xx);
    }

    #[test]
    fn test_error_category_rate_limited() {
        let err = ClientError::MaxRetriesExceeded(4);
        assert_eq!(ErrorCategory::from(&err).as_str(), "rate_limited");
    }

    #[test]
    fn test_disabled_collector_is_noop() {
        let collector = MetricsCollector::disabled();
        assert!(!collector.is_enabled());
        collector.record_request(Endpoint::LikeCategory);
        collector.record_error(Endpoint::LikeCategory, ErrorCategory::Unknown);
    }
}
