//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests answered with HTTP 429 (Too Many Requests) are retried with
//! exponential backoff. Every other status is returned on the first attempt.

use std::time::Instant;

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::{ErrorCategory, MetricsCollector};
use crate::models::Endpoint;

/// Sends an HTTP request, retrying HTTP 429 responses.
///
/// - Backoff is `2^attempt` seconds (1s, 2s, 4s, ...).
/// - `max_retries = 0` means a single attempt.
/// - Non-success statuses become [`ClientError::ApiError`] with the body as message.
///
/// # Errors
///
/// Returns `ClientError::MaxRetriesExceeded` when every attempt was rate limited.
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    endpoint: Endpoint,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                debug!("Cannot clone request builder for retry");
                return Err(ClientError::MaxRetriesExceeded(attempt));
            }
        };

        if let Some(m) = metrics {
            m.record_request(endpoint);
            if attempt > 0 {
                m.record_retry(endpoint, attempt);
            }
        }

        let started = Instant::now();
        let response = match attempt_builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = ClientError::from(e);
                if let Some(m) = metrics {
                    m.record_request_duration(endpoint, started.elapsed(), None);
                    m.record_error(endpoint, ErrorCategory::from(&err));
                }
                return Err(err);
            }
        };

        let status = response.status().as_u16();
        if let Some(m) = metrics {
            m.record_request_duration(endpoint, started.elapsed(), Some(status));
        }

        if ClientError::is_retryable_status(status) {
            if attempt < max_retries {
                let backoff_secs = 2u64.pow(attempt as u32);
                debug!(
                    %endpoint,
                    attempt = attempt + 1,
                    max_retries = max_retries + 1,
                    backoff_secs,
                    "Rate limited (HTTP 429), retrying with exponential backoff"
                );
                tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
                continue;
            }

            debug!(%endpoint, attempts = attempt + 1, "Max retries exhausted for rate-limited request");
            let err = ClientError::MaxRetriesExceeded(max_retries + 1);
            if let Some(m) = metrics {
                m.record_error(endpoint, ErrorCategory::from(&err));
            }
            return Err(err);
        }

        if response.status().is_success() {
            if attempt > 0 {
                debug!(%endpoint, attempt = attempt + 1, "Request succeeded after retry");
            }
            return Ok(response);
        }

        let url = response.url().to_string();
        let message = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        let err = ClientError::ApiError {
            status,
            url,
            message,
        };
        if let Some(m) = metrics {
            m.record_error(endpoint, ErrorCategory::from(&err));
        }
        return Err(err);
    }

    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}
