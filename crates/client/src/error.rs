//! Error types for the Rango client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while fetching fragments.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport-level failure (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status returned by the server.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Invalid base URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Rate limiting persisted past the retry budget.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),
}

impl ClientError {
    /// HTTP status associated with this error, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            Self::HttpError(e) => e.status().map(|s| s.as_u16()),
            Self::MaxRetriesExceeded(_) => Some(429),
            Self::InvalidUrl(_) => None,
        }
    }

    /// Check if an HTTP status code is retried by the client.
    ///
    /// Only 429 (Too Many Requests) is retried: the fragment endpoints have
    /// server-side effects, and a 429 guarantees the request was not processed.
    pub fn is_retryable_status(status: u16) -> bool {
        status == 429
    }

    /// True for connection failures and timeouts.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::HttpError(e) if e.is_connect() || e.is_timeout() || e.is_request())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_retryable_status() {
        assert!(ClientError::is_retryable_status(429));
        assert!(!ClientError::is_retryable_status(500));
        assert!(!ClientError::is_retryable_status(503));
        assert!(!ClientError::is_retryable_status(404));
    }

    #[test]
    fn test_status() {
        let err = ClientError::ApiError {
            status: 404,
            url: "http://localhost/like_category/".to_string(),
            message: "missing".to_string(),
        };
        assert_eq!(err.status(), Some(404));
        assert_eq!(ClientError::MaxRetriesExceeded(4).status(), Some(429));
        assert_eq!(ClientError::InvalidUrl("x".into()).status(), None);
    }

    #[test]
    fn test_api_error_display() {
        let err = ClientError::ApiError {
            status: 500,
            url: "http://localhost/suggest_category/".to_string(),
            message: "boom".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API error (500) at http://localhost/suggest_category/: boom"
        );
    }

    proptest::proptest! {
        #[test]
        fn prop_only_429_is_retryable(status in 100u16..600) {
            proptest::prop_assert_eq!(ClientError::is_retryable_status(status), status == 429);
        }
    }
}
