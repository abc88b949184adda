//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs for SIGINT handling).
//!
//! Invariants:
//! - Exit codes 1-9 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use rango_binder::BinderError;
use rango_client::ClientError;

/// Structured exit codes for rango-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Network, timeout, or DNS failure. Scripts may retry with backoff.
    ConnectionError = 3,

    /// HTTP 404, e.g. an unknown category id.
    NotFound = 4,

    /// Bad input: HTTP 400, invalid configuration, page or script.
    ValidationError = 5,

    /// HTTP 429 after the retry budget was spent.
    RateLimited = 7,

    /// HTTP 502, 503 or 504.
    ServiceUnavailable = 8,

    /// SIGINT/Ctrl+C (Unix standard: 128 + 2).
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(_) if err.is_transport() => ExitCode::ConnectionError,
            ClientError::HttpError(_) => ExitCode::GeneralError,

            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,
            ClientError::ApiError { status: 429, .. } => ExitCode::RateLimited,
            ClientError::ApiError {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,
            ClientError::ApiError { .. } => ExitCode::GeneralError,

            ClientError::MaxRetriesExceeded(_) => ExitCode::RateLimited,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.is::<BinderError>() {
                return ExitCode::ValidationError;
            }
        }

        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;

    fn api_error(status: u16) -> ClientError {
        ClientError::ApiError {
            status,
            url: "http://127.0.0.1:8000/like_category/".to_string(),
            message: "error".to_string(),
        }
    }

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::RateLimited.as_i32(), 7);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_from_api_error_statuses() {
        assert_eq!(ExitCode::from(&api_error(404)), ExitCode::NotFound);
        assert_eq!(ExitCode::from(&api_error(400)), ExitCode::ValidationError);
        assert_eq!(ExitCode::from(&api_error(429)), ExitCode::RateLimited);
        assert_eq!(ExitCode::from(&api_error(503)), ExitCode::ServiceUnavailable);
        assert_eq!(ExitCode::from(&api_error(500)), ExitCode::GeneralError);
    }

    #[test]
    fn test_from_max_retries_exceeded() {
        let err = ClientError::MaxRetriesExceeded(4);
        assert_eq!(ExitCode::from(&err), ExitCode::RateLimited);
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err = Err::<(), _>(api_error(404))
            .context("Failed to like category")
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_binder_error_is_validation() {
        let err = anyhow::Error::new(BinderError::InvalidSelector("likes".to_string()));
        assert_eq!(err.exit_code(), ExitCode::ValidationError);
    }

    #[test]
    fn test_unknown_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
