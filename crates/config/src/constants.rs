//! Centralized constants for the Rango workspace.
//!
//! Default values shared by the config, client and binder crates.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default base URL of the development server.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (10 minutes).
pub const MAX_TIMEOUT_SECS: u64 = 600;

/// Default maximum number of retries for rate-limited requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound for configured retries.
pub const MAX_MAX_RETRIES: usize = 10;

// =============================================================================
// Binder Defaults
// =============================================================================

/// Default quiet period before a suggestion request is issued, in milliseconds.
pub const DEFAULT_SUGGEST_DEBOUNCE_MS: u64 = 150;

/// Maximum allowed suggestion debounce in milliseconds.
pub const MAX_SUGGEST_DEBOUNCE_MS: u64 = 5_000;

/// Default channel capacity for request completions.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

// =============================================================================
// Environment Variables
// =============================================================================

pub const ENV_BASE_URL: &str = "RANGO_BASE_URL";
pub const ENV_TIMEOUT: &str = "RANGO_TIMEOUT";
pub const ENV_MAX_RETRIES: &str = "RANGO_MAX_RETRIES";
pub const ENV_APPLY_POLICY: &str = "RANGO_APPLY_POLICY";
pub const ENV_SUGGEST_DEBOUNCE_MS: &str = "RANGO_SUGGEST_DEBOUNCE_MS";
pub const ENV_CONFIG_PATH: &str = "RANGO_CONFIG_PATH";
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";
