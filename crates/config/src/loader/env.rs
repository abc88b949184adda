//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `RANGO_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Invalid numeric values return ConfigError::InvalidValue.

use std::path::PathBuf;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_APPLY_POLICY, ENV_BASE_URL, ENV_CONFIG_PATH, ENV_MAX_RETRIES, ENV_SUGGEST_DEBOUNCE_MS,
    ENV_TIMEOUT,
};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

fn parse_env<T: std::str::FromStr>(var: &str, value: &str, hint: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::invalid(var, hint))
}

/// Apply environment variable configuration to the loader.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(url) = env_var_or_none(ENV_BASE_URL) {
        loader.set_base_url(Some(url));
    }
    if let Some(timeout) = env_var_or_none(ENV_TIMEOUT) {
        let secs: u64 = parse_env(ENV_TIMEOUT, &timeout, "must be a number")?;
        loader.set_timeout(Some(Duration::from_secs(secs)));
    }
    if let Some(retries) = env_var_or_none(ENV_MAX_RETRIES) {
        let value: usize = parse_env(
            ENV_MAX_RETRIES,
            &retries,
            "must be a non-negative integer",
        )?;
        loader.set_max_retries(Some(value));
    }
    if let Some(policy) = env_var_or_none(ENV_APPLY_POLICY) {
        let policy = policy
            .parse()
            .map_err(|message: String| ConfigError::invalid(ENV_APPLY_POLICY, message))?;
        loader.set_apply_policy(Some(policy));
    }
    if let Some(debounce) = env_var_or_none(ENV_SUGGEST_DEBOUNCE_MS) {
        let millis: u64 = parse_env(ENV_SUGGEST_DEBOUNCE_MS, &debounce, "must be a number")?;
        loader.set_suggest_debounce(Some(Duration::from_millis(millis)));
    }

    // Only if not already set via CLI
    if loader.config_path().is_none()
        && let Some(path) = env_var_or_none(ENV_CONFIG_PATH)
    {
        loader.set_config_path(Some(PathBuf::from(path)));
    }

    Ok(())
}
