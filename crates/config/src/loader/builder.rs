//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for hierarchical configuration merging.
//! - Build and validate the final `Config`.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file parsing (delegated to file.rs).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Environment variables take precedence over config file values.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use std::path::PathBuf;
use std::time::Duration;

use super::env::{apply_env, env_var_or_none};
use super::error::ConfigError;
use super::file::{apply_file, read_config_file};
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CHANNEL_CAPACITY, DEFAULT_MAX_RETRIES, DEFAULT_SUGGEST_DEBOUNCE_MS,
    DEFAULT_TIMEOUT_SECS, ENV_DOTENV_DISABLED, MAX_MAX_RETRIES, MAX_SUGGEST_DEBOUNCE_MS,
    MAX_TIMEOUT_SECS,
};
use crate::types::{ApplyPolicy, BinderConfig, Config, ConnectionConfig};

/// Configuration loader that builds config from files, environment variables
/// and explicit overrides.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
    apply_policy: Option<ApplyPolicy>,
    suggest_debounce: Option<Duration>,
    config_path: Option<PathBuf>,
    require_base_url: bool,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", the .env file is not loaded.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        let disabled = env_var_or_none(ENV_DOTENV_DISABLED)
            .is_some_and(|v| v.eq_ignore_ascii_case("true") || v == "1");
        if !disabled {
            match dotenvy::dotenv() {
                Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
                Err(e) if e.not_found() => {}
                Err(e) => {
                    return Err(ConfigError::invalid(".env", e.to_string()));
                }
            }
        }
        Ok(self)
    }

    /// Apply `RANGO_*` environment variables.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Apply values from the config file at `config_path`, if one was set.
    ///
    /// Values already present on the loader are kept.
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        let Some(path) = self.config_path.clone() else {
            return Ok(self);
        };
        let file = read_config_file(&path)?;
        tracing::debug!(path = %path.display(), "Loaded config file");
        apply_file(&mut self, file);
        Ok(self)
    }

    /// Fail in `build()` when no base URL was provided instead of using the
    /// development default.
    pub fn require_base_url(mut self) -> Self {
        self.require_base_url = true;
        self
    }

    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    pub fn with_apply_policy(mut self, policy: ApplyPolicy) -> Self {
        self.apply_policy = Some(policy);
        self
    }

    pub fn with_suggest_debounce(mut self, debounce: Duration) -> Self {
        self.suggest_debounce = Some(debounce);
        self
    }

    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn max_retries(&self) -> Option<usize> {
        self.max_retries
    }

    pub fn apply_policy(&self) -> Option<ApplyPolicy> {
        self.apply_policy
    }

    pub fn suggest_debounce(&self) -> Option<Duration> {
        self.suggest_debounce
    }

    pub fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn set_base_url(&mut self, url: Option<String>) {
        self.base_url = url;
    }

    pub(crate) fn set_timeout(&mut self, timeout: Option<Duration>) {
        self.timeout = timeout;
    }

    pub(crate) fn set_max_retries(&mut self, retries: Option<usize>) {
        self.max_retries = retries;
    }

    pub(crate) fn set_apply_policy(&mut self, policy: Option<ApplyPolicy>) {
        self.apply_policy = policy;
    }

    pub(crate) fn set_suggest_debounce(&mut self, debounce: Option<Duration>) {
        self.suggest_debounce = debounce;
    }

    pub(crate) fn set_config_path(&mut self, path: Option<PathBuf>) {
        self.config_path = path;
    }

    /// Build the final configuration.
    pub fn build(self) -> Result<Config, ConfigError> {
        let base_url = match self.base_url.as_deref() {
            Some(raw) => validate_and_normalize_base_url(raw)?,
            None if self.require_base_url => return Err(ConfigError::MissingBaseUrl),
            None => DEFAULT_BASE_URL.to_string(),
        };

        let connection = ConnectionConfig {
            base_url,
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            max_retries: self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES),
        };

        let binder = BinderConfig {
            apply_policy: self.apply_policy.unwrap_or_default(),
            suggest_debounce: self
                .suggest_debounce
                .unwrap_or(Duration::from_millis(DEFAULT_SUGGEST_DEBOUNCE_MS)),
            channel_capacity: DEFAULT_CHANNEL_CAPACITY,
        };

        Self::validate(&connection, &binder)?;

        Ok(Config { connection, binder })
    }

    fn validate(connection: &ConnectionConfig, binder: &BinderConfig) -> Result<(), ConfigError> {
        let timeout_secs = connection.timeout.as_secs();
        if timeout_secs == 0 {
            return Err(ConfigError::invalid(
                "timeout",
                "must be greater than 0 seconds",
            ));
        }
        if timeout_secs > MAX_TIMEOUT_SECS {
            return Err(ConfigError::invalid(
                "timeout",
                format!("exceeds maximum allowed value of {MAX_TIMEOUT_SECS} seconds"),
            ));
        }

        if connection.max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::invalid(
                "max_retries",
                format!(
                    "must be between 0 and {MAX_MAX_RETRIES} (got {})",
                    connection.max_retries
                ),
            ));
        }

        if binder.suggest_debounce.as_millis() > u128::from(MAX_SUGGEST_DEBOUNCE_MS) {
            return Err(ConfigError::invalid(
                "suggest_debounce",
                format!("exceeds maximum allowed value of {MAX_SUGGEST_DEBOUNCE_MS} ms"),
            ));
        }

        Ok(())
    }
}

fn validate_and_normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = url::Url::parse(trimmed).map_err(|e| {
        ConfigError::invalid(
            "base_url",
            format!("must be an absolute http(s) URL with a host (e.g. http://127.0.0.1:8000): {e}"),
        )
    })?;

    let scheme = parsed.scheme();
    if scheme != "http" && scheme != "https" {
        return Err(ConfigError::invalid(
            "base_url",
            format!("scheme must be http or https, got: {scheme}"),
        ));
    }

    if parsed.host_str().is_none() {
        return Err(ConfigError::invalid("base_url", "host is required"));
    }

    Ok(parsed.as_str().trim_end_matches('/').to_string())
}
