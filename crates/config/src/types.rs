//! Configuration types for Rango page widgets.
//!
//! Responsibilities:
//! - Define connection settings (URL, timeout, retries).
//! - Define binder settings (apply policy, suggestion debounce, channel capacity).
//! - Provide serialization helpers for `Duration`.
//!
//! Does NOT handle:
//! - Configuration loading from files/env (see `loader` module).
//! - Actual network connections (see client crate).
//!
//! Invariants:
//! - `timeout` is serialized as whole seconds, `suggest_debounce` as milliseconds.
//! - Default values come from `constants`, not magic numbers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_CHANNEL_CAPACITY, DEFAULT_MAX_RETRIES, DEFAULT_SUGGEST_DEBOUNCE_MS,
    DEFAULT_TIMEOUT_SECS,
};

mod duration_seconds {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

mod duration_millis {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        (duration.as_millis() as u64).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        Ok(Duration::from_millis(millis))
    }
}

/// How request completions are applied to their target element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplyPolicy {
    /// Only the most recently issued request for a target may update it.
    /// Superseded suggestion requests are cancelled and keystrokes are debounced.
    #[default]
    Latest,
    /// Every completion is applied in arrival order; the last response to
    /// arrive wins. No debouncing or cancellation.
    Arrival,
}

impl ApplyPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            ApplyPolicy::Latest => "latest",
            ApplyPolicy::Arrival => "arrival",
        }
    }
}

impl fmt::Display for ApplyPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApplyPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "latest" => Ok(ApplyPolicy::Latest),
            "arrival" => Ok(ApplyPolicy::Arrival),
            other => Err(format!("expected 'latest' or 'arrival', got '{other}'")),
        }
    }
}

/// Connection configuration for the fragment server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    /// Base URL of the server (e.g., http://127.0.0.1:8000)
    pub base_url: String,
    /// Request timeout (serialized as seconds)
    #[serde(with = "duration_seconds", default = "default_timeout")]
    pub timeout: Duration,
    /// Maximum number of retries for rate-limited requests
    #[serde(default = "default_max_retries")]
    pub max_retries: usize,
}

/// Event binder configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinderConfig {
    #[serde(default)]
    pub apply_policy: ApplyPolicy,
    /// Quiet period before a suggestion request is sent (serialized as milliseconds).
    /// Ignored under [`ApplyPolicy::Arrival`].
    #[serde(with = "duration_millis", default = "default_suggest_debounce")]
    pub suggest_debounce: Duration,
    #[serde(default = "default_channel_capacity")]
    pub channel_capacity: usize,
}

fn default_timeout() -> Duration {
    Duration::from_secs(DEFAULT_TIMEOUT_SECS)
}

fn default_max_retries() -> usize {
    DEFAULT_MAX_RETRIES
}

fn default_suggest_debounce() -> Duration {
    Duration::from_millis(DEFAULT_SUGGEST_DEBOUNCE_MS)
}

fn default_channel_capacity() -> usize {
    DEFAULT_CHANNEL_CAPACITY
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: default_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            apply_policy: ApplyPolicy::default(),
            suggest_debounce: default_suggest_debounce(),
            channel_capacity: default_channel_capacity(),
        }
    }
}

impl BinderConfig {
    /// Fire-and-forget binder settings: no debounce,
    /// no cancellation, last response to arrive wins.
    pub fn arrival_order() -> Self {
        Self {
            apply_policy: ApplyPolicy::Arrival,
            suggest_debounce: Duration::ZERO,
            ..Self::default()
        }
    }

    /// Debounce actually applied to suggestion keystrokes.
    pub fn effective_debounce(&self) -> Duration {
        match self.apply_policy {
            ApplyPolicy::Latest => self.suggest_debounce,
            ApplyPolicy::Arrival => Duration::ZERO,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub connection: ConnectionConfig,
    #[serde(default)]
    pub binder: BinderConfig,
}
