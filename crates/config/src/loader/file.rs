//! JSON config file support.
//!
//! Responsibilities:
//! - Read and parse the optional JSON config file.
//! - Apply file values to a `ConfigLoader` without overriding values already set.
//!
//! Invariants:
//! - Every field in the file is optional.
//! - Unknown fields are rejected so typos surface as parse errors.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::types::ApplyPolicy;

/// On-disk configuration shape.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct ConfigFile {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub max_retries: Option<usize>,
    pub apply_policy: Option<ApplyPolicy>,
    pub suggest_debounce_ms: Option<u64>,
}

pub(crate) fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::ConfigFileParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Apply file values to fields the loader has not set yet.
pub(crate) fn apply_file(loader: &mut ConfigLoader, file: ConfigFile) {
    if loader.base_url().is_none() {
        loader.set_base_url(file.base_url);
    }
    if loader.timeout().is_none() {
        loader.set_timeout(file.timeout_seconds.map(Duration::from_secs));
    }
    if loader.max_retries().is_none() {
        loader.set_max_retries(file.max_retries);
    }
    if loader.apply_policy().is_none() {
        loader.set_apply_policy(file.apply_policy);
    }
    if loader.suggest_debounce().is_none() {
        loader.set_suggest_debounce(file.suggest_debounce_ms.map(Duration::from_millis));
    }
}
