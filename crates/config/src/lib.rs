//! Configuration management for Rango page widgets.
//!
//! This crate provides types and loaders for the fragment endpoint connection
//! and the event binder's request policy, read from environment variables,
//! an optional `.env` file and an optional JSON config file.

pub mod constants;
mod loader;
pub mod types;

pub use loader::{ConfigError, ConfigLoader, env_var_or_none};
pub use types::{ApplyPolicy, BinderConfig, Config, ConnectionConfig};
