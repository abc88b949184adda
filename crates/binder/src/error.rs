//! Error types for the event binder.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BinderError>;

#[derive(Error, Debug)]
pub enum BinderError {
    #[error("Invalid selector '{0}': expected '#id' or '.class'")]
    InvalidSelector(String),

    #[error("No element matches '{selector}' at index {index} ({matches} matches)")]
    NoSuchElement {
        selector: String,
        index: usize,
        matches: usize,
    },

    #[error("Invalid JSON input: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
