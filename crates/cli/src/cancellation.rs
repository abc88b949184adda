//! CLI cancellation utilities.
//!
//! Responsibilities:
//! - Define the `Cancelled` error used to signal Ctrl+C through `anyhow::Result`.
//! - Print the standard cancellation message.
//!
//! Does NOT handle:
//! - Installing signal handlers (see `main`).
//! - The token itself (shared with the binder as `rango_binder::CancellationToken`).

use thiserror::Error;

/// Marker error used to indicate user-driven cancellation.
#[derive(Debug, Clone, Copy, Error)]
#[error("cancelled")]
pub struct Cancelled;

/// Returns true if this anyhow error represents a cancellation.
pub fn is_cancelled_error(err: &anyhow::Error) -> bool {
    err.is::<Cancelled>()
}

/// Print standard cancellation message to stderr.
pub fn print_cancelled_message() {
    eprintln!("^C\nOperation cancelled by user");
}
