//! Fragment endpoint implementations.
//!
//! Each function issues one GET (plus rate-limit retries) and returns the
//! response body verbatim.

mod fragments;
mod request;

pub use fragments::{auto_add_page, fetch_fragment, like_category, suggest_category};
pub use request::send_request_with_retry;
