//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use rango_client::{AddPageParams, ClientError, EndpointRequest, Fragment, RangoClient};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a client pointed at the mock server with no request timeout so that
/// paused-clock tests never trip it.
#[allow(dead_code)]
pub fn client_for(server: &MockServer, max_retries: usize) -> RangoClient {
    RangoClient::builder()
        .base_url(server.uri())
        .without_timeout()
        .max_retries(max_retries)
        .build()
        .expect("client should build")
}
