//! Rate limit (429) retry behavior tests.
//!
//! # Invariants
//! - 429 responses are retried with exponential backoff up to `max_retries`.
//! - `max_retries = 0` means exactly one attempt.
//! - Other error statuses are never retried.

mod common;

use common::*;
use wiremock::matchers::{method, path};

#[tokio::test(start_paused = true)]
async fn test_retry_on_429_then_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/suggest_category/"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(2)
        .expect(2)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/suggest_category/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<li>Python</li>"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 3);
    let fragment = client.suggest_category("py").await.unwrap();

    assert_eq!(fragment.as_str(), "<li>Python</li>");
}

#[tokio::test(start_paused = true)]
async fn test_retry_on_429_exhaustion() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/like_category/"))
        .respond_with(ResponseTemplate::new(429))
        .expect(3)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 2);
    let err = client.like_category("1").await.unwrap_err();

    assert!(matches!(err, ClientError::MaxRetriesExceeded(3)));
}

#[tokio::test]
async fn test_zero_retries_is_single_attempt() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/like_category/"))
        .respond_with(ResponseTemplate::new(429))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 0);
    let err = client.like_category("1").await.unwrap_err();

    assert!(matches!(err, ClientError::MaxRetriesExceeded(1)));
}

#[tokio::test]
async fn test_503_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auto_add_page/"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, 3);
    let err = client
        .auto_add_page(&AddPageParams::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(503));
}
