//! Integration tests for `rango-cli replay`.
//!
//! # Invariants
//! - The final page reflects every applied completion.
//! - Invalid page or script files exit with the validation code.

mod common;

use std::fs;
use std::path::PathBuf;

use common::rango_cmd_with_base_url;
use predicates::prelude::*;
use tempfile::TempDir;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PAGE: &str = r#"{
  "elements": [
    {"id": "likes", "data": {"catid": "5"}},
    {"id": "like-count", "html": "2 people like this"},
    {"id": "suggestion"},
    {"id": "cats"},
    {"classes": ["rango-add"], "data": {"catid": "5", "url": "https://www.python.org/", "title": "Python", "user": "leifos"}},
    {"classes": ["rango-add"], "data": {"catid": "5", "url": "https://pypi.org/", "title": "PyPI", "user": "leifos"}},
    {"id": "pages"}
  ]
}"#;

fn write_inputs(dir: &TempDir, script: &str) -> (PathBuf, PathBuf) {
    let page_path = dir.path().join("page.json");
    let script_path = dir.path().join("script.json");
    fs::write(&page_path, PAGE).unwrap();
    fs::write(&script_path, script).unwrap();
    (page_path, script_path)
}

#[tokio::test]
async fn test_replay_prints_summary() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/like_category/"))
        .and(query_param("category_id", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_string("3 people like this"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/auto_add_page/"))
        .and(query_param("url", "https://pypi.org/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<ul><li>PyPI</li></ul>"))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let (page, script) = write_inputs(
        &dir,
        r##"[
            {"step": "click", "selector": "#likes"},
            {"step": "click", "selector": ".rango-add", "index": 1}
        ]"##,
    );

    rango_cmd_with_base_url(&server.uri())
        .arg("replay")
        .arg("--page")
        .arg(&page)
        .arg("--script")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("#likes [hidden]: "))
        .stdout(predicate::str::contains("#like-count: 3 people like this"))
        .stdout(predicate::str::contains("#pages: <ul><li>PyPI</li></ul>"));
}

#[tokio::test]
async fn test_replay_json_reports_failed_target() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/suggest_category/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let (page, script) = write_inputs(
        &dir,
        r##"[{"step": "type", "selector": "#suggestion", "text": "py"}]"##,
    );

    let output = rango_cmd_with_base_url(&server.uri())
        .arg("replay")
        .arg("--page")
        .arg(&page)
        .arg("--script")
        .arg(&script)
        .args(["--policy", "arrival", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let page: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let cats = &page["elements"][3];
    assert_eq!(cats["id"], "cats");
    assert_eq!(cats["status"]["state"], "failed");
    assert_eq!(cats["html"], "");
}

#[test]
fn test_replay_with_invalid_script_exits_5() {
    let dir = TempDir::new().unwrap();
    let (page, script) = write_inputs(&dir, r#"[{"step": "click", "selector": "likes"}]"#);

    rango_cmd_with_base_url("http://127.0.0.1:9")
        .arg("replay")
        .arg("--page")
        .arg(&page)
        .arg("--script")
        .arg(&script)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("Invalid script"));
}

#[test]
fn test_replay_with_missing_element_exits_5() {
    let dir = TempDir::new().unwrap();
    let (page, script) = write_inputs(
        &dir,
        r#"[{"step": "click", "selector": ".rango-add", "index": 7}]"#,
    );

    rango_cmd_with_base_url("http://127.0.0.1:9")
        .arg("replay")
        .arg("--page")
        .arg(&page)
        .arg("--script")
        .arg(&script)
        .assert()
        .code(5)
        .stderr(predicate::str::contains("No element matches '.rango-add'"));
}

#[test]
fn test_replay_with_missing_page_file_fails() {
    let dir = TempDir::new().unwrap();
    rango_cmd_with_base_url("http://127.0.0.1:9")
        .arg("replay")
        .arg("--page")
        .arg(dir.path().join("missing.json"))
        .arg("--script")
        .arg(dir.path().join("script.json"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read page description"));
}
