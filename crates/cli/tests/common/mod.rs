//! Shared test utilities for rango-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper are hermetic by default.
//! - Retries are disabled unless a test overrides `RANGO_MAX_RETRIES`.

use assert_cmd::Command;

/// Returns a hermetic `rango-cli` command for integration testing.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `RANGO_*` variables from the host are cleared.
pub fn rango_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("rango-cli");

    cmd.env("DOTENV_DISABLED", "1");

    cmd.env_remove("RANGO_BASE_URL")
        .env_remove("RANGO_TIMEOUT")
        .env_remove("RANGO_APPLY_POLICY")
        .env_remove("RANGO_SUGGEST_DEBOUNCE_MS")
        .env_remove("RANGO_CONFIG_PATH")
        .env_remove("RUST_LOG");
    cmd.env("RANGO_MAX_RETRIES", "0");

    cmd
}

/// Returns a hermetic `rango-cli` command pointed at `base_url`.
#[allow(dead_code)]
pub fn rango_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = rango_cmd();
    cmd.env("RANGO_BASE_URL", base_url);
    cmd
}
