//! Replay command implementation.
//!
//! Mounts a page description, runs an interaction script against it through
//! the event binder, and prints the final page.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use rango_binder::{CancellationToken, Page, Script, Session};
use rango_client::RangoClient;
use rango_config::BinderConfig;
use tracing::info;

use crate::cancellation::Cancelled;

pub async fn run(
    client: RangoClient,
    binder: BinderConfig,
    page_path: &Path,
    script_path: &Path,
    json: bool,
    cancel: &CancellationToken,
) -> Result<()> {
    let raw = fs::read_to_string(page_path)
        .with_context(|| format!("Failed to read page description {}", page_path.display()))?;
    let page = Page::from_json(&raw)
        .with_context(|| format!("Invalid page description {}", page_path.display()))?;

    let raw = fs::read_to_string(script_path)
        .with_context(|| format!("Failed to read script {}", script_path.display()))?;
    let script = Script::from_json(&raw)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    info!(
        "Replaying {} steps against {} elements ({} policy)",
        script.steps.len(),
        page.len(),
        binder.apply_policy
    );

    let mut session = Session::mount(page, client, binder);
    let handles = tokio::select! {
        res = session.run_script(&script) => res.context("Script failed")?,
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };
    info!("Replay issued {} requests", handles.len());

    let page = session.into_page();
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&page).context("Failed to serialize page")?
        );
    } else {
        print!("{}", page.summary());
    }

    Ok(())
}
