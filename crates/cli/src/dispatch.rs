//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the command handlers.
//! - Build the shared client from the resolved configuration.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main`).

use anyhow::{Context, Result};
use rango_binder::CancellationToken;
use rango_client::{MetricsCollector, RangoClient};
use rango_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;

pub(crate) async fn run_command(
    cli: Cli,
    config: Config,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client(&config, cli.metrics_bind.is_some())?;

    match cli.command {
        Commands::Like { category_id } => {
            commands::like::run(&client, &category_id, cancel).await?;
        }
        Commands::Suggest { query } => {
            commands::suggest::run(&client, &query, cancel).await?;
        }
        Commands::AddPage {
            category_id,
            url,
            title,
            user,
        } => {
            let params = rango_client::AddPageParams {
                category_id,
                url,
                title,
                user,
            };
            commands::add_page::run(&client, &params, cancel).await?;
        }
        Commands::Replay {
            page, script, json, ..
        } => {
            commands::replay::run(client, config.binder, &page, &script, json, cancel).await?;
        }
    }

    Ok(())
}

fn build_client(config: &Config, with_metrics: bool) -> Result<RangoClient> {
    let mut builder = RangoClient::builder().from_config(config);
    if with_metrics {
        builder = builder.metrics(MetricsCollector::new());
    }
    builder.build().context("Failed to build HTTP client")
}
