//! Rango CLI - drive the Rango page widgets from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Call the fragment endpoints directly, or replay scripted page sessions
//!   through the event binder.
//!
//! Does NOT handle:
//! - Endpoint requests or completion handling (see `crates/client` and `crates/binder`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod cancellation;
mod commands;
mod dispatch;
mod error;

use std::time::Duration;

use args::Cli;
use cancellation::{is_cancelled_error, print_cancelled_message};
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use rango_binder::CancellationToken;
use rango_config::{Config, ConfigLoader};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let _metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match rango_client::MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!("Metrics exporter started on http://{}/metrics", bind_addr);
                Some(exporter)
            }
            Err(e) => {
                eprintln!("Failed to start metrics exporter: {}", e);
                std::process::exit(ExitCode::GeneralError.as_i32());
            }
        }
    } else {
        None
    };

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to build configuration: {:#}", e);
            std::process::exit(ExitCode::ValidationError.as_i32());
        }
    };

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();

    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            eprintln!("Failed to listen for Ctrl+C: {}", e);
            return;
        }
        cancel_clone.cancel();
    });

    let exit_code = match run_command(cli, config, &cancel).await {
        Ok(()) => ExitCode::Success,
        Err(e) if is_cancelled_error(&e) => {
            print_cancelled_message();
            ExitCode::Interrupted
        }
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Resolve configuration: config file < environment < command-line flags.
fn load_config(cli: &Cli) -> Result<Config, rango_config::ConfigError> {
    let mut loader = ConfigLoader::new();

    if let Some(path) = args::resolve_config_path(cli.config_path.clone()) {
        loader = loader.with_config_path(path);
    }

    loader = loader.from_env()?;

    if let Some(ref url) = cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(timeout_secs) = cli.timeout {
        loader = loader.with_timeout(Duration::from_secs(timeout_secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }
    if let args::Commands::Replay {
        policy,
        debounce_ms,
        ..
    } = &cli.command
    {
        if let Some(policy) = policy {
            loader = loader.with_apply_policy(*policy);
        }
        if let Some(millis) = debounce_ms {
            loader = loader.with_suggest_debounce(Duration::from_millis(*millis));
        }
    }

    loader.from_file()?.build()
}
