//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Provide config path resolution helpers.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not merge configuration sources (see `load_config` in `main`).

use clap::{Parser, Subcommand};
use rango_config::{ApplyPolicy, constants::ENV_CONFIG_PATH, env_var_or_none};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "rango-cli")]
#[command(about = "Rango CLI - Drive the Rango page widgets from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  rango-cli like --category-id 5\n  rango-cli suggest py\n  rango-cli add-page --category-id 5 --url https://www.python.org/ --title Python --user leifos\n  rango-cli replay --page page.json --script script.json --policy arrival\n"
)]
pub struct Cli {
    /// Base URL of the Rango server (e.g., http://127.0.0.1:8000)
    #[arg(short, long, global = true, env = "RANGO_BASE_URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "RANGO_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Maximum number of retries for rate-limited requests
    #[arg(long, global = true, env = "RANGO_MAX_RETRIES")]
    pub max_retries: Option<usize>,

    /// Path to a JSON configuration file.
    ///
    /// Can also be set via RANGO_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = "RANGO_CONFIG_PATH", value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Serve Prometheus metrics on this address (e.g., 127.0.0.1:9000)
    #[arg(long, global = true, value_name = "ADDR")]
    pub metrics_bind: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Like a category and print the updated like count
    Like {
        /// Category id (the like button's data-catid)
        #[arg(long)]
        category_id: String,
    },

    /// Print category suggestions for a query
    Suggest {
        /// Partial category name, as typed into the search box
        query: String,
    },

    /// Add a search result to a category and print the updated page list
    AddPage {
        /// Category id
        #[arg(long)]
        category_id: String,

        /// Page URL
        #[arg(long)]
        url: String,

        /// Page title
        #[arg(long, default_value = "")]
        title: String,

        /// User adding the page
        #[arg(long, default_value = "")]
        user: String,
    },

    /// Mount a page description and replay a scripted interaction against it
    Replay {
        /// Page description (JSON)
        #[arg(long, value_name = "FILE")]
        page: PathBuf,

        /// Interaction script (JSON array of steps)
        #[arg(long, value_name = "FILE")]
        script: PathBuf,

        /// How completions are applied: latest or arrival
        #[arg(long)]
        policy: Option<ApplyPolicy>,

        /// Suggestion debounce interval in milliseconds (latest policy only)
        #[arg(long, value_name = "MS")]
        debounce_ms: Option<u64>,

        /// Print the final page as JSON instead of a text summary
        #[arg(long)]
        json: bool,
    },
}

/// Returns true if the path is empty or contains only whitespace.
pub(crate) fn path_is_blank(path: &Path) -> bool {
    path.to_string_lossy().trim().is_empty()
}

/// Normalizes the config path, ignoring empty or whitespace-only values.
/// If the resulting path is blank, it falls back to the environment variable.
pub fn resolve_config_path(path: Option<PathBuf>) -> Option<PathBuf> {
    let path = path.filter(|p| !path_is_blank(p));
    if path.is_none() {
        env_var_or_none(ENV_CONFIG_PATH)
            .map(PathBuf::from)
            .filter(|p| !path_is_blank(p))
    } else {
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_replay_policy() {
        let cli = Cli::try_parse_from([
            "rango-cli",
            "replay",
            "--page",
            "page.json",
            "--script",
            "script.json",
            "--policy",
            "arrival",
        ])
        .unwrap();
        match cli.command {
            Commands::Replay { policy, json, .. } => {
                assert_eq!(policy, Some(ApplyPolicy::Arrival));
                assert!(!json);
            }
            _ => panic!("expected replay"),
        }
    }

    #[test]
    fn test_parse_rejects_unknown_policy() {
        let result = Cli::try_parse_from([
            "rango-cli",
            "replay",
            "--page",
            "p.json",
            "--script",
            "s.json",
            "--policy",
            "fastest",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_explicit_config_path_wins() {
        let explicit = resolve_config_path(Some(PathBuf::from("/tmp/rango.json")));
        assert_eq!(explicit, Some(PathBuf::from("/tmp/rango.json")));
        assert!(path_is_blank(Path::new("   ")));
    }
}
