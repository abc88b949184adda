//! Suggest command implementation.

use anyhow::{Context, Result};
use rango_binder::CancellationToken;
use rango_client::RangoClient;
use tracing::info;

use crate::cancellation::Cancelled;
use crate::commands::print_fragment;

pub async fn run(client: &RangoClient, query: &str, cancel: &CancellationToken) -> Result<()> {
    info!("Fetching suggestions for {:?}", query);

    let fragment = tokio::select! {
        res = client.suggest_category(query) => {
            res.with_context(|| format!("Failed to fetch suggestions for '{query}'"))?
        }
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    print_fragment(&fragment);
    Ok(())
}
