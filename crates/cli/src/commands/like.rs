//! Like command implementation.

use anyhow::{Context, Result};
use rango_binder::CancellationToken;
use rango_client::RangoClient;
use tracing::info;

use crate::cancellation::Cancelled;
use crate::commands::print_fragment;

pub async fn run(client: &RangoClient, category_id: &str, cancel: &CancellationToken) -> Result<()> {
    info!("Liking category {}", category_id);

    let fragment = tokio::select! {
        res = client.like_category(category_id) => {
            res.with_context(|| format!("Failed to like category {category_id}"))?
        }
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    print_fragment(&fragment);
    Ok(())
}
