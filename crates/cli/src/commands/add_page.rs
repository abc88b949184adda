//! Add-page command implementation.

use anyhow::{Context, Result};
use rango_binder::CancellationToken;
use rango_client::{AddPageParams, RangoClient};
use tracing::{debug, info};

use crate::cancellation::Cancelled;
use crate::commands::print_fragment;

pub async fn run(
    client: &RangoClient,
    params: &AddPageParams,
    cancel: &CancellationToken,
) -> Result<()> {
    info!("Adding {} to category {}", params.url, params.category_id);
    debug!(title = %params.title, user = %params.user, "Add-page parameters");

    let fragment = tokio::select! {
        res = client.auto_add_page(params) => {
            res.with_context(|| format!("Failed to add page {} to category {}", params.url, params.category_id))?
        }
        _ = cancel.cancelled() => return Err(Cancelled.into()),
    };

    print_fragment(&fragment);
    Ok(())
}
