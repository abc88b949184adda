//! `/like_category/`, `/suggest_category/` and `/auto_add_page/`.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::send_request_with_retry;
use crate::error::Result;
use crate::metrics::MetricsCollector;
use crate::models::{AddPageParams, EndpointRequest, Fragment};

/// Issue a GET for any fragment request and return the body verbatim.
pub async fn fetch_fragment(
    client: &Client,
    base_url: &str,
    request: &EndpointRequest,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<Fragment> {
    let endpoint = request.endpoint();
    let url = format!("{}{}", base_url, endpoint.path());

    debug!(%endpoint, params = ?request.params(), "Fetching fragment");

    let builder = client.get(&url).query(&request.params());
    let response = send_request_with_retry(builder, endpoint, max_retries, metrics).await?;
    let body = response.text().await?;

    Ok(Fragment::from(body))
}

/// Register a like for a category; the server answers with the new like count.
pub async fn like_category(
    client: &Client,
    base_url: &str,
    category_id: &str,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<Fragment> {
    let request = EndpointRequest::Like {
        category_id: category_id.to_string(),
    };
    fetch_fragment(client, base_url, &request, max_retries, metrics).await
}

/// Fetch the category suggestion list for a prefix.
pub async fn suggest_category(
    client: &Client,
    base_url: &str,
    query: &str,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<Fragment> {
    let request = EndpointRequest::Suggest {
        query: query.to_string(),
    };
    fetch_fragment(client, base_url, &request, max_retries, metrics).await
}

/// Add a search result as a page of a category; returns the refreshed page list.
pub async fn auto_add_page(
    client: &Client,
    base_url: &str,
    params: &AddPageParams,
    max_retries: usize,
    metrics: Option<&MetricsCollector>,
) -> Result<Fragment> {
    let request = EndpointRequest::AddPage(params.clone());
    fetch_fragment(client, base_url, &request, max_retries, metrics).await
}
