//! Fragment endpoint methods for [`RangoClient`].

use crate::client::RangoClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AddPageParams, EndpointRequest, Fragment};

impl RangoClient {
    /// `GET /like_category/?category_id=<id>`
    pub async fn like_category(&self, category_id: &str) -> Result<Fragment> {
        endpoints::like_category(
            &self.http,
            &self.base_url,
            category_id,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await
    }

    /// `GET /suggest_category/?suggestion=<query>`
    pub async fn suggest_category(&self, query: &str) -> Result<Fragment> {
        endpoints::suggest_category(
            &self.http,
            &self.base_url,
            query,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await
    }

    /// `GET /auto_add_page/?category_id=&url=&title=&user=`
    pub async fn auto_add_page(&self, params: &AddPageParams) -> Result<Fragment> {
        endpoints::auto_add_page(
            &self.http,
            &self.base_url,
            params,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Issue any [`EndpointRequest`].
    pub async fn fetch_fragment(&self, request: &EndpointRequest) -> Result<Fragment> {
        endpoints::fetch_fragment(
            &self.http,
            &self.base_url,
            request,
            self.max_retries,
            self.metrics.as_ref(),
        )
        .await
    }
}
