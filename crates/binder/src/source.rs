//! Transport seam between the binder and the HTTP client.

use std::future::Future;
use std::sync::Arc;

use rango_client::{ClientError, EndpointRequest, Fragment, RangoClient};

/// Anything that can turn an [`EndpointRequest`] into a [`Fragment`].
///
/// Implemented by [`RangoClient`]; tests provide scripted sources.
pub trait FragmentSource: Send + Sync + 'static {
    fn fetch(
        &self,
        request: EndpointRequest,
    ) -> impl Future<Output = Result<Fragment, ClientError>> + Send;
}

impl FragmentSource for RangoClient {
    fn fetch(
        &self,
        request: EndpointRequest,
    ) -> impl Future<Output = Result<Fragment, ClientError>> + Send {
        async move { self.fetch_fragment(&request).await }
    }
}

impl<S: FragmentSource> FragmentSource for Arc<S> {
    fn fetch(
        &self,
        request: EndpointRequest,
    ) -> impl Future<Output = Result<Fragment, ClientError>> + Send {
        (**self).fetch(request)
    }
}
