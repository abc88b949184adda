//! Common test utilities for binder integration tests.
//!
//! # What this does NOT handle
//! - HTTP mocking (use wiremock with a real `RangoClient`)

use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[allow(unused_imports)]
pub use rango_binder::{
    ActionKind, Applied, Element, ElementRef, FragmentSource, Page, Script, Selector, Session,
    Step, TargetStatus, UiEvent,
};
#[allow(unused_imports)]
pub use rango_client::{AddPageParams, ClientError, EndpointRequest, Fragment};
#[allow(unused_imports)]
pub use rango_config::{ApplyPolicy, BinderConfig};

#[allow(dead_code)]
type Matcher = Box<dyn Fn(&EndpointRequest) -> bool + Send + Sync>;

#[allow(dead_code)]
struct Rule {
    matches: Matcher,
    delay: Duration,
    response: Result<String, u16>,
}

/// In-process fragment source with per-request delays and a call log.
///
/// Requests with no matching rule answer immediately with their parameters.
/// Clones share rules and the call log.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct ScriptedSource {
    rules: Arc<Mutex<Vec<Rule>>>,
    calls: Arc<Mutex<Vec<EndpointRequest>>>,
}

#[allow(dead_code)]
impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond<F>(self, matches: F, delay: Duration, body: &str) -> Self
    where
        F: Fn(&EndpointRequest) -> bool + Send + Sync + 'static,
    {
        self.push(Box::new(matches), delay, Ok(body.to_string()))
    }

    pub fn fail<F>(self, matches: F, delay: Duration, status: u16) -> Self
    where
        F: Fn(&EndpointRequest) -> bool + Send + Sync + 'static,
    {
        self.push(Box::new(matches), delay, Err(status))
    }

    /// Fail the first matching request only; later matches fall through to
    /// the rules after this one.
    pub fn fail_once<F>(self, matches: F, delay: Duration, status: u16) -> Self
    where
        F: Fn(&EndpointRequest) -> bool + Send + Sync + 'static,
    {
        let used = AtomicBool::new(false);
        self.push(
            Box::new(move |r: &EndpointRequest| matches(r) && !used.swap(true, Ordering::SeqCst)),
            delay,
            Err(status),
        )
    }

    fn push(self, matches: Matcher, delay: Duration, response: Result<String, u16>) -> Self {
        self.rules.lock().unwrap().push(Rule {
            matches,
            delay,
            response,
        });
        self
    }

    /// Requests that reached the source, in order.
    pub fn calls(&self) -> Vec<EndpointRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl FragmentSource for ScriptedSource {
    fn fetch(
        &self,
        request: EndpointRequest,
    ) -> impl Future<Output = Result<Fragment, ClientError>> + Send {
        self.calls.lock().unwrap().push(request.clone());
        let (delay, response) = self
            .rules
            .lock()
            .unwrap()
            .iter()
            .find(|rule| (rule.matches)(&request))
            .map(|rule| (rule.delay, rule.response.clone()))
            .unwrap_or_else(|| (Duration::ZERO, Ok(format!("{:?}", request.params()))));

        async move {
            tokio::time::sleep(delay).await;
            match response {
                Ok(body) => Ok(Fragment::new(body)),
                Err(status) => Err(ClientError::ApiError {
                    status,
                    url: request.endpoint().path().to_string(),
                    message: "scripted failure".to_string(),
                }),
            }
        }
    }
}

#[allow(dead_code)]
pub fn like(category_id: &'static str) -> impl Fn(&EndpointRequest) -> bool + Send + Sync {
    move |r: &EndpointRequest| matches!(r, EndpointRequest::Like { category_id: c } if c == category_id)
}

#[allow(dead_code)]
pub fn suggest(query: &'static str) -> impl Fn(&EndpointRequest) -> bool + Send + Sync {
    move |r: &EndpointRequest| matches!(r, EndpointRequest::Suggest { query: q } if q == query)
}

#[allow(dead_code)]
pub fn any_add_page() -> impl Fn(&EndpointRequest) -> bool + Send + Sync {
    |r: &EndpointRequest| matches!(r, EndpointRequest::AddPage(_))
}

/// Category page with all three widgets and three search results.
#[allow(dead_code)]
pub fn category_page() -> Page {
    Page::new(vec![
        Element::with_id("likes").data("catid", "5"),
        Element::with_id("like-count").html("2 people like this"),
        Element::with_id("suggestion"),
        Element::with_id("cats").html("<li>Django</li>"),
        Element::with_class("rango-add")
            .data("catid", "5")
            .data("url", "https://www.python.org/")
            .data("title", "Python")
            .data("user", "leifos"),
        Element::with_class("rango-add")
            .data("catid", "5")
            .data("url", "https://docs.python.org/3/tutorial/")
            .data("title", "Tutorial")
            .data("user", "leifos"),
        Element::with_class("rango-add")
            .data("catid", "5")
            .data("url", "https://pypi.org/"),
        Element::with_id("pages").html("<ul></ul>"),
    ])
}

#[allow(dead_code)]
pub fn el(page: &Page, selector: &str, index: usize) -> ElementRef {
    let selector: Selector = selector.parse().expect("valid selector");
    page.nth(&selector, index).expect("element present")
}

#[allow(dead_code)]
pub fn latest_without_debounce() -> BinderConfig {
    BinderConfig {
        suggest_debounce: Duration::ZERO,
        ..BinderConfig::default()
    }
}
