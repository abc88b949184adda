//! Request and response types for the fragment endpoints.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An HTML snippet returned by the server, inserted into the page as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fragment(String);

impl Fragment {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Fragment {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl From<&str> for Fragment {
    fn from(html: &str) -> Self {
        Self(html.to_string())
    }
}

/// The three server endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    LikeCategory,
    SuggestCategory,
    AutoAddPage,
}

impl Endpoint {
    pub const fn path(&self) -> &'static str {
        match self {
            Endpoint::LikeCategory => "/like_category/",
            Endpoint::SuggestCategory => "/suggest_category/",
            Endpoint::AutoAddPage => "/auto_add_page/",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Parameters for `/auto_add_page/`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddPageParams {
    pub category_id: String,
    pub url: String,
    pub title: String,
    pub user: String,
}

/// A fully-parameterized request to one of the fragment endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EndpointRequest {
    Like { category_id: String },
    Suggest { query: String },
    AddPage(AddPageParams),
}

impl EndpointRequest {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            EndpointRequest::Like { .. } => Endpoint::LikeCategory,
            EndpointRequest::Suggest { .. } => Endpoint::SuggestCategory,
            EndpointRequest::AddPage(_) => Endpoint::AutoAddPage,
        }
    }

    /// Query parameters in the order the server documents them.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        match self {
            EndpointRequest::Like { category_id } => vec![("category_id", category_id.as_str())],
            EndpointRequest::Suggest { query } => vec![("suggestion", query.as_str())],
            EndpointRequest::AddPage(p) => vec![
                ("category_id", p.category_id.as_str()),
                ("url", p.url.as_str()),
                ("title", p.title.as_str()),
                ("user", p.user.as_str()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_like_params() {
        let req = EndpointRequest::Like {
            category_id: "5".to_string(),
        };
        assert_eq!(req.endpoint().path(), "/like_category/");
        assert_eq!(req.params(), vec![("category_id", "5")]);
    }

    #[test]
    fn test_add_page_params_keep_empty_values() {
        let req = EndpointRequest::AddPage(AddPageParams {
            category_id: "2".to_string(),
            url: "https://docs.python.org".to_string(),
            title: String::new(),
            user: "leifos".to_string(),
        });
        let names: Vec<_> = req.params().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["category_id", "url", "title", "user"]);
        assert_eq!(req.params()[2], ("title", ""));
    }

    #[test]
    fn test_fragment_is_transparent() {
        let fragment = Fragment::from("<li>Python</li>");
        assert_eq!(
            serde_json::to_string(&fragment).unwrap(),
            r#""<li>Python</li>""#
        );
        assert_eq!(fragment.to_string(), "<li>Python</li>");
    }
}
