//! In-memory UI tree the binder operates on.
//!
//! Responsibilities:
//! - Hold the mounted elements with their ids, classes, data attributes,
//!   input value, inner HTML, visibility and request status.
//! - Resolve `#id` / `.class` selectors to element references.
//!
//! Does NOT handle:
//! - Event routing or requests (see `session`).
//! - HTML parsing; fragments are stored verbatim.
//!
//! Invariants:
//! - Elements are never added or removed after mounting, so an [`ElementRef`]
//!   stays valid for the life of the page.
//! - Data attribute keys are stored without the `data-` prefix.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::{BinderError, Result};
use crate::selector::Selector;

/// Stable reference to an element of a [`Page`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementRef(pub usize);

impl fmt::Display for ElementRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element#{}", self.0)
    }
}

/// Request status of a fragment target.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TargetStatus {
    #[default]
    Idle,
    Loading,
    Failed {
        message: String,
    },
}

impl TargetStatus {
    pub fn is_failed(&self) -> bool {
        matches!(self, TargetStatus::Failed { .. })
    }
}

/// A single element of the page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Element {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub data: BTreeMap<String, String>,
    /// Current value for input elements.
    pub value: String,
    /// Inner HTML.
    pub html: String,
    pub hidden: bool,
    pub status: TargetStatus,
}

impl Element {
    pub fn with_id(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::default()
        }
    }

    pub fn with_class(class: &str) -> Self {
        Self {
            classes: vec![class.to_string()],
            ..Self::default()
        }
    }

    /// Builder-style data attribute setter. Accepts `catid` or `data-catid`.
    pub fn data(mut self, name: &str, value: &str) -> Self {
        let key = name.strip_prefix("data-").unwrap_or(name);
        self.data.insert(key.to_string(), value.to_string());
        self
    }

    pub fn html(mut self, html: &str) -> Self {
        self.html = html.to_string();
        self
    }

    /// Read a data attribute. Accepts `catid` or `data-catid`.
    pub fn data_attr(&self, name: &str) -> Option<&str> {
        let key = name.strip_prefix("data-").unwrap_or(name);
        self.data.get(key).map(String::as_str)
    }

    pub fn matches(&self, selector: &Selector) -> bool {
        match selector {
            Selector::Id(id) => self.id.as_deref() == Some(id.as_str()),
            Selector::Class(class) => self.classes.iter().any(|c| c == class),
        }
    }

    /// Short human-readable label, e.g. `#likes` or `.rango-add`.
    pub fn label(&self) -> String {
        match (&self.id, self.classes.first()) {
            (Some(id), _) => format!("#{id}"),
            (None, Some(class)) => format!(".{class}"),
            (None, None) => "<anonymous>".to_string(),
        }
    }
}

/// The mounted UI tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    elements: Vec<Element>,
}

impl Page {
    pub fn new(elements: Vec<Element>) -> Self {
        Self { elements }
    }

    /// Parse a page from its JSON description.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn get(&self, el: ElementRef) -> Option<&Element> {
        self.elements.get(el.0)
    }

    pub(crate) fn get_mut(&mut self, el: ElementRef) -> Option<&mut Element> {
        self.elements.get_mut(el.0)
    }

    /// All elements matching `selector`, in document order.
    pub fn query_all<'a>(&'a self, selector: &'a Selector) -> impl Iterator<Item = ElementRef> + 'a {
        self.elements
            .iter()
            .enumerate()
            .filter(move |(_, e)| e.matches(selector))
            .map(|(i, _)| ElementRef(i))
    }

    /// First element matching `selector`.
    pub fn query(&self, selector: &Selector) -> Option<ElementRef> {
        self.query_all(selector).next()
    }

    /// The `index`-th element matching `selector`.
    pub fn nth(&self, selector: &Selector, index: usize) -> Result<ElementRef> {
        let matches: Vec<_> = self.query_all(selector).collect();
        matches
            .get(index)
            .copied()
            .ok_or_else(|| BinderError::NoSuchElement {
                selector: selector.to_string(),
                index,
                matches: matches.len(),
            })
    }

    /// Convenience lookup by id.
    pub fn by_id(&self, id: &str) -> Option<&Element> {
        self.query(&Selector::id(id)).and_then(|el| self.get(el))
    }

    /// Set an input element's value. Returns false if `el` is out of range.
    pub fn set_value(&mut self, el: ElementRef, value: &str) -> bool {
        match self.get_mut(el) {
            Some(element) => {
                element.value = value.to_string();
                true
            }
            None => false,
        }
    }

    /// One line per element with an id or class, for terminal output.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            if element.id.is_none() && element.classes.is_empty() {
                continue;
            }
            let mut flags = Vec::new();
            if element.hidden {
                flags.push("hidden".to_string());
            }
            match &element.status {
                TargetStatus::Idle => {}
                TargetStatus::Loading => flags.push("loading".to_string()),
                TargetStatus::Failed { message } => flags.push(format!("failed: {message}")),
            }
            let flags = if flags.is_empty() {
                String::new()
            } else {
                format!(" [{}]", flags.join(", "))
            };
            out.push_str(&format!("{}{}: {}\n", element.label(), flags, element.html));
        }
        out
    }
}
