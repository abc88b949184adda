//! Listener registration for the three page widgets.
//!
//! Responsibilities:
//! - Describe each widget action: trigger, selectors, endpoint request, hide rule.
//! - Resolve selectors against a mounted page once, producing a listener table.
//!
//! Does NOT handle:
//! - Issuing requests or applying results (see `session`).
//!
//! Invariants:
//! - Only elements present at bind time get listeners.
//! - Each action updates exactly one target element.

use std::collections::HashMap;
use std::fmt;

use rango_client::{AddPageParams, EndpointRequest};
use tracing::debug;

use crate::page::{Element, ElementRef, Page};
use crate::selector::Selector;

/// UI event kinds that can trigger an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Click,
    KeyUp,
}

/// The three widget actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Like,
    Suggest,
    AddPage,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::Like, ActionKind::Suggest, ActionKind::AddPage];

    pub const fn trigger(&self) -> Trigger {
        match self {
            ActionKind::Like | ActionKind::AddPage => Trigger::Click,
            ActionKind::Suggest => Trigger::KeyUp,
        }
    }

    pub fn trigger_selector(&self) -> Selector {
        match self {
            ActionKind::Like => Selector::id("likes"),
            ActionKind::Suggest => Selector::id("suggestion"),
            ActionKind::AddPage => Selector::class("rango-add"),
        }
    }

    pub fn target_selector(&self) -> Selector {
        match self {
            ActionKind::Like => Selector::id("like-count"),
            ActionKind::Suggest => Selector::id("cats"),
            ActionKind::AddPage => Selector::id("pages"),
        }
    }

    /// Whether a successful response hides the element that triggered it.
    pub const fn hides_trigger(&self) -> bool {
        matches!(self, ActionKind::Like | ActionKind::AddPage)
    }

    /// Build the request from the trigger element as it is right now.
    ///
    /// Missing data attributes are sent as empty strings.
    pub fn build_request(&self, trigger: &Element) -> EndpointRequest {
        let attr = |name: &str| trigger.data_attr(name).unwrap_or_default().to_string();
        match self {
            ActionKind::Like => EndpointRequest::Like {
                category_id: attr("catid"),
            },
            ActionKind::Suggest => EndpointRequest::Suggest {
                query: trigger.value.clone(),
            },
            ActionKind::AddPage => EndpointRequest::AddPage(AddPageParams {
                category_id: attr("catid"),
                url: attr("url"),
                title: attr("title"),
                user: attr("user"),
            }),
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ActionKind::Like => "like",
            ActionKind::Suggest => "suggest",
            ActionKind::AddPage => "add-page",
        })
    }
}

/// Listener table produced by binding the widget actions to a mounted page.
#[derive(Debug, Clone, Default)]
pub struct EventBinder {
    listeners: HashMap<(ElementRef, Trigger), ActionKind>,
    targets: HashMap<ActionKind, ElementRef>,
}

impl EventBinder {
    /// Register every widget action on the elements currently in `page`.
    ///
    /// Call once after the page is mounted.
    pub fn bind(page: &Page) -> Self {
        let mut binder = Self::default();

        for action in ActionKind::ALL {
            let selector = action.trigger_selector();
            let mut bound = 0usize;
            for el in page.query_all(&selector) {
                binder.listeners.insert((el, action.trigger()), action);
                bound += 1;
            }

            let target_selector = action.target_selector();
            match page.query(&target_selector) {
                Some(target) => {
                    binder.targets.insert(action, target);
                }
                None => debug!(%action, target = %target_selector, "Target element not present"),
            }

            if bound == 0 {
                debug!(%action, %selector, "No elements to bind");
            } else {
                debug!(%action, %selector, bound, "Bound listeners");
            }
        }

        binder
    }

    /// Action bound to `trigger` events on `el`, if any.
    pub fn listener(&self, el: ElementRef, trigger: Trigger) -> Option<ActionKind> {
        self.listeners.get(&(el, trigger)).copied()
    }

    /// Target element updated by `action`, if it was present at bind time.
    pub fn target(&self, action: ActionKind) -> Option<ElementRef> {
        self.targets.get(&action).copied()
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }
}
