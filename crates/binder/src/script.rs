//! Scripted interaction replay.
//!
//! A script is a JSON array of steps driven against a mounted session, e.g.
//!
//! ```json
//! [
//!   {"step": "type", "selector": "#suggestion", "text": "py", "interval_ms": 50},
//!   {"step": "click", "selector": ".rango-add", "index": 1},
//!   {"step": "settle"}
//! ]
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::handle::RequestHandle;
use crate::selector::Selector;
use crate::session::{Session, UiEvent};
use crate::source::FragmentSource;

/// One scripted interaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "step", rename_all = "snake_case")]
pub enum Step {
    /// Click the `index`-th element matching `selector`.
    Click {
        selector: Selector,
        #[serde(default)]
        index: usize,
    },
    /// Set an input's whole value and fire one keyup.
    Input {
        selector: Selector,
        #[serde(default)]
        index: usize,
        value: String,
    },
    /// Type `text` one character at a time, one keyup per character.
    Type {
        selector: Selector,
        #[serde(default)]
        index: usize,
        text: String,
        #[serde(default)]
        interval_ms: u64,
    },
    /// Sleep, then apply whatever completions arrived.
    Wait { millis: u64 },
    /// Wait for all outstanding requests.
    Settle,
}

/// An ordered list of steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl<S: FragmentSource> Session<S> {
    /// Run every step of `script`, then settle.
    ///
    /// Returns the handles of all requests the script dispatched.
    pub async fn run_script(&mut self, script: &Script) -> Result<Vec<RequestHandle>> {
        let mut handles = Vec::new();

        for step in &script.steps {
            debug!(?step, "Running script step");
            match step {
                Step::Click { selector, index } => {
                    let el = self.page().nth(selector, *index)?;
                    handles.extend(self.dispatch(UiEvent::Click(el)));
                }
                Step::Input {
                    selector,
                    index,
                    value,
                } => {
                    let el = self.page().nth(selector, *index)?;
                    handles.extend(self.dispatch(UiEvent::Input {
                        el,
                        value: value.clone(),
                    }));
                }
                Step::Type {
                    selector,
                    index,
                    text,
                    interval_ms,
                } => {
                    let el = self.page().nth(selector, *index)?;
                    let mut typed = self.page().get(el).map(|e| e.value.clone()).unwrap_or_default();
                    for (i, c) in text.chars().enumerate() {
                        if i > 0 && *interval_ms > 0 {
                            tokio::time::sleep(Duration::from_millis(*interval_ms)).await;
                            self.apply_ready();
                        }
                        typed.push(c);
                        handles.extend(self.dispatch(UiEvent::Input {
                            el,
                            value: typed.clone(),
                        }));
                    }
                }
                Step::Wait { millis } => {
                    tokio::time::sleep(Duration::from_millis(*millis)).await;
                    self.apply_ready();
                }
                Step::Settle => self.settle().await,
            }
        }

        self.settle().await;
        Ok(handles)
    }
}
