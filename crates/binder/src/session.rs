//! Event dispatch and completion handling for a mounted page.
//!
//! Responsibilities:
//! - Route UI events to the bound action and spawn one request task each.
//! - Apply completions to the page under the configured [`ApplyPolicy`].
//! - Debounce and cancel superseded suggestion requests under `Latest`.
//!
//! Does NOT handle:
//! - Selector resolution or request construction (see `binding`).
//! - HTTP (delegated to the [`FragmentSource`]).
//!
//! Invariants:
//! - Request tasks never touch the page; they send exactly one [`Completion`].
//!   A task that panics instead is applied as a failure of its request.
//! - Sequence numbers increase strictly across all actions of a session.
//! - Under `ApplyPolicy::Latest`, a target only accepts the completion of the
//!   most recently dispatched request for its action.
//! - A failed request never changes target contents or hides its trigger.
//! - A target stays `Loading` while a request whose result it would still
//!   accept is in flight.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use rango_client::{ClientError, Fragment};
use rango_config::{ApplyPolicy, BinderConfig};
use tokio::sync::mpsc;
use tokio::task::{self, JoinError, JoinSet};
use tracing::{debug, warn};

use crate::binding::{ActionKind, EventBinder, Trigger};
use crate::handle::RequestHandle;
use crate::page::{Element, ElementRef, Page, TargetStatus};
use crate::source::FragmentSource;

/// A UI event delivered to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    Click(ElementRef),
    KeyUp(ElementRef),
    /// Replace an input's value, then fire `KeyUp` on it.
    Input { el: ElementRef, value: String },
}

/// Result of a request task.
#[derive(Debug, Clone)]
pub enum Outcome {
    Loaded(Fragment),
    Failed(Arc<ClientError>),
    Cancelled,
}

/// Message sent from a request task back to its session.
#[derive(Debug, Clone)]
pub struct Completion {
    pub seq: u64,
    pub action: ActionKind,
    pub trigger: ElementRef,
    pub outcome: Outcome,
}

/// What applying a completion did to the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// Target contents replaced.
    Updated,
    /// Target marked as failed.
    Failed,
    /// Superseded by a newer request; target untouched.
    Stale,
    Cancelled,
}

enum Step {
    Completion(Completion),
    Joined(Option<Result<(task::Id, ()), JoinError>>),
}

/// Owner of a mounted page and its in-flight requests.
pub struct Session<S: FragmentSource> {
    page: Page,
    binder: EventBinder,
    source: Arc<S>,
    config: BinderConfig,
    tx: mpsc::Sender<Completion>,
    rx: mpsc::Receiver<Completion>,
    tasks: JoinSet<()>,
    task_seqs: HashMap<task::Id, u64>,
    in_flight: HashMap<u64, ActionKind>,
    next_seq: u64,
    latest: HashMap<ActionKind, u64>,
    pending_suggest: Option<RequestHandle>,
}

impl<S: FragmentSource> Session<S> {
    /// Mount `page`: bind every widget action and prepare the completion channel.
    pub fn mount(page: Page, source: S, config: BinderConfig) -> Self {
        let binder = EventBinder::bind(&page);
        let (tx, rx) = mpsc::channel(config.channel_capacity.max(1));
        debug!(
            elements = page.len(),
            listeners = binder.listener_count(),
            policy = %config.apply_policy,
            "Mounted page"
        );

        Self {
            page,
            binder,
            source: Arc::new(source),
            config,
            tx,
            rx,
            tasks: JoinSet::new(),
            task_seqs: HashMap::new(),
            in_flight: HashMap::new(),
            next_seq: 0,
            latest: HashMap::new(),
            pending_suggest: None,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn into_page(self) -> Page {
        self.page
    }

    pub fn binder(&self) -> &EventBinder {
        &self.binder
    }

    pub fn config(&self) -> &BinderConfig {
        &self.config
    }

    /// Requests dispatched whose completion has not been applied yet.
    pub fn outstanding(&self) -> usize {
        self.in_flight.len()
    }

    /// Route `event` to its listener and spawn the request.
    ///
    /// Returns `None` when no listener is bound for the element and trigger.
    pub fn dispatch(&mut self, event: UiEvent) -> Option<RequestHandle> {
        let (el, trigger) = match event {
            UiEvent::Click(el) => (el, Trigger::Click),
            UiEvent::KeyUp(el) => (el, Trigger::KeyUp),
            UiEvent::Input { el, value } => {
                if !self.page.set_value(el, &value) {
                    return None;
                }
                (el, Trigger::KeyUp)
            }
        };

        let Some(action) = self.binder.listener(el, trigger) else {
            debug!(%el, ?trigger, "No listener bound");
            return None;
        };
        let request = action.build_request(self.page.get(el)?);

        self.next_seq += 1;
        let handle = RequestHandle::new(self.next_seq, action, el);
        self.latest.insert(action, handle.seq());

        if let Some(target) = self.binder.target(action)
            && let Some(element) = self.page.get_mut(target)
        {
            element.status = TargetStatus::Loading;
        }

        let mut debounce = Duration::ZERO;
        if action == ActionKind::Suggest && self.config.apply_policy == ApplyPolicy::Latest {
            debounce = self.config.effective_debounce();
            if let Some(previous) = self.pending_suggest.replace(handle.clone()) {
                debug!(seq = previous.seq(), "Cancelling superseded suggestion request");
                previous.cancel();
            }
        }

        debug!(%action, seq = handle.seq(), %el, params = ?request.params(), "Dispatching request");
        self.spawn_request(handle.clone(), request, debounce);
        Some(handle)
    }

    fn spawn_request(
        &mut self,
        handle: RequestHandle,
        request: rango_client::EndpointRequest,
        debounce: Duration,
    ) {
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let seq = handle.seq();
        self.in_flight.insert(seq, handle.action());

        let task = self.tasks.spawn(async move {
            let token = handle.token().clone();
            let outcome = tokio::select! {
                biased;
                _ = token.cancelled() => Outcome::Cancelled,
                result = async {
                    if !debounce.is_zero() {
                        tokio::time::sleep(debounce).await;
                    }
                    source.fetch(request).await
                } => match result {
                    Ok(fragment) => Outcome::Loaded(fragment),
                    Err(e) => Outcome::Failed(Arc::new(e)),
                },
            };

            let completion = Completion {
                seq: handle.seq(),
                action: handle.action(),
                trigger: handle.trigger(),
                outcome,
            };
            if tx.send(completion).await.is_err() {
                debug!(seq = handle.seq(), "Session dropped before completion was delivered");
            }
        });
        self.task_seqs.insert(task.id(), seq);
    }

    /// Apply one completion to the page.
    pub fn apply(&mut self, completion: Completion) -> Applied {
        let Completion {
            seq,
            action,
            trigger,
            outcome,
        } = completion;

        self.finish(seq);
        match outcome {
            Outcome::Cancelled => self.apply_cancelled(action, seq),
            Outcome::Loaded(fragment) => self.apply_loaded(action, seq, trigger, fragment),
            Outcome::Failed(err) => {
                warn!(%action, seq, error = %err, "Fragment request failed");
                self.apply_failed(action, seq, err.to_string())
            }
        }
    }

    fn finish(&mut self, seq: u64) {
        self.in_flight.remove(&seq);
        if self
            .pending_suggest
            .as_ref()
            .is_some_and(|pending| pending.seq() == seq)
        {
            self.pending_suggest = None;
        }
    }

    fn is_latest(&self, action: ActionKind, seq: u64) -> bool {
        self.latest.get(&action) == Some(&seq)
    }

    fn accepts(&self, action: ActionKind, seq: u64) -> bool {
        self.config.apply_policy == ApplyPolicy::Arrival || self.is_latest(action, seq)
    }

    /// Whether no request that the target would still accept is in flight.
    fn target_settled(&self, action: ActionKind, seq: u64) -> bool {
        match self.config.apply_policy {
            ApplyPolicy::Latest => self.is_latest(action, seq),
            ApplyPolicy::Arrival => !self.in_flight.values().any(|a| *a == action),
        }
    }

    fn apply_cancelled(&mut self, action: ActionKind, seq: u64) -> Applied {
        debug!(%action, seq, "Request cancelled");
        if self.target_settled(action, seq)
            && let Some(element) = self.target_mut(action)
            && element.status == TargetStatus::Loading
        {
            element.status = TargetStatus::Idle;
        }
        Applied::Cancelled
    }

    fn apply_loaded(
        &mut self,
        action: ActionKind,
        seq: u64,
        trigger: ElementRef,
        fragment: Fragment,
    ) -> Applied {
        if action.hides_trigger()
            && let Some(element) = self.page.get_mut(trigger)
        {
            element.hidden = true;
        }
        if !self.accepts(action, seq) {
            debug!(%action, seq, "Discarding stale response");
            return Applied::Stale;
        }
        let settled = self.target_settled(action, seq);
        if let Some(element) = self.target_mut(action) {
            element.html = fragment.into_string();
            if settled {
                element.status = TargetStatus::Idle;
            }
        }
        debug!(%action, seq, "Applied fragment");
        Applied::Updated
    }

    fn apply_failed(&mut self, action: ActionKind, seq: u64, message: String) -> Applied {
        if !self.accepts(action, seq) {
            return Applied::Stale;
        }
        if self.target_settled(action, seq)
            && let Some(element) = self.target_mut(action)
        {
            element.status = TargetStatus::Failed { message };
        }
        Applied::Failed
    }

    fn target_mut(&mut self, action: ActionKind) -> Option<&mut Element> {
        let target = self.binder.target(action)?;
        self.page.get_mut(target)
    }

    /// Account for a finished task. A task that ended without reporting has
    /// its request applied as cancelled or failed.
    fn on_joined(&mut self, joined: Result<(task::Id, ()), JoinError>) -> Option<Applied> {
        let err = match joined {
            Ok((id, ())) => {
                self.task_seqs.remove(&id);
                return None;
            }
            Err(err) => err,
        };
        let seq = self.task_seqs.remove(&err.id())?;
        let action = *self.in_flight.get(&seq)?;
        self.finish(seq);

        if err.is_cancelled() {
            return Some(self.apply_cancelled(action, seq));
        }
        warn!(%action, seq, error = %err, "Request task panicked");
        Some(self.apply_failed(action, seq, format!("Request task failed: {err}")))
    }

    /// Apply every completion already received, without waiting.
    pub fn apply_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.rx.try_recv() {
            self.apply(completion);
            applied += 1;
        }
        while let Some(joined) = self.tasks.try_join_next_with_id() {
            if self.on_joined(joined).is_some() {
                applied += 1;
            }
        }
        applied
    }

    async fn next_step(&mut self) -> Step {
        tokio::select! {
            biased;
            Some(completion) = self.rx.recv() => Step::Completion(completion),
            joined = self.tasks.join_next_with_id() => Step::Joined(joined),
        }
    }

    /// Wait for the next completion and apply it.
    ///
    /// Returns `None` when nothing is outstanding.
    pub async fn apply_next(&mut self) -> Option<Applied> {
        while !self.in_flight.is_empty() {
            match self.next_step().await {
                Step::Completion(completion) => return Some(self.apply(completion)),
                Step::Joined(Some(joined)) => {
                    if let Some(applied) = self.on_joined(joined) {
                        return Some(applied);
                    }
                }
                Step::Joined(None) => {
                    let completion = self.rx.try_recv().ok()?;
                    return Some(self.apply(completion));
                }
            }
        }
        None
    }

    /// Wait for every outstanding request and apply all completions in
    /// arrival order.
    pub async fn settle(&mut self) {
        loop {
            match self.next_step().await {
                Step::Completion(completion) => {
                    self.apply(completion);
                }
                Step::Joined(Some(joined)) => {
                    self.on_joined(joined);
                }
                Step::Joined(None) => break,
            }
        }
        self.apply_ready();
    }
}
