//! Handles for in-flight requests.

use crate::binding::ActionKind;
use crate::cancellation::CancellationToken;
use crate::page::ElementRef;

/// Cancellable handle for one dispatched request.
///
/// Cancelling a handle stops the request task if it is still waiting on its
/// debounce interval or the server; a completion that was already delivered
/// is unaffected.
#[derive(Debug, Clone)]
pub struct RequestHandle {
    seq: u64,
    action: ActionKind,
    trigger: ElementRef,
    token: CancellationToken,
}

impl RequestHandle {
    pub(crate) fn new(seq: u64, action: ActionKind, trigger: ElementRef) -> Self {
        Self {
            seq,
            action,
            trigger,
            token: CancellationToken::new(),
        }
    }

    /// Sequence number assigned at dispatch; strictly increasing per session.
    pub fn seq(&self) -> u64 {
        self.seq
    }

    pub fn action(&self) -> ActionKind {
        self.action
    }

    pub fn trigger(&self) -> ElementRef {
        self.trigger
    }

    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    pub(crate) fn token(&self) -> &CancellationToken {
        &self.token
    }
}
