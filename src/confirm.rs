//! Confirmation Gate
//!
//! Holds at most one destructive action waiting for the user. Requesting a
//! new confirmation overwrites the pending one.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirm<A> {
    pub title: String,
    pub message: String,
    pub action: A,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmGate<A> {
    Idle,
    Pending(PendingConfirm<A>),
}

impl<A> Default for ConfirmGate<A> {
    fn default() -> Self {
        ConfirmGate::Idle
    }
}

impl<A> ConfirmGate<A> {
    pub fn request(&mut self, title: impl Into<String>, message: impl Into<String>, action: A) {
        *self = ConfirmGate::Pending(PendingConfirm {
            title: title.into(),
            message: message.into(),
            action,
        });
    }

    /// Resolve the gate. The gate is idle again before the caller runs the
    /// returned action, so the action may open a new confirmation.
    pub fn confirm(&mut self) -> Option<A> {
        match std::mem::take(self) {
            ConfirmGate::Pending(pending) => Some(pending.action),
            ConfirmGate::Idle => None,
        }
    }

    /// Cancel, backdrop click or Escape
    pub fn dismiss(&mut self) {
        *self = ConfirmGate::Idle;
    }

    pub fn pending(&self) -> Option<&PendingConfirm<A>> {
        match self {
            ConfirmGate::Pending(pending) => Some(pending),
            ConfirmGate::Idle => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, ConfirmGate::Pending(_))
    }
}
