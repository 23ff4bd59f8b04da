//! Notifications
//!
//! One toast at a time; a newer toast replaces the visible one and an
//! expiry timer only hides the toast it was started for.

use crate::error::{ApiError, FormError};

/// How long a toast stays visible
pub const TOAST_DURATION_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl Severity {
    pub fn class(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }
}

/// A message for the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self { severity: Severity::Success, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { severity: Severity::Info, message: message.into() }
    }

    /// Error notice for a failed backend call. Transport and decode failures
    /// are logged and reported with `fallback`.
    pub fn from_error(err: &ApiError, fallback: &str) -> Self {
        match err {
            ApiError::Rejected(_) => tracing::warn!(error = %err, "{}", fallback),
            _ => tracing::error!(error = %err, "{}", fallback),
        }
        Self::error(err.user_message(fallback))
    }
}

impl From<FormError> for Notice {
    fn from(err: FormError) -> Self {
        Notice::error(err.to_string())
    }
}

/// Toast currently on screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub notice: Notice,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastState {
    current: Option<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show `notice`, replacing whatever is visible. Returns the id the
    /// expiry timer must hand back to `expire`.
    pub fn show(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        self.current = Some(Toast { id: self.next_id, notice });
        self.next_id
    }

    /// Hide toast `id` if it is still the visible one
    pub fn expire(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|t| t.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_toast_replaces_visible_one() {
        let mut toasts = ToastState::default();
        toasts.show(Notice::info("first"));
        toasts.show(Notice::error("second"));

        let current = toasts.current().unwrap();
        assert_eq!(current.notice.message, "second");
        assert_eq!(current.notice.severity, Severity::Error);
    }

    #[test]
    fn test_stale_timer_keeps_successor() {
        let mut toasts = ToastState::default();
        let first = toasts.show(Notice::success("saved"));
        let second = toasts.show(Notice::success("deleted"));

        assert!(!toasts.expire(first));
        assert_eq!(toasts.current().unwrap().notice.message, "deleted");

        assert!(toasts.expire(second));
        assert!(toasts.current().is_none());
    }

    #[test]
    fn test_form_error_notice() {
        let notice = Notice::from(FormError::MissingTitle);
        assert_eq!(notice, Notice::error("Title is required"));
    }
}
