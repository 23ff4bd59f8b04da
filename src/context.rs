//! Application Context
//!
//! Shared handles provided via Leptos Context API: the backend client and
//! the toast slot.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::HttpBackend;
use crate::notify::{Notice, ToastState, TOAST_DURATION_MS};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    backend: StoredValue<HttpBackend>,
    /// Toast on screen - read
    pub toasts: ReadSignal<ToastState>,
    /// Toast on screen - write
    set_toasts: WriteSignal<ToastState>,
}

impl AppContext {
    pub fn new(backend: HttpBackend) -> Self {
        let (toasts, set_toasts) = signal(ToastState::default());
        Self {
            backend: StoredValue::new(backend),
            toasts,
            set_toasts,
        }
    }

    pub fn backend(&self) -> HttpBackend {
        self.backend.get_value()
    }

    /// Show a toast and schedule its expiry
    pub fn notify(&self, notice: Notice) {
        let Some(id) = self.set_toasts.try_update(|toasts| toasts.show(notice)) else {
            return;
        };
        let set_toasts = self.set_toasts;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            set_toasts.update(|toasts| {
                toasts.expire(id);
            });
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
