//! Toast Component
//!
//! Renders the toast currently held by the app context.

use leptos::prelude::*;

use crate::context::use_app_context;

#[component]
pub fn ToastHost() -> impl IntoView {
    let ctx = use_app_context();
    let current = move || ctx.toasts.with(|toasts| toasts.current().cloned());

    view! {
        {move || current().map(|toast| view! {
            <div class=format!("toast show {}", toast.notice.severity.class()) role="status">
                {toast.notice.message}
            </div>
        })}
    }
}
