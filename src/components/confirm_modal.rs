//! Confirm Modal Component
//!
//! Blocking confirmation dialog for destructive actions. Cancel, a click on
//! the backdrop and Escape all dismiss it.

use leptos::ev;
use leptos::prelude::*;

/// Dialog shown while `pending` holds a `(title, message)` pair
#[component]
pub fn ConfirmModal(
    #[prop(into)] pending: Signal<Option<(String, String)>>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    view! {
        {move || pending.get().map(|(title, message)| view! {
            <ConfirmDialog title=title message=message on_confirm=on_confirm on_cancel=on_cancel />
        })}
    }
}

#[component]
fn ConfirmDialog(
    title: String,
    message: String,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    // Escape is only listened for while the dialog is mounted
    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            on_cancel.run(());
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <div class="modal show" on:click=move |_| on_cancel.run(())>
            <div class="modal-content" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button class="modal-close" on:click=move |_| on_cancel.run(())>"×"</button>
                </div>
                <p class="modal-message">{message}</p>
                <div class="modal-actions">
                    <button class="btn btn-secondary" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn btn-danger" on:click=move |_| on_confirm.run(())>"Confirm"</button>
                </div>
            </div>
        </div>
    }
}
