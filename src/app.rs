//! Task Page App
//!
//! Public task page: stats, create/edit form, filters and the task list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::HttpBackend;
use crate::components::{ConfirmModal, StatsPanel, TaskFilterBar, TaskFormPanel, TaskList, ToastHost};
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::routing::{take_edit_target, ADMIN_PATH};
use crate::store::{dispatch_task, TaskBoard, TaskBoardStoreFields};

#[component]
pub fn TaskApp() -> impl IntoView {
    let ctx = AppContext::new(HttpBackend::new(UiConfig::from_document()));
    // `?edit=<id>` from the admin page; applied once the tasks arrive
    let store = Store::new(TaskBoard::with_pending_edit(take_edit_target()));

    provide_context(ctx);
    provide_context(store);

    // Initial snapshot
    Effect::new(move |_| {
        if let Some(job) = store.try_update(|board| board.load()) {
            dispatch_task(ctx, store, Ok(job));
        }
    });

    let pending = Signal::derive(move || {
        store.confirm().with(|gate| gate.pending().map(|p| (p.title.clone(), p.message.clone())))
    });
    let on_confirm = Callback::new(move |_| {
        if let Some(outcome) = store.try_update(|board| board.confirm_delete()).flatten() {
            dispatch_task(ctx, store, outcome);
        }
    });
    let on_cancel = Callback::new(move |_| store.update(|board| board.dismiss_confirm()));

    view! {
        <div class="container">
            <header class="header">
                <h1>"Task Manager"</h1>
                <a class="admin-link" href=ADMIN_PATH>"Admin panel"</a>
            </header>

            <StatsPanel />
            <TaskFormPanel />
            <TaskFilterBar />
            <TaskList />
        </div>

        <ConfirmModal pending=pending on_confirm=on_confirm on_cancel=on_cancel />
        <ToastHost />
    }
}
