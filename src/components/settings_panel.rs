//! Settings Panel Components
//!
//! Database summary and the bulk operations of the settings tab.

use leptos::prelude::*;

use crate::store::{use_admin_store, AdminAction, AdminBoardStoreFields};

#[component]
pub fn DatabaseInfo() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <div class="panel">
            <h3>"Database"</h3>
            <div class="db-info">
                <div class="db-info-row">
                    <span>"Tasks"</span>
                    <strong>{move || store.stats().get().total}</strong>
                </div>
                <div class="db-info-row">
                    <span>"Categories"</span>
                    <strong>{move || store.categories().with(Vec::len)}</strong>
                </div>
                <div class="db-info-row">
                    <span>"Last update"</span>
                    <strong>{move || store.last_update().get().unwrap_or_else(|| "-".to_string())}</strong>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DangerZone() -> impl IntoView {
    let store = use_admin_store();
    let ask = move |action: AdminAction| store.update(|board| board.ask(action));

    view! {
        <div class="panel danger-zone">
            <h3>"Danger zone"</h3>
            <div class="danger-item">
                <div>
                    <strong>"Delete all tasks"</strong>
                    <p>"Removes every task. Categories are kept."</p>
                </div>
                <button class="btn btn-danger" on:click=move |_| ask(AdminAction::ClearTasks)>
                    "Delete all tasks"
                </button>
            </div>
            <div class="danger-item">
                <div>
                    <strong>"Reset database"</strong>
                    <p>"Removes all tasks and categories and restores the default categories."</p>
                </div>
                <button class="btn btn-danger" on:click=move |_| ask(AdminAction::ResetDatabase)>
                    "Reset database"
                </button>
            </div>
        </div>
    }
}
