//! Admin Sidebar Component
//!
//! Tab navigation of the admin page.

use leptos::prelude::*;

use crate::routing::TASKS_PATH;
use crate::store::{use_admin_store, AdminBoardStoreFields, AdminTab};

#[component]
pub fn AdminSidebar() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <aside class="sidebar">
            <div class="sidebar-header">
                <h2>"Admin"</h2>
            </div>
            <nav class="sidebar-nav">
                {AdminTab::ALL.into_iter().map(|tab| {
                    let class = move || if store.tab().get() == tab { "nav-item active" } else { "nav-item" };
                    view! {
                        <button class=class on:click=move |_| store.update(|board| board.select_tab(tab))>
                            <span class="nav-icon">{tab.icon()}</span>
                            <span>{tab.label()}</span>
                        </button>
                    }
                }).collect_view()}
            </nav>
            <a class="nav-item back-link" href=TASKS_PATH>"← Back to tasks"</a>
        </aside>
    }
}
