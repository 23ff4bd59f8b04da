//! Admin Page App
//!
//! Sidebar navigation with dashboard, tasks, categories and settings tabs.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands::HttpBackend;
use crate::components::{
    AdminSidebar, CategoriesOverview, CategoryFormPanel, CategoryGrid, ConfirmModal, DangerZone, DatabaseInfo,
    RecentTasks, StatCards, TasksTable, ToastHost,
};
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::store::{dispatch_admin, AdminBoard, AdminBoardStoreFields, AdminTab};

#[component]
pub fn AdminApp() -> impl IntoView {
    let ctx = AppContext::new(HttpBackend::new(UiConfig::from_document()));
    let store = Store::new(AdminBoard::default());

    provide_context(ctx);
    provide_context(store);

    // Initial snapshot
    Effect::new(move |_| {
        if let Some(job) = store.try_update(|board| board.load()) {
            dispatch_admin(ctx, store, Ok(job));
        }
    });

    let tab = store.tab();
    let pending = Signal::derive(move || {
        store.confirm().with(|gate| gate.pending().map(|p| (p.title.clone(), p.message.clone())))
    });
    let on_confirm = Callback::new(move |_| {
        if let Some(outcome) = store.try_update(|board| board.confirm_action()).flatten() {
            dispatch_admin(ctx, store, outcome);
        }
    });
    let on_cancel = Callback::new(move |_| store.update(|board| board.dismiss_confirm()));

    view! {
        <div class="admin-layout">
            <AdminSidebar />
            <main class="admin-main">
                <header class="admin-header">
                    <h1>{move || tab.get().label()}</h1>
                </header>

                <Show when=move || store.load_failed().get()>
                    <div class="load-error">"Dashboard data could not be loaded."</div>
                </Show>

                // Settings renders whatever the load state
                <Show when=move || tab.get() == AdminTab::Settings>
                    <DatabaseInfo />
                    <DangerZone />
                </Show>

                <Show
                    when=move || store.loaded().get()
                    fallback=move || view! {
                        {move || (tab.get() != AdminTab::Settings)
                            .then(|| view! { <div class="loading">"Loading dashboard..."</div> })}
                    }
                >
                    <Show when=move || tab.get() == AdminTab::Dashboard>
                        <StatCards />
                        <div class="dashboard-grid">
                            <RecentTasks />
                            <CategoriesOverview />
                        </div>
                    </Show>
                    <Show when=move || tab.get() == AdminTab::Tasks>
                        <TasksTable />
                    </Show>
                    <Show when=move || tab.get() == AdminTab::Categories>
                        <CategoryFormPanel />
                        <CategoryGrid />
                    </Show>
                </Show>
            </main>
        </div>

        <ConfirmModal pending=pending on_confirm=on_confirm on_cancel=on_cancel />
        <ToastHost />
    }
}
