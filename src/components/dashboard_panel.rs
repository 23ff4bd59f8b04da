//! Dashboard Panel Components
//!
//! Stat cards, recent tasks and the category overview of the admin
//! dashboard tab.

use leptos::prelude::*;

use super::{PriorityBadge, StatusBadge};
use crate::store::{recent_tasks, use_admin_store, AdminBoardStoreFields, AdminTab};

#[component]
pub fn StatCards() -> impl IntoView {
    let store = use_admin_store();
    let stats = store.stats();

    view! {
        <div class="stats-grid">
            <div class="stat-card">
                <span class="stat-value">{move || stats.get().total}</span>
                <span class="stat-label">"Total tasks"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{move || stats.get().completed}</span>
                <span class="stat-label">"Completed"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{move || stats.get().pending}</span>
                <span class="stat-label">"Pending"</span>
            </div>
            <div class="stat-card">
                <span class="stat-value">{move || store.categories().with(Vec::len)}</span>
                <span class="stat-label">"Categories"</span>
            </div>
        </div>
    }
}

#[component]
pub fn RecentTasks() -> impl IntoView {
    let store = use_admin_store();
    let recent = Memo::new(move |_| store.tasks().with(|tasks| recent_tasks(tasks)));

    view! {
        <div class="panel">
            <div class="panel-header">
                <h3>"Recent tasks"</h3>
                <button class="link-btn" on:click=move |_| store.update(|board| board.select_tab(AdminTab::Tasks))>
                    "View all"
                </button>
            </div>
            {move || {
                let tasks = recent.get();
                if tasks.is_empty() {
                    return view! { <p class="empty-text">"No tasks yet"</p> }.into_any();
                }
                tasks.into_iter().map(|task| {
                    let category = task.category_name.clone().map(|name| {
                        let style = format!("color: {}", task.category_color.clone().unwrap_or_default());
                        view! { <span class="task-category" style=style>{name}</span> }
                    });
                    view! {
                        <div class="recent-task-item">
                            <div class="task-info">
                                <span class="task-title">{task.title.clone()}</span>
                                <div class="task-meta">
                                    {category}
                                    <PriorityBadge priority=task.priority />
                                </div>
                            </div>
                            <StatusBadge status=task.status />
                        </div>
                    }
                }).collect_view().into_any()
            }}
        </div>
    }
}

#[component]
pub fn CategoriesOverview() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <div class="panel">
            <div class="panel-header">
                <h3>"Categories"</h3>
                <button class="link-btn" on:click=move |_| store.update(|board| board.select_tab(AdminTab::Categories))>
                    "View all"
                </button>
            </div>
            {move || {
                let categories = store.categories().get();
                if categories.is_empty() {
                    return view! { <p class="empty-text">"No categories yet"</p> }.into_any();
                }
                let stats = store.stats().get();
                categories.into_iter().map(|category| {
                    let count = stats.task_count(&category.name);
                    view! {
                        <div class="category-overview-item">
                            <div class="category-color" style=format!("background: {}", category.color)></div>
                            <span class="category-name">{category.name}</span>
                            <span class="category-count">{format!("{} tasks", count)}</span>
                        </div>
                    }
                }).collect_view().into_any()
            }}
        </div>
    }
}
