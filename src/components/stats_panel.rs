//! Stats Panel Component
//!
//! Counters and the completion ring of the task page.

use leptos::prelude::*;

use crate::stats::{ring_circumference, TaskStats};
use crate::store::{use_task_store, TaskBoardStoreFields};

#[component]
pub fn StatsPanel() -> impl IntoView {
    let store = use_task_store();
    let stats = Memo::new(move |_| store.tasks().with(|tasks| TaskStats::from_tasks(tasks)));
    let circumference = ring_circumference();

    view! {
        <section class="stats-panel">
            <div class="stat-item">
                <span class="stat-value">{move || stats.get().total}</span>
                <span class="stat-label">"Total"</span>
            </div>
            <div class="stat-item">
                <span class="stat-value">{move || stats.get().completed}</span>
                <span class="stat-label">"Completed"</span>
            </div>
            <div class="stat-item">
                <span class="stat-value">{move || stats.get().pending}</span>
                <span class="stat-label">"Pending"</span>
            </div>
            <div class="stat-item">
                <span class="stat-value">{move || stats.get().in_progress}</span>
                <span class="stat-label">"In Progress"</span>
            </div>
            <div class="progress-ring">
                <svg width="100" height="100" viewBox="0 0 100 100">
                    <circle class="progress-ring-track" cx="50" cy="50" r="45" fill="none" stroke-width="8" />
                    <circle
                        class="progress-ring-fill"
                        cx="50"
                        cy="50"
                        r="45"
                        fill="none"
                        stroke-width="8"
                        stroke-dasharray=circumference.to_string()
                        stroke-dashoffset=move || stats.get().ring_offset().to_string()
                    />
                </svg>
                <span class="progress-percent">{move || format!("{}%", stats.get().percent())}</span>
            </div>
        </section>
    }
}
