//! Task Badges
//!
//! Category, priority and status pills shared by both pages.

use leptos::prelude::*;

use crate::models::{Priority, Status, Task};

/// Category pill tinted with the category color; nothing for uncategorized tasks
#[component]
pub fn CategoryBadge(task: Task) -> impl IntoView {
    task.category_name.map(|name| {
        let color = task.category_color.unwrap_or_else(|| crate::models::DEFAULT_CATEGORY_COLOR.to_string());
        // 8-digit hex: the color at low alpha for the background
        let style = format!("background-color: {}20; color: {}", color, color);
        view! { <span class="badge category" style=style>{name}</span> }
    })
}

#[component]
pub fn PriorityBadge(priority: Priority) -> impl IntoView {
    view! {
        <span class=format!("badge priority-{}", priority.key())>{priority.label()}</span>
    }
}

#[component]
pub fn StatusBadge(status: Status) -> impl IntoView {
    view! {
        <span class=format!("badge status-{}", status.key())>{status.label()}</span>
    }
}
