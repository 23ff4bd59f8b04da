//! Task Filter Bar Component

use leptos::prelude::*;

use crate::models::{Priority, Status};
use crate::store::{use_task_store, TaskBoardStoreFields};

/// Category, status and priority selects; an empty value clears that filter
#[component]
pub fn TaskFilterBar() -> impl IntoView {
    let store = use_task_store();
    let filters = store.filters();

    view! {
        <div class="filters">
            <select
                class="filter-select"
                on:change=move |ev| filters.update(|f| f.set_category(&event_target_value(&ev)))
            >
                <option value="" prop:selected=move || filters.get().category.is_none()>"All categories"</option>
                {move || store.categories().get().into_iter().map(|category| {
                    let id = category.id;
                    view! {
                        <option
                            value=id.to_string()
                            prop:selected=move || filters.get().category == Some(id)
                        >
                            {category.name}
                        </option>
                    }
                }).collect_view()}
            </select>

            <select
                class="filter-select"
                on:change=move |ev| filters.update(|f| f.set_status(&event_target_value(&ev)))
            >
                <option value="" prop:selected=move || filters.get().status.is_none()>"All statuses"</option>
                {Status::ALL.into_iter().map(|status| view! {
                    <option value=status.key() prop:selected=move || filters.get().status == Some(status)>
                        {status.label()}
                    </option>
                }).collect_view()}
            </select>

            <select
                class="filter-select"
                on:change=move |ev| filters.update(|f| f.set_priority(&event_target_value(&ev)))
            >
                <option value="" prop:selected=move || filters.get().priority.is_none()>"All priorities"</option>
                {Priority::ALL.into_iter().map(|priority| view! {
                    <option value=priority.key() prop:selected=move || filters.get().priority == Some(priority)>
                        {priority.label()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}
