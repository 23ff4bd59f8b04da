//! Task Form Component
//!
//! Create/edit form of the task page. Whether a submit creates or updates
//! is decided by the board's edit target.

use leptos::html;
use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::{Priority, Status};
use crate::store::{dispatch_task, use_task_store, TaskBoardStoreFields};

#[component]
pub fn TaskFormPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_task_store();
    let form = store.form();
    let form_ref = NodeRef::<html::Form>::new();

    let editing = move || store.editing().get().is_some();

    // Bring the form into view when an edit starts
    Effect::new(move |_| {
        if editing() {
            if let Some(el) = form_ref.get() {
                el.scroll_into_view();
            }
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(outcome) = store.try_update(|board| board.submit()) {
            dispatch_task(ctx, store, outcome);
        }
    };

    let on_cancel = move |_| store.update(|board| board.cancel_edit());

    view! {
        <form class="task-form" node_ref=form_ref on:submit=on_submit>
            <h2>{move || if editing() { "Edit task" } else { "New task" }}</h2>

            <div class="form-group">
                <label for="task-title">"Title *"</label>
                <input
                    id="task-title"
                    type="text"
                    placeholder="What needs to be done?"
                    prop:value=move || form.with(|f| f.title.clone())
                    on:input=move |ev| form.update(|f| f.title = event_target_value(&ev))
                />
            </div>

            <div class="form-group">
                <label for="task-description">"Description"</label>
                <textarea
                    id="task-description"
                    rows="3"
                    prop:value=move || form.with(|f| f.description.clone())
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
            </div>

            <div class="form-row">
                <div class="form-group">
                    <label for="task-category">"Category"</label>
                    <select
                        id="task-category"
                        on:change=move |ev| form.update(|f| f.category = event_target_value(&ev))
                    >
                        <option value="" prop:selected=move || form.with(|f| f.category.is_empty())>
                            "No category"
                        </option>
                        {move || store.categories().get().into_iter().map(|category| {
                            let value = category.id.to_string();
                            let selected = {
                                let value = value.clone();
                                move || form.with(|f| f.category == value)
                            };
                            view! { <option value=value prop:selected=selected>{category.name}</option> }
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="task-priority">"Priority"</label>
                    <select
                        id="task-priority"
                        on:change=move |ev| {
                            if let Some(priority) = Priority::from_key(&event_target_value(&ev)) {
                                form.update(|f| f.priority = priority);
                            }
                        }
                    >
                        {Priority::ALL.into_iter().map(|priority| view! {
                            <option
                                value=priority.key()
                                prop:selected=move || form.with(|f| f.priority == priority)
                            >
                                {priority.label()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="task-status">"Status"</label>
                    <select
                        id="task-status"
                        on:change=move |ev| {
                            if let Some(status) = Status::from_key(&event_target_value(&ev)) {
                                form.update(|f| f.status = status);
                            }
                        }
                    >
                        {Status::ALL.into_iter().map(|status| view! {
                            <option
                                value=status.key()
                                prop:selected=move || form.with(|f| f.status == status)
                            >
                                {status.label()}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="form-group">
                    <label for="task-due">"Due date"</label>
                    <input
                        id="task-due"
                        type="date"
                        prop:value=move || form.with(|f| f.due_date.clone())
                        on:input=move |ev| form.update(|f| f.due_date = event_target_value(&ev))
                    />
                </div>
            </div>

            <div class="form-actions">
                <button type="submit" class="btn btn-primary" prop:disabled=move || store.busy().get()>
                    {move || if editing() { "Update task" } else { "Add task" }}
                </button>
                <Show when=editing>
                    <button type="button" class="btn btn-secondary" on:click=on_cancel>"Cancel"</button>
                </Show>
            </div>
        </form>
    }
}
