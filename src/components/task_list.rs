//! Task List Component
//!
//! Filtered task cards of the task page. The list is rebuilt from scratch
//! whenever the tasks or the filters change.

use leptos::prelude::*;

use super::{CategoryBadge, PriorityBadge, StatusBadge};
use crate::context::use_app_context;
use crate::models::Task;
use crate::store::{dispatch_task, use_task_store, TaskAction, TaskBoardStoreFields};

#[component]
pub fn TaskList() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_task_store();

    let visible = Memo::new(move |_| {
        let filters = store.filters().get();
        store.tasks().with(|tasks| filters.apply(tasks))
    });
    let total = move || store.tasks().with(Vec::len);

    let on_action = Callback::new(move |action: TaskAction| match action {
        TaskAction::Complete(id) => {
            if let Some(outcome) = store.try_update(|board| board.complete(id)) {
                dispatch_task(ctx, store, outcome);
            }
        }
        TaskAction::Edit(id) => store.update(|board| {
            board.begin_edit(id);
        }),
        TaskAction::Delete(id) => store.update(|board| board.ask_delete(id)),
    });

    view! {
        <section class="tasks-section">
            <div class="tasks-header">
                <h2>"Tasks"</h2>
                <span class="task-count">{move || format!("{} tasks", total())}</span>
            </div>

            <Show when=move || store.load_failed().get()>
                <div class="load-error">"Tasks could not be loaded."</div>
            </Show>

            <Show
                when=move || store.loaded().get()
                fallback=|| view! { <div class="loading">"Loading tasks..."</div> }
            >
                {move || {
                    let tasks = visible.get();
                    if tasks.is_empty() {
                        let message = if total() == 0 {
                            "No tasks yet. Add your first task above."
                        } else {
                            "No tasks match the selected filters."
                        };
                        view! { <div class="empty-state"><p>{message}</p></div> }.into_any()
                    } else {
                        view! {
                            <div class="tasks-list">
                                {tasks.into_iter()
                                    .map(|task| view! { <TaskCard task=task on_action=on_action /> })
                                    .collect_view()}
                            </div>
                        }.into_any()
                    }
                }}
            </Show>
        </section>
    }
}

#[component]
pub fn TaskCard(task: Task, on_action: Callback<TaskAction>) -> impl IntoView {
    let id = task.id;
    let completed = task.is_completed();
    let description = task.description_text().map(str::to_string);
    let due = task.due_date_label();

    view! {
        <div class={if completed { "task-card completed" } else { "task-card" }} data-id=id.to_string()>
            <div class="task-header">
                <h3 class="task-title">{task.title.clone()}</h3>
                <div class="task-badges">
                    <CategoryBadge task=task.clone() />
                    <PriorityBadge priority=task.priority />
                    <StatusBadge status=task.status />
                </div>
            </div>
            {description.map(|text| view! { <p class="task-description">{text}</p> })}
            <div class="task-meta">
                <span class="task-date">{due.map(|date| format!("Due: {}", date))}</span>
                <div class="task-actions">
                    {(!completed).then(|| view! {
                        <button
                            class="btn btn-primary btn-small"
                            on:click=move |_| on_action.run(TaskAction::Complete(id))
                        >
                            "Complete"
                        </button>
                    })}
                    <button class="btn btn-secondary btn-small" on:click=move |_| on_action.run(TaskAction::Edit(id))>
                        "Edit"
                    </button>
                    <button class="btn btn-danger btn-small" on:click=move |_| on_action.run(TaskAction::Delete(id))>
                        "Delete"
                    </button>
                </div>
            </div>
        </div>
    }
}
