//! Tasks Table Component
//!
//! Every task of the dashboard payload. Editing happens on the task page.

use leptos::prelude::*;

use super::{PriorityBadge, StatusBadge};
use crate::routing::{edit_task_href, navigate};
use crate::store::{use_admin_store, AdminAction, AdminBoardStoreFields};

#[component]
pub fn TasksTable() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <div class="panel">
            <table class="tasks-table">
                <thead>
                    <tr>
                        <th>"ID"</th>
                        <th>"Title"</th>
                        <th>"Category"</th>
                        <th>"Priority"</th>
                        <th>"Status"</th>
                        <th>"Due date"</th>
                        <th>"Actions"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || {
                        let tasks = store.tasks().get();
                        if tasks.is_empty() {
                            return view! {
                                <tr><td colspan="7" class="loading-cell">"No tasks found"</td></tr>
                            }.into_any();
                        }
                        tasks.into_iter().map(|task| {
                            let id = task.id;
                            let category = task.category_name.clone().unwrap_or_else(|| "-".to_string());
                            let due = task.due_date_label().unwrap_or_else(|| "-".to_string());
                            view! {
                                <tr>
                                    <td>{id}</td>
                                    <td>{task.title.clone()}</td>
                                    <td>{category}</td>
                                    <td><PriorityBadge priority=task.priority /></td>
                                    <td><StatusBadge status=task.status /></td>
                                    <td>{due}</td>
                                    <td>
                                        <div class="btn-group">
                                            <button
                                                class="btn btn-primary btn-small"
                                                on:click=move |_| navigate(&edit_task_href(id))
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn-danger btn-small"
                                                on:click=move |_| store.update(|board| board.ask(AdminAction::DeleteTask(id)))
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </td>
                                </tr>
                            }
                        }).collect_view().into_any()
                    }}
                </tbody>
            </table>
        </div>
    }
}
