//! Category Manager Components
//!
//! New-category form and the category cards with their inline rename
//! editor.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::models::Category;
use crate::store::{dispatch_admin, use_admin_store, AdminAction, AdminBoardStoreFields};

#[component]
pub fn CategoryFormPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();
    let form = store.category_form();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(outcome) = store.try_update(|board| board.add_category()) {
            dispatch_admin(ctx, store, outcome);
        }
    };

    view! {
        <form class="category-form panel" on:submit=on_submit>
            <h3>"New category"</h3>
            <div class="form-row">
                <input
                    type="text"
                    placeholder="Category name"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <input
                    type="color"
                    prop:value=move || form.with(|f| f.color.clone())
                    on:input=move |ev| form.update(|f| f.color = event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary" prop:disabled=move || store.busy().get()>
                    "Add"
                </button>
            </div>
        </form>
    }
}

#[component]
pub fn CategoryGrid() -> impl IntoView {
    let store = use_admin_store();

    view! {
        <div class="categories-grid">
            {move || {
                let categories = store.categories().get();
                if categories.is_empty() {
                    return view! { <p class="empty-text">"No categories found"</p> }.into_any();
                }
                let stats = store.stats().get();
                categories.into_iter().map(|category| {
                    let count = stats.task_count(&category.name);
                    view! { <CategoryCard category=category task_count=count /> }
                }).collect_view().into_any()
            }}
        </div>
    }
}

#[component]
fn CategoryCard(category: Category, task_count: u32) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_admin_store();
    let id = category.id;

    let renaming = move || store.rename().with(|r| r.as_ref().is_some_and(|d| d.category_id == id));

    let submit_rename = move || {
        if let Some(outcome) = store.try_update(|board| board.submit_rename()).flatten() {
            dispatch_admin(ctx, store, outcome);
        }
    };

    let name = category.name.clone();
    view! {
        <div class="category-card" style=format!("border-left-color: {}", category.color)>
            <div class="category-header">
                <Show
                    when=renaming
                    fallback=move || view! { <div class="category-name">{name.clone()}</div> }
                >
                    <form
                        class="rename-form"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            submit_rename();
                        }
                    >
                        <input
                            type="text"
                            autofocus
                            prop:value=move || store.rename().with(|r| r.as_ref().map(|d| d.name.clone()).unwrap_or_default())
                            on:input=move |ev| store.rename().update(|r| {
                                if let Some(draft) = r.as_mut() {
                                    draft.name = event_target_value(&ev);
                                }
                            })
                            on:keydown=move |ev| {
                                if ev.key() == "Escape" {
                                    store.update(|board| board.cancel_rename());
                                }
                            }
                        />
                        <button type="submit" class="btn btn-primary btn-small">"Save"</button>
                        <button
                            type="button"
                            class="btn btn-secondary btn-small"
                            on:click=move |_| store.update(|board| board.cancel_rename())
                        >
                            "Cancel"
                        </button>
                    </form>
                </Show>
                <div class="category-color-dot" style=format!("background: {}", category.color)></div>
            </div>
            <div class="category-count">{format!("{} tasks", task_count)}</div>
            <div class="category-actions">
                <button
                    class="btn btn-primary btn-small"
                    on:click=move |_| store.update(|board| board.start_rename(id))
                >
                    "Rename"
                </button>
                <button
                    class="btn btn-danger btn-small"
                    on:click=move |_| store.update(|board| board.ask(AdminAction::DeleteCategory(id)))
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
