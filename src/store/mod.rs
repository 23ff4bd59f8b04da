//! Page State Stores
//!
//! Each page owns one state struct held in a `reactive_stores::Store`.
//! Handlers are methods that return a job; a job talks to the backend and
//! returns events; events are applied to the store one at a time.

mod admin_board;
mod task_board;

#[cfg(test)]
pub(crate) mod testing;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::context::AppContext;
use crate::notify::Notice;

pub use admin_board::*;
pub use task_board::*;

/// Store of the public task page
pub type TaskStore = Store<TaskBoard>;

/// Store of the admin page
pub type AdminStore = Store<AdminBoard>;

/// Get the task page store from context
pub fn use_task_store() -> TaskStore {
    expect_context::<TaskStore>()
}

/// Get the admin page store from context
pub fn use_admin_store() -> AdminStore {
    expect_context::<AdminStore>()
}

/// Run a task page job and apply its events as they come back
pub fn dispatch_task(ctx: AppContext, store: TaskStore, outcome: Result<TaskJob, Notice>) {
    let job = match outcome {
        Ok(job) => job,
        Err(notice) => return ctx.notify(notice),
    };
    let api = ctx.backend();
    spawn_local(async move {
        for event in job.run(&api).await {
            if let Some(notice) = store.try_update(|board| board.apply(event)).flatten() {
                ctx.notify(notice);
            }
        }
    });
}

/// Run an admin page job and apply its events as they come back
pub fn dispatch_admin(ctx: AppContext, store: AdminStore, outcome: Result<AdminJob, Notice>) {
    let job = match outcome {
        Ok(job) => job,
        Err(notice) => return ctx.notify(notice),
    };
    let api = ctx.backend();
    spawn_local(async move {
        for event in job.run(&api).await {
            if let Some(notice) = store.try_update(|board| board.apply(event)).flatten() {
                ctx.notify(notice);
            }
        }
    });
}

fn busy_notice() -> Notice {
    Notice::info("Please wait for the current request to finish")
}

/// Success text, falling back when the server sent no message
fn success_text(message: String, fallback: &str) -> String {
    if message.trim().is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
