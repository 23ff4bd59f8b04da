//! Task Board Frontend Entry Point

mod admin;
mod app;
mod commands;
mod components;
mod config;
mod confirm;
mod context;
mod error;
mod filters;
mod form;
mod models;
mod notify;
mod routing;
mod sequence;
mod stats;
mod store;

use admin::AdminApp;
use app::TaskApp;
use leptos::prelude::*;
use routing::{current_path, Page};

fn main() {
    console_error_panic_hook::set_once();
    wasm_tracing::set_as_global_default();

    let page = Page::from_path(&current_path());
    tracing::info!(?page, "mounting");
    match page {
        Page::Tasks => mount_to_body(TaskApp),
        Page::Admin => mount_to_body(AdminApp),
    }
}
