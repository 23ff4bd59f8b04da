//! Page Routing
//!
//! Picks the view for the current path and handles the `?edit=<id>` link
//! from the admin table.

use percent_encoding::percent_decode_str;
use wasm_bindgen::JsValue;

pub const TASKS_PATH: &str = "/";
pub const ADMIN_PATH: &str = "/admin";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Tasks,
    Admin,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        let path = path.trim_end_matches('/');
        if path == ADMIN_PATH || path.starts_with("/admin/") {
            Page::Admin
        } else {
            Page::Tasks
        }
    }
}

/// Link that opens the task form in edit mode
pub fn edit_task_href(id: u32) -> String {
    format!("{}?edit={}", TASKS_PATH, id)
}

/// Raw value of the `edit` key, `Some("")` when the key has no value
fn edit_param(search: &str) -> Option<&str> {
    search
        .trim_start_matches('?')
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(key, _)| *key == "edit")
        .map(|(_, value)| value)
}

/// Task id from the `edit` parameter of a `location.search` string
pub fn edit_target_from_search(search: &str) -> Option<u32> {
    edit_param(search)
        .and_then(|value| percent_decode_str(value).decode_utf8().ok())
        .and_then(|value| value.trim().parse().ok())
}

pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| TASKS_PATH.to_string())
}

/// Read `?edit=` once and strip the query from the visible address
pub fn take_edit_target() -> Option<u32> {
    let window = web_sys::window()?;
    let search = window.location().search().ok()?;
    if edit_param(&search).is_none() {
        return None;
    }

    let target = edit_target_from_search(&search);
    if let Ok(history) = window.history() {
        if let Err(err) = history.replace_state_with_url(&JsValue::NULL, "", Some(TASKS_PATH)) {
            tracing::warn!(?err, "could not clean edit parameter from url");
        }
    }
    target
}

pub fn navigate(href: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(href) {
            tracing::warn!(?err, href, "navigation failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_from_path() {
        assert_eq!(Page::from_path("/"), Page::Tasks);
        assert_eq!(Page::from_path("/admin"), Page::Admin);
        assert_eq!(Page::from_path("/admin/"), Page::Admin);
        assert_eq!(Page::from_path("/administrator"), Page::Tasks);
    }

    #[test]
    fn test_edit_target_parsing() {
        assert_eq!(edit_target_from_search("?edit=12"), Some(12));
        assert_eq!(edit_target_from_search("?tab=x&edit=%2042"), Some(42));
        assert_eq!(edit_target_from_search("?edit=abc"), None);
        assert_eq!(edit_target_from_search("?edit"), None);
        assert_eq!(edit_target_from_search(""), None);
    }

    #[test]
    fn test_only_the_edit_key_counts() {
        assert_eq!(edit_param("?credit=5"), None);
        assert_eq!(edit_param("?tab=edited"), None);
        assert_eq!(edit_param("?editor=1&x=edit"), None);
        assert_eq!(edit_param("?x=1&edit"), Some(""));
        assert_eq!(edit_param("?edit=4"), Some("4"));
        assert_eq!(edit_target_from_search("?credit=5"), None);
    }

    #[test]
    fn test_edit_link_round_trips() {
        let href = edit_task_href(9);
        let search = href.split_once('?').map(|(_, q)| q).unwrap();
        assert_eq!(edit_target_from_search(search), Some(9));
    }
}
