//! UI Components
//!
//! Leptos components of the task page and the admin page.

mod admin_sidebar;
mod badges;
mod category_manager;
mod confirm_modal;
mod dashboard_panel;
mod settings_panel;
mod stats_panel;
mod task_filter_bar;
mod task_form;
mod task_list;
mod tasks_table;
mod toast_host;

pub use admin_sidebar::AdminSidebar;
pub use badges::{CategoryBadge, PriorityBadge, StatusBadge};
pub use category_manager::{CategoryFormPanel, CategoryGrid};
pub use confirm_modal::ConfirmModal;
pub use dashboard_panel::{CategoriesOverview, RecentTasks, StatCards};
pub use settings_panel::{DangerZone, DatabaseInfo};
pub use stats_panel::StatsPanel;
pub use task_filter_bar::TaskFilterBar;
pub use task_form::TaskFormPanel;
pub use task_list::{TaskCard, TaskList};
pub use tasks_table::TasksTable;
pub use toast_host::ToastHost;
