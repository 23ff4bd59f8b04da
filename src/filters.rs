//! Task Filters
//!
//! Category, status and priority filters combined with AND. An unset filter
//! matches every task.

use crate::models::{Priority, Status, Task};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilters {
    pub category: Option<u32>,
    pub status: Option<Status>,
    pub priority: Option<Priority>,
}

impl TaskFilters {
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(category) = self.category {
            if task.category_id != Some(category) {
                return false;
            }
        }
        if let Some(status) = self.status {
            if task.status != status {
                return false;
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority {
                return false;
            }
        }
        true
    }

    /// Visible subset of `tasks`, in list order
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|t| self.matches(t)).cloned().collect()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    // Select values: "" means "all"

    pub fn set_category(&mut self, value: &str) {
        self.category = value.trim().parse().ok();
    }

    pub fn set_status(&mut self, value: &str) {
        self.status = Status::from_key(value);
    }

    pub fn set_priority(&mut self, value: &str) {
        self.priority = Priority::from_key(value);
    }
}
