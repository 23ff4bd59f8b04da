//! Form Models
//!
//! Field values of the task and category forms, as the inputs hold them.

use crate::config::NEW_CATEGORY_COLOR;
use crate::error::FormError;
use crate::models::{NewCategory, Priority, Status, Task, TaskDraft};

/// Task create/edit form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub title: String,
    pub description: String,
    /// Category select value, "" for none
    pub category: String,
    pub priority: Priority,
    pub status: Status,
    /// Date input value, "" for none
    pub due_date: String,
}

impl TaskForm {
    /// Form pre-filled from an existing task
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone().unwrap_or_default(),
            category: task.category_id.map(|id| id.to_string()).unwrap_or_default(),
            priority: task.priority,
            status: task.status,
            due_date: task.due_date.clone().unwrap_or_default(),
        }
    }

    pub fn to_draft(&self) -> Result<TaskDraft, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }

        let due_date = self.due_date.trim();
        Ok(TaskDraft {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            category_id: self.category.trim().parse().ok(),
            priority: self.priority,
            status: self.status,
            due_date: (!due_date.is_empty()).then(|| due_date.to_string()),
        })
    }
}

/// Admin "new category" form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryForm {
    pub name: String,
    pub color: String,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self { name: String::new(), color: NEW_CATEGORY_COLOR.to_string() }
    }
}

impl CategoryForm {
    pub fn to_new_category(&self) -> Result<NewCategory, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingCategoryName);
        }
        Ok(NewCategory { name: name.to_string(), color: self.color.clone() })
    }
}

/// Inline rename editor of a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenameDraft {
    pub category_id: u32,
    pub original: String,
    pub name: String,
}

impl RenameDraft {
    /// New name to send, or `None` when there is nothing to change
    pub fn new_name(&self) -> Option<String> {
        let name = self.name.trim();
        (!name.is_empty() && name != self.original).then(|| name.to_string())
    }
}
