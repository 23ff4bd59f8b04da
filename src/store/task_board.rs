//! Task Page State
//!
//! Loaded snapshot, filters, the create/edit form and the delete
//! confirmation of the public task page.

use reactive_stores::Store;

use super::{busy_notice, success_text};
use crate::commands::Backend;
use crate::confirm::ConfirmGate;
use crate::filters::TaskFilters;
use crate::form::TaskForm;
use crate::models::{Category, Status, Task, TaskDraft, TaskUpdate};
use crate::notify::Notice;
use crate::sequence::LoadSequence;

#[derive(Clone, Debug, Default, Store)]
pub struct TaskBoard {
    /// Every task of the last load
    pub tasks: Vec<Task>,
    pub categories: Vec<Category>,
    pub filters: TaskFilters,
    pub form: TaskForm,
    /// Task being edited; `None` means the form creates
    pub editing: Option<u32>,
    /// Task waiting for delete confirmation
    pub confirm: ConfirmGate<u32>,
    /// A mutation is in flight
    pub busy: bool,
    /// First task load has finished, successfully or not
    pub loaded: bool,
    /// The last task load failed; the list shows what it had before
    pub load_failed: bool,
    /// Edit target from the page URL, applied once tasks are loaded
    pub pending_edit: Option<u32>,
    pub sequence: LoadSequence,
}

/// Row-level actions of the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    Complete(u32),
    Edit(u32),
    Delete(u32),
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskMutation {
    Create(TaskDraft),
    Update(u32, TaskDraft),
    Complete(u32),
    Delete(u32),
}

impl TaskMutation {
    fn failure_text(&self) -> &'static str {
        match self {
            TaskMutation::Create(_) | TaskMutation::Update(..) => "Could not save task",
            TaskMutation::Complete(_) => "Could not complete task",
            TaskMutation::Delete(_) => "Could not delete task",
        }
    }

    fn resets_form(&self) -> bool {
        matches!(self, TaskMutation::Create(_) | TaskMutation::Update(..))
    }

    /// Issue the request; returns the success text
    async fn send<B: Backend + ?Sized>(&self, api: &B) -> Result<String, crate::error::ApiError> {
        match self {
            TaskMutation::Create(draft) => {
                let msg = api.create_task(draft).await?;
                Ok(success_text(msg, "Task created"))
            }
            TaskMutation::Update(id, draft) => {
                let msg = api.update_task(*id, &TaskUpdate::Replace(draft.clone())).await?;
                Ok(success_text(msg, "Task updated"))
            }
            TaskMutation::Complete(id) => {
                api.update_task(*id, &TaskUpdate::Status { status: Status::Completed }).await?;
                Ok("Task completed!".to_string())
            }
            TaskMutation::Delete(id) => {
                let msg = api.delete_task(*id).await?;
                Ok(success_text(msg, "Task deleted"))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum TaskJobKind {
    Load { with_categories: bool },
    Mutate(TaskMutation),
}

/// Backend work produced by a handler
#[derive(Debug, Clone, PartialEq)]
pub struct TaskJob {
    ticket: u64,
    kind: TaskJobKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TaskEvent {
    CategoriesLoaded(Vec<Category>),
    TasksLoaded { ticket: u64, tasks: Vec<Task> },
    /// Task list request failed
    LoadFailed,
    /// Create/update went through
    FormSaved,
    /// Mutation finished, successfully or not
    Settled,
    Notify(Notice),
}

impl TaskJob {
    #[cfg(test)]
    fn mutation(&self) -> Option<&TaskMutation> {
        match &self.kind {
            TaskJobKind::Mutate(mutation) => Some(mutation),
            TaskJobKind::Load { .. } => None,
        }
    }

    pub async fn run<B: Backend + ?Sized>(self, api: &B) -> Vec<TaskEvent> {
        let mut events = Vec::new();
        match self.kind {
            TaskJobKind::Load { with_categories } => {
                load_snapshot(api, self.ticket, with_categories, &mut events).await;
            }
            TaskJobKind::Mutate(mutation) => {
                tracing::info!(?mutation, "task mutation");
                match mutation.send(api).await {
                    Ok(message) => {
                        if mutation.resets_form() {
                            events.push(TaskEvent::FormSaved);
                        }
                        events.push(TaskEvent::Notify(Notice::success(message)));
                        load_snapshot(api, self.ticket, false, &mut events).await;
                    }
                    Err(err) => {
                        events.push(TaskEvent::Notify(Notice::from_error(&err, mutation.failure_text())));
                    }
                }
                events.push(TaskEvent::Settled);
            }
        }
        events
    }
}

async fn load_snapshot<B: Backend + ?Sized>(api: &B, ticket: u64, with_categories: bool, events: &mut Vec<TaskEvent>) {
    if with_categories {
        match api.list_categories().await {
            Ok(categories) => events.push(TaskEvent::CategoriesLoaded(categories)),
            Err(err) => events.push(TaskEvent::Notify(Notice::from_error(&err, "Could not load categories"))),
        }
    }
    match api.list_tasks().await {
        Ok(tasks) => {
            tracing::debug!(ticket, count = tasks.len(), "tasks loaded");
            events.push(TaskEvent::TasksLoaded { ticket, tasks });
        }
        Err(err) => {
            events.push(TaskEvent::LoadFailed);
            events.push(TaskEvent::Notify(Notice::from_error(&err, "Could not load tasks")));
        }
    }
}

impl TaskBoard {
    pub fn with_pending_edit(pending_edit: Option<u32>) -> Self {
        Self { pending_edit, ..Default::default() }
    }

    // ========================
    // Derived values
    // ========================

    pub fn visible_tasks(&self) -> Vec<Task> {
        self.filters.apply(&self.tasks)
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    // ========================
    // Handlers
    // ========================

    /// Initial load: categories, then tasks
    pub fn load(&mut self) -> TaskJob {
        TaskJob {
            ticket: self.sequence.issue(),
            kind: TaskJobKind::Load { with_categories: true },
        }
    }

    /// Create when no edit target is set, update it otherwise
    pub fn submit(&mut self) -> Result<TaskJob, Notice> {
        if self.busy {
            return Err(busy_notice());
        }
        let draft = self.form.to_draft()?;
        let mutation = match self.editing {
            Some(id) => TaskMutation::Update(id, draft),
            None => TaskMutation::Create(draft),
        };
        self.mutate(mutation)
    }

    pub fn complete(&mut self, id: u32) -> Result<TaskJob, Notice> {
        self.mutate(TaskMutation::Complete(id))
    }

    /// Switch the form to edit mode for `id`; false if the task is unknown
    pub fn begin_edit(&mut self, id: u32) -> bool {
        match self.tasks.iter().find(|t| t.id == id) {
            Some(task) => {
                self.form = TaskForm::from_task(task);
                self.editing = Some(id);
                true
            }
            None => false,
        }
    }

    /// Clear the form and return to create mode
    pub fn cancel_edit(&mut self) {
        self.form = TaskForm::default();
        self.editing = None;
    }

    pub fn ask_delete(&mut self, id: u32) {
        self.confirm.request("Delete task", "Are you sure you want to delete this task?", id);
    }

    pub fn confirm_delete(&mut self) -> Option<Result<TaskJob, Notice>> {
        let id = self.confirm.confirm()?;
        Some(self.mutate(TaskMutation::Delete(id)))
    }

    pub fn dismiss_confirm(&mut self) {
        self.confirm.dismiss();
    }

    fn mutate(&mut self, mutation: TaskMutation) -> Result<TaskJob, Notice> {
        if self.busy {
            return Err(busy_notice());
        }
        self.busy = true;
        Ok(TaskJob {
            ticket: self.sequence.issue(),
            kind: TaskJobKind::Mutate(mutation),
        })
    }

    // ========================
    // Events
    // ========================

    /// Apply one event; notices are handed back for the toast
    pub fn apply(&mut self, event: TaskEvent) -> Option<Notice> {
        match event {
            TaskEvent::CategoriesLoaded(categories) => self.categories = categories,
            TaskEvent::TasksLoaded { ticket, tasks } => {
                if self.sequence.accept(ticket) {
                    self.tasks = tasks;
                    self.loaded = true;
                    self.load_failed = false;
                    if let Some(id) = self.pending_edit.take() {
                        if !self.begin_edit(id) {
                            tracing::warn!(id, "edit target from url not found");
                        }
                    }
                }
            }
            TaskEvent::LoadFailed => {
                self.loaded = true;
                self.load_failed = true;
            }
            TaskEvent::FormSaved => self.cancel_edit(),
            TaskEvent::Settled => self.busy = false,
            TaskEvent::Notify(notice) => return Some(notice),
        }
        None
    }
}
