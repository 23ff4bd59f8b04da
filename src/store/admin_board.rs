//! Admin Page State
//!
//! Dashboard snapshot, tab selection, category management and the
//! confirmation-gated bulk operations of the admin page.

use chrono::Local;
use reactive_stores::Store;

use super::{busy_notice, success_text};
use crate::commands::Backend;
use crate::config::RECENT_TASK_LIMIT;
use crate::confirm::ConfirmGate;
use crate::error::ApiError;
use crate::form::{CategoryForm, RenameDraft};
use crate::models::{Category, Dashboard, DashboardStats, NewCategory, Task};
use crate::notify::Notice;
use crate::sequence::LoadSequence;

const LAST_UPDATE_FORMAT: &str = "%d.%m.%Y %H:%M:%S";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Dashboard,
    Tasks,
    Categories,
    Settings,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [AdminTab::Dashboard, AdminTab::Tasks, AdminTab::Categories, AdminTab::Settings];

    pub fn label(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Dashboard",
            AdminTab::Tasks => "Tasks",
            AdminTab::Categories => "Categories",
            AdminTab::Settings => "Settings",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "📊",
            AdminTab::Tasks => "📋",
            AdminTab::Categories => "🏷️",
            AdminTab::Settings => "⚙️",
        }
    }
}

/// Destructive operations that need confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    DeleteCategory(u32),
    DeleteTask(u32),
    ClearTasks,
    ResetDatabase,
}

impl AdminAction {
    pub fn title(self) -> &'static str {
        match self {
            AdminAction::DeleteCategory(_) => "Delete category",
            AdminAction::DeleteTask(_) => "Delete task",
            AdminAction::ClearTasks => "Delete all tasks",
            AdminAction::ResetDatabase => "Reset database",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            AdminAction::DeleteCategory(_) => {
                "Are you sure you want to delete this category? Its tasks will lose their category."
            }
            AdminAction::DeleteTask(_) => "Are you sure you want to delete this task?",
            AdminAction::ClearTasks => "Are you sure you want to delete ALL tasks? This cannot be undone!",
            AdminAction::ResetDatabase => {
                "Are you sure you want to RESET the database? All tasks and categories will be deleted \
                 and the default categories restored. This cannot be undone!"
            }
        }
    }

    fn failure_text(self) -> &'static str {
        match self {
            AdminAction::DeleteCategory(_) => "Could not delete category",
            AdminAction::DeleteTask(_) => "Could not delete task",
            AdminAction::ClearTasks => "Could not delete tasks",
            AdminAction::ResetDatabase => "Could not reset database",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminMutation {
    AddCategory(NewCategory),
    RenameCategory { id: u32, name: String },
    Confirmed(AdminAction),
}

impl AdminMutation {
    fn failure_text(&self) -> &'static str {
        match self {
            AdminMutation::AddCategory(_) => "Could not add category",
            AdminMutation::RenameCategory { .. } => "Could not update category",
            AdminMutation::Confirmed(action) => action.failure_text(),
        }
    }

    async fn send<B: Backend + ?Sized>(&self, api: &B) -> Result<String, ApiError> {
        let (message, fallback) = match self {
            AdminMutation::AddCategory(category) => (api.create_category(category).await?, "Category created"),
            AdminMutation::RenameCategory { id, name } => (api.rename_category(*id, name).await?, "Category updated"),
            AdminMutation::Confirmed(AdminAction::DeleteCategory(id)) => {
                (api.delete_category(*id).await?, "Category deleted")
            }
            AdminMutation::Confirmed(AdminAction::DeleteTask(id)) => (api.delete_task(*id).await?, "Task deleted"),
            AdminMutation::Confirmed(AdminAction::ClearTasks) => (api.clear_tasks().await?, "All tasks deleted"),
            AdminMutation::Confirmed(AdminAction::ResetDatabase) => (api.reset_database().await?, "Database reset"),
        };
        Ok(success_text(message, fallback))
    }
}

#[derive(Debug, Clone, PartialEq)]
enum AdminJobKind {
    Load,
    Mutate(AdminMutation),
}

#[derive(Debug, Clone, PartialEq)]
pub struct AdminJob {
    ticket: u64,
    kind: AdminJobKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AdminEvent {
    DashboardLoaded { ticket: u64, dashboard: Dashboard, loaded_at: String },
    /// Dashboard request failed
    LoadFailed,
    CategoryAdded,
    Settled,
    Notify(Notice),
}

impl AdminJob {
    pub fn mutation(&self) -> Option<&AdminMutation> {
        match &self.kind {
            AdminJobKind::Mutate(mutation) => Some(mutation),
            AdminJobKind::Load => None,
        }
    }

    pub async fn run<B: Backend + ?Sized>(self, api: &B) -> Vec<AdminEvent> {
        let mut events = Vec::new();
        if let AdminJobKind::Mutate(mutation) = &self.kind {
            tracing::info!(?mutation, "admin mutation");
            match mutation.send(api).await {
                Ok(message) => {
                    if matches!(mutation, AdminMutation::AddCategory(_)) {
                        events.push(AdminEvent::CategoryAdded);
                    }
                    events.push(AdminEvent::Notify(Notice::success(message)));
                }
                Err(err) => {
                    events.push(AdminEvent::Notify(Notice::from_error(&err, mutation.failure_text())));
                    events.push(AdminEvent::Settled);
                    return events;
                }
            }
        }

        match api.dashboard().await {
            Ok(dashboard) => {
                let loaded_at = Local::now().format(LAST_UPDATE_FORMAT).to_string();
                events.push(AdminEvent::DashboardLoaded { ticket: self.ticket, dashboard, loaded_at });
            }
            Err(err) => {
                events.push(AdminEvent::LoadFailed);
                events.push(AdminEvent::Notify(Notice::from_error(&err, "Could not load dashboard")));
            }
        }
        if self.mutation().is_some() {
            events.push(AdminEvent::Settled);
        }
        events
    }
}

#[derive(Clone, Debug, Default, Store)]
pub struct AdminBoard {
    pub stats: DashboardStats,
    /// Tasks of the dashboard payload, newest first
    pub tasks: Vec<Task>,
    pub categories: Vec<Category>,
    pub tab: AdminTab,
    pub category_form: CategoryForm,
    /// Open inline rename editor
    pub rename: Option<RenameDraft>,
    pub confirm: ConfirmGate<AdminAction>,
    /// Local time of the last applied dashboard load
    pub last_update: Option<String>,
    /// First dashboard load has finished, successfully or not
    pub loaded: bool,
    /// The last dashboard load failed; panels keep their previous data
    pub load_failed: bool,
    pub busy: bool,
    pub sequence: LoadSequence,
}

/// Newest tasks shown on the dashboard
pub fn recent_tasks(tasks: &[Task]) -> Vec<Task> {
    tasks.iter().take(RECENT_TASK_LIMIT).cloned().collect()
}

impl AdminBoard {
    pub fn load(&mut self) -> AdminJob {
        AdminJob { ticket: self.sequence.issue(), kind: AdminJobKind::Load }
    }

    pub fn select_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
    }

    pub fn add_category(&mut self) -> Result<AdminJob, Notice> {
        if self.busy {
            return Err(busy_notice());
        }
        let category = self.category_form.to_new_category()?;
        self.mutate(AdminMutation::AddCategory(category))
    }

    pub fn start_rename(&mut self, id: u32) {
        self.rename = self.categories.iter().find(|c| c.id == id).map(|c| RenameDraft {
            category_id: c.id,
            original: c.name.clone(),
            name: c.name.clone(),
        });
    }

    /// Close the editor; a job only when the name actually changed
    pub fn submit_rename(&mut self) -> Option<Result<AdminJob, Notice>> {
        if self.busy {
            return Some(Err(busy_notice()));
        }
        let draft = self.rename.take()?;
        let name = draft.new_name()?;
        Some(self.mutate(AdminMutation::RenameCategory { id: draft.category_id, name }))
    }

    pub fn cancel_rename(&mut self) {
        self.rename = None;
    }

    pub fn ask(&mut self, action: AdminAction) {
        self.confirm.request(action.title(), action.message(), action);
    }

    pub fn confirm_action(&mut self) -> Option<Result<AdminJob, Notice>> {
        let action = self.confirm.confirm()?;
        Some(self.mutate(AdminMutation::Confirmed(action)))
    }

    pub fn dismiss_confirm(&mut self) {
        self.confirm.dismiss();
    }

    fn mutate(&mut self, mutation: AdminMutation) -> Result<AdminJob, Notice> {
        if self.busy {
            return Err(busy_notice());
        }
        self.busy = true;
        Ok(AdminJob { ticket: self.sequence.issue(), kind: AdminJobKind::Mutate(mutation) })
    }

    pub fn apply(&mut self, event: AdminEvent) -> Option<Notice> {
        match event {
            AdminEvent::DashboardLoaded { ticket, dashboard, loaded_at } => {
                if self.sequence.accept(ticket) {
                    self.stats = dashboard.stats;
                    self.tasks = dashboard.recent_tasks;
                    self.categories = dashboard.categories;
                    self.last_update = Some(loaded_at);
                    self.loaded = true;
                    self.load_failed = false;
                }
            }
            AdminEvent::LoadFailed => {
                self.loaded = true;
                self.load_failed = true;
            }
            AdminEvent::CategoryAdded => self.category_form = CategoryForm::default(),
            AdminEvent::Settled => self.busy = false,
            AdminEvent::Notify(notice) => return Some(notice),
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NEW_CATEGORY_COLOR;
    use crate::models::Status;
    use crate::notify::Severity;
    use crate::store::testing::FakeBackend;

    async fn drive(board: &mut AdminBoard, job: AdminJob, api: &FakeBackend) -> Vec<Notice> {
        job.run(api).await.into_iter().filter_map(|e| board.apply(e)).collect()
    }

    async fn loaded_board(api: &FakeBackend) -> AdminBoard {
        let mut board = AdminBoard::default();
        let job = board.load();
        drive(&mut board, job, api).await;
        board
    }

    #[tokio::test]
    async fn test_dashboard_load() {
        let api = FakeBackend::with_defaults();
        api.seed_task("a", Some(2), Status::Completed);
        api.seed_task("b", Some(2), Status::Pending);
        api.seed_task("c", None, Status::InProgress);

        let board = loaded_board(&api).await;
        assert!(board.loaded);
        assert_eq!(board.tab, AdminTab::Dashboard);
        assert_eq!(board.stats.total, 3);
        assert_eq!(board.stats.completed, 1);
        assert_eq!(board.stats.pending, 1);
        assert_eq!(board.tasks.len(), 3);
        assert!(board.last_update.is_some());

        let work = board.categories.iter().find(|c| c.id == 2).unwrap();
        assert_eq!(board.stats.task_count(&work.name), 2);
        let school = board.categories.iter().find(|c| c.id == 3).unwrap();
        assert_eq!(board.stats.task_count(&school.name), 0);
    }

    #[tokio::test]
    async fn test_recent_tasks_capped() {
        let api = FakeBackend::with_defaults();
        for i in 0..8 {
            api.seed_task(&format!("task {}", i), None, Status::Pending);
        }
        let board = loaded_board(&api).await;
        let recent = recent_tasks(&board.tasks);
        assert_eq!(recent.len(), RECENT_TASK_LIMIT);
        assert_eq!(recent[0].title, "task 7");
        assert_eq!(board.tasks.len(), 8);
    }

    #[tokio::test]
    async fn test_add_category_resets_form() {
        let api = FakeBackend::with_defaults();
        let mut board = loaded_board(&api).await;

        board.category_form.name = " Hobby ".to_string();
        board.category_form.color = "#123456".to_string();
        let job = board.add_category().unwrap();
        let notices = drive(&mut board, job, &api).await;

        assert_eq!(notices, vec![Notice::success("Kategori başarıyla oluşturuldu")]);
        assert_eq!(board.category_form.name, "");
        assert_eq!(board.category_form.color, NEW_CATEGORY_COLOR);
        let added = board.categories.last().unwrap();
        assert_eq!(added.name, "Hobby");
        assert_eq!(added.color, "#123456");
        assert!(!board.busy);
    }

    #[tokio::test]
    async fn test_blank_category_name_rejected_locally() {
        let api = FakeBackend::with_defaults();
        let mut board = loaded_board(&api).await;
        let before = api.requests().len();

        board.category_form.name = "  ".to_string();
        assert_eq!(board.add_category().unwrap_err(), Notice::error("Category name is required"));
        assert_eq!(api.requests().len(), before);
    }

    #[tokio::test]
    async fn test_duplicate_category_keeps_form() {
        let api = FakeBackend::with_defaults();
        let mut board = loaded_board(&api).await;

        board.category_form.name = "Okul".to_string();
        let job = board.add_category().unwrap();
        let notices = drive(&mut board, job, &api).await;
        assert_eq!(notices, vec![Notice::error("Bu kategori zaten mevcut")]);
        assert_eq!(board.category_form.name, "Okul");
        assert_eq!(board.categories.len(), 5);
    }

    #[tokio::test]
    async fn test_rename_flow() {
        let api = FakeBackend::with_defaults();
        let mut board = loaded_board(&api).await;

        board.start_rename(1);
        assert_eq!(board.rename.as_ref().map(|r| r.name.as_str()), Some("Kişisel"));
        if let Some(draft) = board.rename.as_mut() {
            draft.name = "Personal".to_string();
        }
        let job = board.submit_rename().unwrap().unwrap();
        assert!(board.rename.is_none());

        drive(&mut board, job, &api).await;
        assert!(api.requests().contains(&"PUT /categories/1".to_string()));
        assert_eq!(board.categories[0].name, "Personal");
    }

    #[tokio::test]
    async fn test_unchanged_rename_sends_nothing() {
        let api = FakeBackend::with_defaults();
        let mut board = loaded_board(&api).await;
        let before = api.requests().len();

        board.start_rename(2);
        assert!(board.submit_rename().is_none());
        assert!(board.rename.is_none());

        board.start_rename(2);
        if let Some(draft) = board.rename.as_mut() {
            draft.name = "   ".to_string();
        }
        assert!(board.submit_rename().is_none());
        assert_eq!(api.requests().len(), before);
        assert!(!board.busy);
    }

    #[tokio::test]
    async fn test_delete_category_clears_task_category() {
        let api = FakeBackend::with_defaults();
        let id = api.seed_task("Homework", Some(3), Status::Pending);
        let mut board = loaded_board(&api).await;

        board.ask(AdminAction::DeleteCategory(3));
        assert_eq!(board.confirm.pending().map(|p| p.title.as_str()), Some("Delete category"));
        let job = board.confirm_action().unwrap().unwrap();
        drive(&mut board, job, &api).await;

        assert_eq!(board.categories.len(), 4);
        let task = board.tasks.iter().find(|t| t.id == id).unwrap();
        assert_eq!(task.category_id, None);
        assert_eq!(task.category_name, None);
    }

    #[tokio::test]
    async fn test_clear_all_tasks_keeps_categories() {
        let api = FakeBackend::with_defaults();
        api.seed_task("a", None, Status::Pending);
        api.seed_task("b", None, Status::Pending);
        let mut board = loaded_board(&api).await;

        board.ask(AdminAction::ClearTasks);
        let job = board.confirm_action().unwrap().unwrap();
        let notices = drive(&mut board, job, &api).await;

        assert_eq!(notices, vec![Notice::success("2 görev başarıyla silindi")]);
        assert_eq!(api.task_count(), 0);
        assert!(board.tasks.is_empty());
        assert_eq!(board.stats.total, 0);
        assert_eq!(board.categories.len(), 5);
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let api = FakeBackend::with_defaults();
        api.seed_task("a", Some(1), Status::Completed);
        let mut board = loaded_board(&api).await;

        board.category_form.name = "Extra".to_string();
        let job = board.add_category().unwrap();
        drive(&mut board, job, &api).await;
        assert_eq!(board.categories.len(), 6);

        board.ask(AdminAction::ResetDatabase);
        let job = board.confirm_action().unwrap().unwrap();
        drive(&mut board, job, &api).await;

        assert!(board.tasks.is_empty());
        let names: Vec<_> = board.categories.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Kişisel", "İş", "Okul", "Alışveriş", "Diğer"]);
    }

    #[tokio::test]
    async fn test_dismissed_action_never_runs() {
        let api = FakeBackend::with_defaults();
        api.seed_task("a", None, Status::Pending);
        let mut board = loaded_board(&api).await;

        board.ask(AdminAction::ClearTasks);
        board.dismiss_confirm();
        assert!(board.confirm_action().is_none());
        assert_eq!(api.tasks().len(), 1);
    }

    #[tokio::test]
    async fn test_second_request_replaces_pending_action() {
        let api = FakeBackend::with_defaults();
        let keep = api.seed_task("keep", None, Status::Pending);
        let drop = api.seed_task("drop", None, Status::Pending);
        let mut board = loaded_board(&api).await;

        board.ask(AdminAction::DeleteTask(keep));
        board.ask(AdminAction::DeleteTask(drop));
        let job = board.confirm_action().unwrap().unwrap();
        assert_eq!(job.mutation(), Some(&AdminMutation::Confirmed(AdminAction::DeleteTask(drop))));
        drive(&mut board, job, &api).await;

        let remaining: Vec<_> = api.tasks().into_iter().map(|t| t.id).collect();
        assert_eq!(remaining, vec![keep]);
    }

    #[tokio::test]
    async fn test_failed_action_leaves_snapshot() {
        let api = FakeBackend::with_defaults();
        api.seed_task("a", None, Status::Pending);
        let mut board = loaded_board(&api).await;
        let before = board.clone();

        api.go_offline();
        board.ask(AdminAction::ResetDatabase);
        let job = board.confirm_action().unwrap().unwrap();
        let notices = drive(&mut board, job, &api).await;

        assert_eq!(notices.len(), 1);
        assert_eq!(notices[0].severity, Severity::Error);
        assert_eq!(notices[0].message, "Could not reset database");
        assert_eq!(board.tasks, before.tasks);
        assert_eq!(board.categories, before.categories);
        assert_eq!(board.last_update, before.last_update);
        assert!(!board.busy);
    }

    #[tokio::test]
    async fn test_busy_blocks_rename_and_actions() {
        let api = FakeBackend::with_defaults();
        let mut board = loaded_board(&api).await;

        board.ask(AdminAction::ClearTasks);
        let job = board.confirm_action().unwrap().unwrap();

        board.ask(AdminAction::ResetDatabase);
        assert_eq!(board.confirm_action().unwrap().unwrap_err().severity, Severity::Info);
        board.start_rename(1);
        assert_eq!(board.submit_rename().unwrap().unwrap_err().severity, Severity::Info);
        // the editor stays open for a retry
        assert!(board.rename.is_some());

        drive(&mut board, job, &api).await;
        assert!(!board.busy);
    }

    #[tokio::test]
    async fn test_failed_first_load_still_allows_reset() {
        let api = FakeBackend::with_defaults();
        let mut board = AdminBoard::default();

        api.reject_next("database disk image is malformed");
        let job = board.load();
        let notices = drive(&mut board, job, &api).await;

        assert_eq!(notices, vec![Notice::error("database disk image is malformed")]);
        assert!(board.loaded);
        assert!(board.load_failed);
        assert_eq!(board.last_update, None);

        board.select_tab(AdminTab::Settings);
        board.ask(AdminAction::ResetDatabase);
        let job = board.confirm_action().unwrap().unwrap();
        let notices = drive(&mut board, job, &api).await;

        assert_eq!(notices, vec![Notice::success("Veritabanı başarıyla sıfırlandı")]);
        assert!(!board.load_failed);
        assert_eq!(board.categories.len(), 5);
        assert!(board.last_update.is_some());
    }

    #[tokio::test]
    async fn test_stale_dashboard_dropped() {
        let api = FakeBackend::with_defaults();
        let mut board = AdminBoard::default();

        let stale = board.load().run(&api).await;
        api.seed_task("new", None, Status::Pending);
        let fresh = board.load();
        drive(&mut board, fresh, &api).await;

        for event in stale {
            board.apply(event);
        }
        assert_eq!(board.stats.total, 1);
    }

    #[test]
    fn test_tab_selection() {
        let mut board = AdminBoard::default();
        board.select_tab(AdminTab::Settings);
        assert_eq!(board.tab, AdminTab::Settings);
        assert_eq!(AdminTab::ALL.len(), 4);
    }
}
