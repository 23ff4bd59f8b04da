//! In-memory backend for store tests. Follows the server's rules: tasks
//! come back newest first with their category joined, deleting a category
//! clears it from its tasks, and a reset restores the default categories.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::commands::{AdminApi, CategoryApi, TaskApi};
use crate::error::{ApiError, ApiResult};
use crate::models::{
    Category, CategoryCount, Dashboard, DashboardStats, NewCategory, Status, Task, TaskDraft, TaskUpdate,
};

const DEFAULT_CATEGORIES: [(&str, &str); 5] = [
    ("Kişisel", "#3498db"),
    ("İş", "#e74c3c"),
    ("Okul", "#2ecc71"),
    ("Alışveriş", "#f39c12"),
    ("Diğer", "#95a5a6"),
];

#[derive(Default)]
struct Db {
    tasks: Vec<Task>,
    categories: Vec<Category>,
    next_task: u32,
    next_category: u32,
    requests: Vec<String>,
    reject_next: Option<String>,
    offline: bool,
}

impl Db {
    fn restore_defaults(&mut self) {
        self.tasks.clear();
        self.categories.clear();
        self.next_task = 0;
        self.next_category = 0;
        for (name, color) in DEFAULT_CATEGORIES {
            self.add_category(name, color);
        }
    }

    fn add_category(&mut self, name: &str, color: &str) -> u32 {
        self.next_category += 1;
        self.categories.push(Category {
            id: self.next_category,
            name: name.to_string(),
            color: color.to_string(),
            created_at: None,
        });
        self.next_category
    }

    fn add_task(&mut self, draft: &TaskDraft) -> u32 {
        self.next_task += 1;
        let mut task = Task {
            id: self.next_task,
            title: draft.title.clone(),
            description: Some(draft.description.clone()),
            category_id: None,
            priority: draft.priority,
            status: draft.status,
            due_date: draft.due_date.clone(),
            category_name: None,
            category_color: None,
            created_at: None,
            updated_at: None,
        };
        self.assign_category(&mut task, draft.category_id);
        self.tasks.push(task);
        self.next_task
    }

    fn assign_category(&self, task: &mut Task, category_id: Option<u32>) {
        let category = category_id.and_then(|id| self.categories.iter().find(|c| c.id == id));
        task.category_id = category.map(|c| c.id);
        task.category_name = category.map(|c| c.name.clone());
        task.category_color = category.map(|c| c.color.clone());
    }

    fn newest_first(&self) -> Vec<Task> {
        self.tasks.iter().rev().cloned().collect()
    }

    fn count(&self, status: Status) -> u32 {
        self.tasks.iter().filter(|t| t.status == status).count() as u32
    }

    /// Record the request and decide whether it fails
    fn begin(&mut self, request: String) -> ApiResult<()> {
        self.requests.push(request);
        if self.offline {
            return Err(ApiError::Transport("Failed to fetch".to_string()));
        }
        match self.reject_next.take() {
            Some(message) => Err(ApiError::Rejected(message)),
            None => Ok(()),
        }
    }
}

pub(crate) struct FakeBackend {
    db: RefCell<Db>,
}

impl FakeBackend {
    pub fn with_defaults() -> Self {
        let mut db = Db::default();
        db.restore_defaults();
        Self { db: RefCell::new(db) }
    }

    /// Insert a task directly, bypassing the request log
    pub fn seed_task(&self, title: &str, category_id: Option<u32>, status: Status) -> u32 {
        let draft = TaskDraft {
            title: title.to_string(),
            description: String::new(),
            category_id,
            priority: Default::default(),
            status,
            due_date: None,
        };
        self.db.borrow_mut().add_task(&draft)
    }

    /// The next request is refused with `message`
    pub fn reject_next(&self, message: &str) {
        self.db.borrow_mut().reject_next = Some(message.to_string());
    }

    /// Every later request fails at the transport level
    pub fn go_offline(&self) {
        self.db.borrow_mut().offline = true;
    }

    pub fn requests(&self) -> Vec<String> {
        self.db.borrow().requests.clone()
    }

    pub fn task_count(&self) -> usize {
        self.db.borrow().tasks.len()
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.db.borrow().newest_first()
    }
}

#[async_trait(?Send)]
impl TaskApi for FakeBackend {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        let mut db = self.db.borrow_mut();
        db.begin("GET /tasks".to_string())?;
        Ok(db.newest_first())
    }

    async fn create_task(&self, draft: &TaskDraft) -> ApiResult<String> {
        let mut db = self.db.borrow_mut();
        db.begin("POST /tasks".to_string())?;
        db.add_task(draft);
        Ok("Görev başarıyla oluşturuldu".to_string())
    }

    async fn update_task(&self, id: u32, update: &TaskUpdate) -> ApiResult<String> {
        let mut db = self.db.borrow_mut();
        db.begin(format!("PUT /tasks/{}", id))?;
        let index = db
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| ApiError::Rejected("Görev bulunamadı".to_string()))?;

        let mut task = db.tasks[index].clone();
        match update {
            TaskUpdate::Replace(draft) => {
                task.title = draft.title.clone();
                task.description = Some(draft.description.clone());
                task.priority = draft.priority;
                task.status = draft.status;
                task.due_date = draft.due_date.clone();
                db.assign_category(&mut task, draft.category_id);
            }
            TaskUpdate::Status { status } => task.status = *status,
        }
        db.tasks[index] = task;
        Ok("Görev başarıyla güncellendi".to_string())
    }

    async fn delete_task(&self, id: u32) -> ApiResult<String> {
        let mut db = self.db.borrow_mut();
        db.begin(format!("DELETE /tasks/{}", id))?;
        db.tasks.retain(|t| t.id != id);
        Ok("Görev başarıyla silindi".to_string())
    }
}

#[async_trait(?Send)]
impl CategoryApi for FakeBackend {
    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let mut db = self.db.borrow_mut();
        db.begin("GET /categories".to_string())?;
        Ok(db.categories.clone())
    }

    async fn create_category(&self, category: &NewCategory) -> ApiResult<String> {
        let mut db = self.db.borrow_mut();
        db.begin("POST /categories".to_string())?;
        if db.categories.iter().any(|c| c.name == category.name) {
            return Err(ApiError::Rejected("Bu kategori zaten mevcut".to_string()));
        }
        db.add_category(&category.name, &category.color);
        Ok("Kategori başarıyla oluşturuldu".to_string())
    }

    async fn rename_category(&self, id: u32, name: &str) -> ApiResult<String> {
        let mut db = self.db.borrow_mut();
        db.begin(format!("PUT /categories/{}", id))?;
        let category = db
            .categories
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ApiError::Rejected("Kategori bulunamadı".to_string()))?;
        category.name = name.to_string();
        for task in db.tasks.iter_mut().filter(|t| t.category_id == Some(id)) {
            task.category_name = Some(name.to_string());
        }
        Ok("Kategori başarıyla güncellendi".to_string())
    }

    async fn delete_category(&self, id: u32) -> ApiResult<String> {
        let mut db = self.db.borrow_mut();
        db.begin(format!("DELETE /categories/{}", id))?;
        for task in db.tasks.iter_mut().filter(|t| t.category_id == Some(id)) {
            task.category_id = None;
            task.category_name = None;
            task.category_color = None;
        }
        db.categories.retain(|c| c.id != id);
        Ok("Kategori başarıyla silindi".to_string())
    }
}

#[async_trait(?Send)]
impl AdminApi for FakeBackend {
    async fn dashboard(&self) -> ApiResult<Dashboard> {
        let mut db = self.db.borrow_mut();
        db.begin("GET /admin/dashboard".to_string())?;
        let counts = db
            .categories
            .iter()
            .map(|c| CategoryCount {
                name: c.name.clone(),
                task_count: db.tasks.iter().filter(|t| t.category_id == Some(c.id)).count() as u32,
            })
            .collect();
        Ok(Dashboard {
            stats: DashboardStats {
                total: db.tasks.len() as u32,
                completed: db.count(Status::Completed),
                pending: db.count(Status::Pending),
                in_progress: db.count(Status::InProgress),
                categories: counts,
            },
            recent_tasks: db.newest_first().into_iter().take(10).collect(),
            categories: db.categories.clone(),
        })
    }

    async fn clear_tasks(&self) -> ApiResult<String> {
        let mut db = self.db.borrow_mut();
        db.begin("DELETE /admin/tasks/all".to_string())?;
        let count = db.tasks.len();
        db.tasks.clear();
        Ok(format!("{} görev başarıyla silindi", count))
    }

    async fn reset_database(&self) -> ApiResult<String> {
        let mut db = self.db.borrow_mut();
        db.begin("POST /admin/reset".to_string())?;
        db.restore_defaults();
        Ok("Veritabanı başarıyla sıfırlandı".to_string())
    }
}
