//! Task Commands
//!
//! Frontend bindings for the task endpoints.

use async_trait::async_trait;

use super::{decode_message, decode_payload, HttpBackend, Method};
use crate::error::ApiResult;
use crate::models::{Task, TaskDraft, TaskUpdate};

#[async_trait(?Send)]
pub trait TaskApi {
    /// All tasks, newest first, joined with their category
    async fn list_tasks(&self) -> ApiResult<Vec<Task>>;

    async fn create_task(&self, draft: &TaskDraft) -> ApiResult<String>;

    async fn update_task(&self, id: u32, update: &TaskUpdate) -> ApiResult<String>;

    async fn delete_task(&self, id: u32) -> ApiResult<String>;
}

fn task_path(id: u32) -> String {
    format!("/tasks/{}", id)
}

#[async_trait(?Send)]
impl TaskApi for HttpBackend {
    async fn list_tasks(&self) -> ApiResult<Vec<Task>> {
        let body = self.call(Method::Get, "/tasks", None).await?;
        decode_payload(&body, "gorevler")
    }

    async fn create_task(&self, draft: &TaskDraft) -> ApiResult<String> {
        let body = self.call_json(Method::Post, "/tasks", draft).await?;
        decode_message(&body)
    }

    async fn update_task(&self, id: u32, update: &TaskUpdate) -> ApiResult<String> {
        let body = self.call_json(Method::Put, &task_path(id), update).await?;
        decode_message(&body)
    }

    async fn delete_task(&self, id: u32) -> ApiResult<String> {
        let body = self.call(Method::Delete, &task_path(id), None).await?;
        decode_message(&body)
    }
}
