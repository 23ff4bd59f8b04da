//! Admin Commands
//!
//! Dashboard snapshot and the bulk operations of the admin panel.

use async_trait::async_trait;

use super::{decode_message, decode_payload, HttpBackend, Method};
use crate::error::ApiResult;
use crate::models::Dashboard;

#[async_trait(?Send)]
pub trait AdminApi {
    async fn dashboard(&self) -> ApiResult<Dashboard>;

    /// Delete every task; categories stay
    async fn clear_tasks(&self) -> ApiResult<String>;

    /// Drop everything and restore the default categories
    async fn reset_database(&self) -> ApiResult<String>;
}

#[async_trait(?Send)]
impl AdminApi for HttpBackend {
    async fn dashboard(&self) -> ApiResult<Dashboard> {
        let body = self.call(Method::Get, "/admin/dashboard", None).await?;
        decode_payload(&body, "dashboard")
    }

    async fn clear_tasks(&self) -> ApiResult<String> {
        let body = self.call(Method::Delete, "/admin/tasks/all", None).await?;
        decode_message(&body)
    }

    async fn reset_database(&self) -> ApiResult<String> {
        let body = self.call(Method::Post, "/admin/reset", None).await?;
        decode_message(&body)
    }
}
