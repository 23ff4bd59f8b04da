//! Category Commands
//!
//! Frontend bindings for the category endpoints.

use async_trait::async_trait;

use super::{decode_message, decode_payload, HttpBackend, Method};
use crate::error::ApiResult;
use crate::models::{Category, CategoryRename, NewCategory};

#[async_trait(?Send)]
pub trait CategoryApi {
    async fn list_categories(&self) -> ApiResult<Vec<Category>>;

    async fn create_category(&self, category: &NewCategory) -> ApiResult<String>;

    /// Rename only; the server keeps the color
    async fn rename_category(&self, id: u32, name: &str) -> ApiResult<String>;

    /// The server clears the category of its tasks before deleting it
    async fn delete_category(&self, id: u32) -> ApiResult<String>;
}

fn category_path(id: u32) -> String {
    format!("/categories/{}", id)
}

#[async_trait(?Send)]
impl CategoryApi for HttpBackend {
    async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        let body = self.call(Method::Get, "/categories", None).await?;
        decode_payload(&body, "kategoriler")
    }

    async fn create_category(&self, category: &NewCategory) -> ApiResult<String> {
        let body = self.call_json(Method::Post, "/categories", category).await?;
        decode_message(&body)
    }

    async fn rename_category(&self, id: u32, name: &str) -> ApiResult<String> {
        let rename = CategoryRename { name: name.to_string() };
        let body = self.call_json(Method::Put, &category_path(id), &rename).await?;
        decode_message(&body)
    }

    async fn delete_category(&self, id: u32) -> ApiResult<String> {
        let body = self.call(Method::Delete, &category_path(id), None).await?;
        decode_message(&body)
    }
}
