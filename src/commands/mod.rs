//! Backend Command Wrappers
//!
//! Frontend bindings to the JSON API, organized by domain. Every call goes
//! through `HttpBackend::call`, which returns the raw response text; the
//! envelope is decoded separately so it can be tested off the browser.

mod admin;
mod category;
mod envelope;
mod task;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use crate::config::UiConfig;
use crate::error::{ApiError, ApiResult};

// Re-export all public items
pub use admin::*;
pub use category::*;
pub use envelope::{decode_message, decode_payload};
pub use task::*;

/// Everything a page needs from the server
pub trait Backend: TaskApi + CategoryApi + AdminApi {}

impl<T: TaskApi + CategoryApi + AdminApi> Backend for T {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Fetch API client for the task backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBackend {
    config: UiConfig,
}

impl HttpBackend {
    pub fn new(config: UiConfig) -> Self {
        Self { config }
    }

    /// Send one request and return the response body, whatever its status.
    /// Failed requests answer with a JSON envelope too, so the status code is
    /// only logged.
    async fn call(&self, method: Method, path: &str, body: Option<String>) -> ApiResult<String> {
        let url = self.config.url(path);
        tracing::debug!(method = method.as_str(), %url, "request");

        let window = web_sys::window().ok_or_else(|| ApiError::Transport("no window".to_string()))?;

        let init = RequestInit::new();
        init.set_method(method.as_str());
        if let Some(body) = body {
            let headers = Headers::new().map_err(js_error)?;
            headers.set("Content-Type", "application/json").map_err(js_error)?;
            init.set_headers(&headers);
            init.set_body(&JsValue::from_str(&body));
        }

        let request = Request::new_with_str_and_init(&url, &init).map_err(js_error)?;
        let response: Response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(js_error)?
            .dyn_into()
            .map_err(js_error)?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(js_error)?)
            .await
            .map_err(js_error)?;
        tracing::debug!(method = method.as_str(), %url, status, "response");

        text.as_string()
            .ok_or_else(|| ApiError::Decode(format!("{} {} returned no text body", method.as_str(), url)))
    }

    async fn call_json<B: serde::Serialize>(&self, method: Method, path: &str, body: &B) -> ApiResult<String> {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.call(method, path, Some(json)).await
    }
}

fn js_error(err: JsValue) -> ApiError {
    let message = err
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .or_else(|| err.as_string())
        .unwrap_or_else(|| format!("{:?}", err));
    ApiError::Transport(message)
}
