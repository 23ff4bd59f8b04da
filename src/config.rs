//! UI Configuration
//!
//! The API prefix can be overridden per deployment with
//! `<meta name="api-base" content="https://host/api">`.

/// Prefix used when the page does not declare one
pub const DEFAULT_API_BASE: &str = "/api";

/// Number of tasks listed on the admin dashboard
pub const RECENT_TASK_LIMIT: usize = 5;

/// Default color of the admin "new category" form
pub const NEW_CATEGORY_COLOR: &str = "#667eea";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiConfig {
    pub api_base: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { api_base: DEFAULT_API_BASE.to_string() }
    }
}

impl UiConfig {
    pub fn with_api_base(base: &str) -> Self {
        let trimmed = base.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Self::default();
        }
        Self { api_base: trimmed.to_string() }
    }

    /// Read overrides from the current document, falling back to defaults
    pub fn from_document() -> Self {
        let base = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(r#"meta[name="api-base"]"#).ok().flatten())
            .and_then(|meta| meta.get_attribute("content"));

        match base {
            Some(base) => {
                tracing::debug!(api_base = %base, "api base from document");
                Self::with_api_base(&base)
            }
            None => Self::default(),
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.api_base, path)
    }
}
