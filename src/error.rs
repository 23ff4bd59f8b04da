//! Frontend Errors
//!
//! Failures of a backend call, split by whether the server answered.

/// Common result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, no window)
    Transport(String),
    /// A response arrived but was not the expected JSON
    Decode(String),
    /// The server answered with `basarili: false`
    Rejected(String),
}

impl ApiError {
    /// Message meant for the user. Only server-supplied messages are shown
    /// verbatim; everything else uses the caller's fallback text.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(msg) if !msg.trim().is_empty() => msg.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "Request failed: {}", msg),
            ApiError::Decode(msg) => write!(f, "Unexpected response: {}", msg),
            ApiError::Rejected(msg) => write!(f, "Rejected by server: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

/// Client-side validation failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormError {
    MissingTitle,
    MissingCategoryName,
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::MissingTitle => write!(f, "Title is required"),
            FormError::MissingCategoryName => write!(f, "Category name is required"),
        }
    }
}

impl std::error::Error for FormError {}
