use axum::http::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoriesError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    // Request errors
    #[error("{0}")]
    Validation(String),

    // Upstream errors
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoriesError {
    pub fn validation(message: impl Into<String>) -> Self {
        StoriesError::Validation(message.into())
    }

    pub fn upstream(message: impl Into<String>) -> Self {
        StoriesError::UpstreamUnavailable(message.into())
    }

    /// HTTP status a client sees for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            StoriesError::Validation(_) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type StoriesResult<T> = Result<T, StoriesError>;
