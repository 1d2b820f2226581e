//! GitHub API error types

use thiserror::Error;

/// Errors from the release hosting service
#[derive(Debug, Error)]
pub enum GitHubError {
    /// The API rejected a request
    #[error("API error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Repository slug is not `owner/repo`
    #[error("Invalid repository '{0}', expected owner/repo")]
    InvalidRepository(String),

    /// Release returned an unusable upload URL
    #[error("Invalid upload URL: {0}")]
    InvalidUploadUrl(String),

    /// Asset path has no usable file name
    #[error("Invalid asset path: {0}")]
    InvalidAsset(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GitHubError {
    /// HTTP status for API rejections
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ApiError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type for GitHub operations
pub type Result<T> = std::result::Result<T, GitHubError>;
