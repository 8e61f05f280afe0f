//! Error types for blog-comments

use thiserror::Error;

/// Main error type for blog-comments
#[derive(Debug, Error)]
pub enum CommentsError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// Post not found
    #[error("Post not found: {0}")]
    PostNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unsupported schema version
    #[error("Unsupported schema version: {0}")]
    UnsupportedSchemaVersion(String),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<CommentsError>,
    },
}

impl CommentsError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        CommentsError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for blog-comments
pub type Result<T> = std::result::Result<T, CommentsError>;
