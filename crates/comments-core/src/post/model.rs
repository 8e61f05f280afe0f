//! Post data models

use crate::types::PostId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Unique post identifier
    pub id: PostId,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// When the post was created
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a fresh id and the current time
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: PostId::new(),
            title: title.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Post shape returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostView {
    /// Post identifier
    pub id: PostId,
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id.clone(),
            title: post.title.clone(),
            content: post.content.clone(),
            created_at: post.created_at,
        }
    }
}

/// Input shape for creating a post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    /// Post title
    pub title: String,
    /// Post body
    pub content: String,
}

impl NewPost {
    /// Create a new post input
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }
}
