//! Comment data models

use crate::types::{CommentId, PostId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment attached to a blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: CommentId,
    /// Post this comment belongs to
    pub post_id: PostId,
    /// Author display name
    pub author: String,
    /// Comment body
    pub content: String,
    /// When the comment was created; set once, never changed afterwards
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a new comment with a fresh id and the current time
    pub fn new(post_id: PostId, author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: CommentId::new(),
            post_id,
            author: author.into(),
            content: content.into(),
            created_at: Utc::now(),
        }
    }
}

/// Comment shape returned to callers
///
/// Pure projection of [`Comment`]; carries no independent identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommentView {
    /// Comment identifier
    pub id: CommentId,
    /// Comment body
    pub content: String,
    /// Author display name
    pub author: String,
    /// Creation time
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentView {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.clone(),
            content: comment.content.clone(),
            author: comment.author.clone(),
            created_at: comment.created_at,
        }
    }
}

/// Input shape for creating a comment
///
/// The target post id travels as a separate call parameter and the creation
/// time is assigned by the service, so neither appears here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    /// Author display name
    pub author: String,
    /// Comment body
    pub content: String,
}

impl NewComment {
    /// Create a new comment input
    pub fn new(author: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            author: author.into(),
            content: content.into(),
        }
    }
}
