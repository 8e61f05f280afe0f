//! Comment service operations

use super::model::{Comment, CommentView, NewComment};
use super::store::CommentStore;
use super::validator::CommentValidator;
use crate::error::{CommentsError, Result};
use crate::metrics::{MetricsSink, Timer};
use crate::post::PostStore;
use crate::types::{CommentId, PostId};
use std::sync::Arc;
use tracing::debug;

/// Service exposing the comment operations for blog posts
///
/// Stateless; holds its store collaborators behind trait objects and may be
/// shared freely across threads.
pub struct CommentService {
    comments: Arc<dyn CommentStore>,
    posts: Arc<dyn PostStore>,
    validator: CommentValidator,
    metrics: Option<Arc<dyn MetricsSink>>,
}

impl CommentService {
    /// Create a new comment service over the given stores
    pub fn new(comments: Arc<dyn CommentStore>, posts: Arc<dyn PostStore>) -> Self {
        Self {
            comments,
            posts,
            validator: CommentValidator::new(),
            metrics: None,
        }
    }

    /// Replace the validator, e.g. one built from configured limits
    pub fn with_validator(mut self, validator: CommentValidator) -> Self {
        self.validator = validator;
        self
    }

    /// Attach a sink recording the duration of each operation
    pub fn with_metrics(mut self, sink: Arc<dyn MetricsSink>) -> Self {
        self.metrics = Some(sink);
        self
    }

    /// All comments for a post, most recent first
    ///
    /// An unknown post id yields an empty list. Comments sharing a creation
    /// time may appear in any relative order.
    pub fn comments_for_post(&self, post_id: &PostId) -> Result<Vec<CommentView>> {
        let _timer = Timer::start("comments_for_post", self.metrics.clone());

        let mut views: Vec<CommentView> = self
            .comments
            .find_by_post(post_id)?
            .iter()
            .map(CommentView::from)
            .collect();
        views.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(views)
    }

    /// Create a new comment on an existing post and return its id
    ///
    /// Fails with [`CommentsError::PostNotFound`] when no post exists for
    /// `post_id`, and with [`CommentsError::Validation`] when the author or
    /// content is empty or over the configured limits. Nothing is persisted
    /// on any failure path.
    pub fn add_comment(&self, post_id: &PostId, new_comment: NewComment) -> Result<CommentId> {
        let _timer = Timer::start("add_comment", self.metrics.clone());

        self.validator.validate(&new_comment)?;

        if !self.posts.exists(post_id) {
            return Err(CommentsError::PostNotFound(post_id.to_string()));
        }

        let comment = Comment::new(post_id.clone(), new_comment.author, new_comment.content);
        let stored = self.comments.save(comment)?;
        debug!("Added comment {} to post {}", stored.id, post_id);
        Ok(stored.id)
    }
}
