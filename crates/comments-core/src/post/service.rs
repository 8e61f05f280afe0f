//! Post service operations

use super::model::{NewPost, Post, PostView};
use super::store::PostStore;
use crate::config::LimitsConfig;
use crate::error::{CommentsError, Result};
use crate::metrics::{MetricsSink, Timer};
use crate::types::PostId;
use std::sync::Arc;
use tracing::debug;

/// Service exposing the post operations
pub struct PostService {
    posts: Arc<dyn PostStore>,
    limits: LimitsConfig,
    metrics: Option<Arc<dyn MetricsSink>>,
}

impl PostService {
    /// Create a new post service over the given store
    pub fn new(posts: Arc<dyn PostStore>) -> Self {
        Self {
            posts,
            limits: LimitsConfig::default(),
            metrics: None,
        }
    }

    /// Replace the configured limits
    pub fn with_limits(mut self, limits: LimitsConfig) -> Self {
        self.limits = limits;
        self
    }

    /// Attach a sink recording the duration of each operation
    pub fn with_metrics(mut self, sink: Arc<dyn MetricsSink>) -> Self {
        self.metrics = Some(sink);
        self
    }

    /// Fetch a single post
    pub fn post(&self, id: &PostId) -> Result<PostView> {
        let _timer = Timer::start("post", self.metrics.clone());

        let post = self.posts.get(id)?;
        Ok(PostView::from(&post))
    }

    /// Create a new post and return its id
    pub fn create_post(&self, new_post: NewPost) -> Result<PostId> {
        let _timer = Timer::start("create_post", self.metrics.clone());

        let title = new_post.title.trim();
        if title.is_empty() {
            return Err(CommentsError::Validation(
                "Post title cannot be empty".to_string(),
            ));
        }
        if title.len() > self.limits.max_title_length {
            return Err(CommentsError::Validation(format!(
                "Post title exceeds maximum length of {} characters",
                self.limits.max_title_length
            )));
        }
        if new_post.content.trim().is_empty() {
            return Err(CommentsError::Validation(
                "Post content cannot be empty".to_string(),
            ));
        }

        let post = Post::new(new_post.title, new_post.content);
        let stored = self.posts.insert(post)?;
        debug!("Created post {}", stored.id);
        Ok(stored.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::post::store::memory::MemoryPostStore;

    fn create_service() -> (Arc<MemoryPostStore>, PostService) {
        let store = Arc::new(MemoryPostStore::new());
        let service = PostService::new(store.clone());
        (store, service)
    }

    #[test]
    fn test_create_and_fetch_post() {
        let (_store, service) = create_service();

        let id = service
            .create_post(NewPost::new("Title", "Body"))
            .unwrap();

        let view = service.post(&id).unwrap();
        assert_eq!(view.id, id);
        assert_eq!(view.title, "Title");
        assert_eq!(view.content, "Body");
    }

    #[test]
    fn test_fetch_missing_post() {
        let (_store, service) = create_service();
        let result = service.post(&PostId::new());
        assert!(matches!(result, Err(CommentsError::PostNotFound(_))));
    }

    #[test]
    fn test_create_post_rejects_empty_title() {
        let (_store, service) = create_service();

        let result = service.create_post(NewPost::new("  ", "Body"));
        assert!(matches!(result, Err(CommentsError::Validation(_))));
    }

    #[test]
    fn test_create_post_rejects_long_title() {
        let (_store, service) = create_service();
        let service = service.with_limits(LimitsConfig {
            max_title_length: 5,
            ..Default::default()
        });

        let result = service.create_post(NewPost::new("A very long title", "Body"));
        assert!(matches!(result, Err(CommentsError::Validation(_))));
    }

    #[test]
    fn test_create_post_rejects_empty_content() {
        let (_store, service) = create_service();
        let result = service.create_post(NewPost::new("Title", "   "));
        assert!(matches!(result, Err(CommentsError::Validation(_))));
    }
}
