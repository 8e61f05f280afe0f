//! Comment storage trait and abstractions

use super::model::Comment;
use crate::error::Result;
use crate::types::PostId;

/// Trait for comment storage implementations
pub trait CommentStore: Send + Sync {
    /// Persist a comment and return the stored record
    ///
    /// Rejects a comment whose id is already present in the store.
    fn save(&self, comment: Comment) -> Result<Comment>;

    /// All comments for a post, in unspecified order
    ///
    /// An unknown post id yields an empty vector, not an error.
    fn find_by_post(&self, post_id: &PostId) -> Result<Vec<Comment>>;
}

/// In-memory storage for testing
#[cfg(test)]
pub mod memory {
    use super::*;
    use crate::error::CommentsError;
    use crate::types::CommentId;
    use std::collections::HashMap;
    use std::sync::RwLock;

    /// In-memory comment storage for testing
    pub struct MemoryCommentStore {
        comments: RwLock<HashMap<CommentId, Comment>>,
    }

    impl MemoryCommentStore {
        /// Create a new in-memory storage
        pub fn new() -> Self {
            Self {
                comments: RwLock::new(HashMap::new()),
            }
        }
    }

    impl Default for MemoryCommentStore {
        fn default() -> Self {
            Self::new()
        }
    }

    impl CommentStore for MemoryCommentStore {
        fn save(&self, comment: Comment) -> Result<Comment> {
            let mut comments = self.comments.write().unwrap();
            if comments.contains_key(&comment.id) {
                return Err(CommentsError::Validation(format!(
                    "Comment with ID {} already exists",
                    comment.id
                )));
            }
            comments.insert(comment.id.clone(), comment.clone());
            Ok(comment)
        }

        fn find_by_post(&self, post_id: &PostId) -> Result<Vec<Comment>> {
            let comments = self.comments.read().unwrap();
            Ok(comments
                .values()
                .filter(|c| &c.post_id == post_id)
                .cloned()
                .collect())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_memory_store_save_and_find() {
            let store = MemoryCommentStore::new();
            let post_id = PostId::new();
            let comment = Comment::new(post_id.clone(), "alice", "hello");

            store.save(comment.clone()).unwrap();

            let found = store.find_by_post(&post_id).unwrap();
            assert_eq!(found.len(), 1);
            assert_eq!(found[0].id, comment.id);
        }

        #[test]
        fn test_memory_store_duplicate_save_fails() {
            let store = MemoryCommentStore::new();
            let comment = Comment::new(PostId::new(), "alice", "hello");

            store.save(comment.clone()).unwrap();
            assert!(store.save(comment).is_err());
        }

        #[test]
        fn test_memory_store_unknown_post_is_empty() {
            let store = MemoryCommentStore::new();
            let found = store.find_by_post(&PostId::new()).unwrap();
            assert!(found.is_empty());
        }

        #[test]
        fn test_memory_store_separates_posts() {
            let store = MemoryCommentStore::new();
            let post1 = PostId::new();
            let post2 = PostId::new();

            store.save(Comment::new(post1.clone(), "a", "one")).unwrap();
            store.save(Comment::new(post1.clone(), "b", "two")).unwrap();
            store.save(Comment::new(post2.clone(), "c", "other")).unwrap();

            assert_eq!(store.find_by_post(&post1).unwrap().len(), 2);
            assert_eq!(store.find_by_post(&post2).unwrap().len(), 1);
        }
    }
}
