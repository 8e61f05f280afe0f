//! Post storage trait and abstractions

use super::model::Post;
use crate::error::Result;
use crate::types::PostId;

/// Trait for post storage implementations
pub trait PostStore: Send + Sync {
    /// Persist a post and return the stored record
    ///
    /// Rejects a post whose id is already present in the store.
    fn insert(&self, post: Post) -> Result<Post>;

    /// Load a post by id
    fn get(&self, id: &PostId) -> Result<Post>;

    /// Check whether a post exists
    fn exists(&self, id: &PostId) -> bool;
}
