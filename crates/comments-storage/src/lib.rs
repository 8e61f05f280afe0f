//! comments-storage - Storage library for blog-comments
//!
//! This crate provides the filesystem implementation of the post and comment
//! store traits from `comments-core`.

mod file_store;

pub use file_store::FileSystemStore;
