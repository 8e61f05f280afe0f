//! Configuration management for blog-comments

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Input length limits
    pub limits: LimitsConfig,
    /// Storage settings
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            limits: LimitsConfig::default(),
            storage: StorageConfig::default(),
        }
    }
}

/// Length limits applied to incoming comments and posts
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LimitsConfig {
    /// Maximum comment content length
    pub max_content_length: usize,
    /// Maximum author name length
    pub max_author_length: usize,
    /// Maximum post title length
    pub max_title_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_content_length: 10000,
            max_author_length: 100,
            max_title_length: 200,
        }
    }
}

/// Storage-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Base directory override; the per-user data directory is used when unset
    pub base_dir: Option<PathBuf>,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self { base_dir: None }
    }
}
