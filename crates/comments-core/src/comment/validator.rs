//! Comment validation

use super::model::NewComment;
use crate::config::LimitsConfig;
use crate::error::{CommentsError, Result};

/// Maximum comment content length (default)
pub const MAX_CONTENT_LENGTH: usize = 10000;

/// Maximum author name length (default)
pub const MAX_AUTHOR_LENGTH: usize = 100;

/// Validator for new comments
pub struct CommentValidator {
    max_content_length: usize,
    max_author_length: usize,
}

impl CommentValidator {
    /// Create a new validator with default settings
    pub fn new() -> Self {
        Self {
            max_content_length: MAX_CONTENT_LENGTH,
            max_author_length: MAX_AUTHOR_LENGTH,
        }
    }

    /// Create a validator from configured limits
    pub fn from_limits(limits: &LimitsConfig) -> Self {
        Self {
            max_content_length: limits.max_content_length,
            max_author_length: limits.max_author_length,
        }
    }

    /// Validate comment content
    pub fn validate_content(&self, content: &str) -> Result<()> {
        let trimmed = content.trim();

        if trimmed.is_empty() {
            return Err(CommentsError::Validation(
                "Comment content cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > self.max_content_length {
            return Err(CommentsError::Validation(format!(
                "Comment content exceeds maximum length of {} characters",
                self.max_content_length
            )));
        }

        Ok(())
    }

    /// Validate the author name
    pub fn validate_author(&self, author: &str) -> Result<()> {
        let trimmed = author.trim();

        if trimmed.is_empty() {
            return Err(CommentsError::Validation(
                "Comment author cannot be empty".to_string(),
            ));
        }

        if trimmed.len() > self.max_author_length {
            return Err(CommentsError::Validation(format!(
                "Comment author exceeds maximum length of {} characters",
                self.max_author_length
            )));
        }

        Ok(())
    }

    /// Validate a complete comment input
    pub fn validate(&self, new_comment: &NewComment) -> Result<()> {
        self.validate_author(&new_comment.author)?;
        self.validate_content(&new_comment.content)?;
        Ok(())
    }
}

impl Default for CommentValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_content_valid() {
        let validator = CommentValidator::new();
        assert!(validator.validate_content("Valid comment").is_ok());
    }

    #[test]
    fn test_validate_content_empty() {
        let validator = CommentValidator::new();
        assert!(validator.validate_content("").is_err());
        assert!(validator.validate_content("   ").is_err());
    }

    #[test]
    fn test_validate_content_too_long() {
        let limits = LimitsConfig {
            max_content_length: 10,
            ..Default::default()
        };
        let validator = CommentValidator::from_limits(&limits);
        assert!(validator.validate_content("Short").is_ok());
        assert!(validator.validate_content("This is too long").is_err());
    }

    #[test]
    fn test_validate_author_empty() {
        let validator = CommentValidator::new();
        assert!(validator.validate_author("").is_err());
        assert!(validator.validate_author("  ").is_err());
        assert!(validator.validate_author("alice").is_ok());
    }

    #[test]
    fn test_validate_new_comment() {
        let validator = CommentValidator::new();
        assert!(validator.validate(&NewComment::new("alice", "hi")).is_ok());
        assert!(validator.validate(&NewComment::new("", "hi")).is_err());
        assert!(validator.validate(&NewComment::new("alice", "")).is_err());
    }
}
