use thiserror::Error;

use crate::domain::blog::errors::BlogIdError;
use crate::domain::blog::models::BlogId;
use crate::domain::comment::models::CommentId;
use crate::domain::user::models::UserId;

/// Error for CommentId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommentIdError {
    #[error("Invalid comment ID format: {0}")]
    InvalidFormat(String),

    #[error("Comment ID must be positive, got {0}")]
    NotPositive(i64),
}

/// Top-level error type for all comment-related operations
#[derive(Debug, Clone, Error)]
pub enum CommentError {
    #[error("Invalid comment ID: {0}")]
    InvalidCommentId(#[from] CommentIdError),

    #[error("Invalid blog ID: {0}")]
    InvalidBlogId(#[from] BlogIdError),

    #[error("Blog not found: {0}")]
    BlogNotFound(BlogId),

    #[error("Author not found: {0}")]
    AuthorNotFound(UserId),

    #[error("Comment not found: {0}")]
    NotFound(CommentId),

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
