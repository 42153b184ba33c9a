use thiserror::Error;

use crate::domain::blog::models::BlogId;
use crate::domain::user::models::UserId;

/// Error for BlogId parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BlogIdError {
    #[error("Invalid blog ID format: {0}")]
    InvalidFormat(String),

    #[error("Blog ID must be positive, got {0}")]
    NotPositive(i64),
}

/// Error for page number parsing failures
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PageError {
    #[error("Invalid page number: {0}")]
    InvalidFormat(String),

    #[error("Page number must be at least 1, got {0}")]
    OutOfRange(i64),
}

/// Top-level error type for all blog-related operations
#[derive(Debug, Clone, Error)]
pub enum BlogError {
    #[error("Invalid blog ID: {0}")]
    InvalidBlogId(#[from] BlogIdError),

    #[error("Invalid page: {0}")]
    InvalidPage(#[from] PageError),

    #[error("Blog not found: {0}")]
    NotFound(BlogId),

    #[error("Author not found: {0}")]
    AuthorNotFound(UserId),

    #[error("User {user_id} does not own blog {blog_id}")]
    Forbidden { user_id: UserId, blog_id: BlogId },

    // Infrastructure errors
    #[error("Database error: {0}")]
    DatabaseError(String),
}
