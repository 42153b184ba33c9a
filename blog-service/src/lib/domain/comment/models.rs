use std::fmt;

use chrono::DateTime;
use chrono::Utc;

use crate::domain::blog::models::BlogId;
use crate::domain::comment::errors::CommentIdError;
use crate::domain::user::models::UserId;

/// Comment attached to a blog post.
///
/// `author_name` is filled in when the comment is read back joined with its author.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub blog_id: BlogId,
    pub author_id: UserId,
    pub author_name: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Comment unique identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommentId(pub i64);

impl CommentId {
    pub fn from_string(s: &str) -> Result<Self, CommentIdError> {
        let id = s
            .parse::<i64>()
            .map_err(|e| CommentIdError::InvalidFormat(format!("{s:?}: {e}")))?;

        if id <= 0 {
            return Err(CommentIdError::NotPositive(id));
        }

        Ok(Self(id))
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Command to comment on a blog post
#[derive(Debug, Clone)]
pub struct CreateCommentCommand {
    pub blog_id: BlogId,
    pub content: String,
}

/// Comment row to insert
#[derive(Debug, Clone)]
pub struct NewComment {
    pub blog_id: BlogId,
    pub author_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}
