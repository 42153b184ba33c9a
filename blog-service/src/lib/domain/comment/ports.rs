use async_trait::async_trait;

use crate::domain::blog::models::BlogId;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::comment::models::NewComment;
use crate::domain::user::models::UserId;

/// Port for comment domain service operations.
#[async_trait]
pub trait CommentServicePort: Send + Sync + 'static {
    /// Add a comment by `author` to an existing blog post.
    ///
    /// # Errors
    /// * `BlogNotFound` - Target blog does not exist
    /// * `DatabaseError` - Database operation failed
    async fn create_comment(
        &self,
        command: CreateCommentCommand,
        author: UserId,
    ) -> Result<Comment, CommentError>;

    /// # Errors
    /// * `NotFound` - Comment does not exist
    async fn get_comment(&self, id: CommentId) -> Result<Comment, CommentError>;

    /// Comments on a blog post, oldest first, with author names.
    async fn list_comments(&self, blog_id: BlogId) -> Result<Vec<Comment>, CommentError>;
}

/// Persistence operations for comments.
#[async_trait]
pub trait CommentRepository: Send + Sync + 'static {
    async fn create(&self, comment: NewComment) -> Result<Comment, CommentError>;

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentError>;

    async fn list_by_blog(&self, blog_id: BlogId) -> Result<Vec<Comment>, CommentError>;
}
