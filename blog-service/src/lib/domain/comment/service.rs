use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::CommentError;
use super::models::Comment;
use super::models::CommentId;
use super::models::CreateCommentCommand;
use super::models::NewComment;
use super::ports::CommentRepository;
use super::ports::CommentServicePort;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::user::models::UserId;

/// Concrete implementation of CommentServicePort.
///
/// Reads the blog repository to make sure comments only land on existing posts.
pub struct CommentService<CR, BR>
where
    CR: CommentRepository,
    BR: BlogRepository,
{
    comment_repository: Arc<CR>,
    blog_repository: Arc<BR>,
}

impl<CR, BR> CommentService<CR, BR>
where
    CR: CommentRepository,
    BR: BlogRepository,
{
    pub fn new(comment_repository: Arc<CR>, blog_repository: Arc<BR>) -> Self {
        Self {
            comment_repository,
            blog_repository,
        }
    }

    async fn ensure_blog_exists(&self, blog_id: BlogId) -> Result<(), CommentError> {
        let blog = self
            .blog_repository
            .find_by_id(blog_id)
            .await
            .map_err(|e| CommentError::DatabaseError(e.to_string()))?;

        match blog {
            Some(_) => Ok(()),
            None => Err(CommentError::BlogNotFound(blog_id)),
        }
    }
}

#[async_trait]
impl<CR, BR> CommentServicePort for CommentService<CR, BR>
where
    CR: CommentRepository,
    BR: BlogRepository,
{
    async fn create_comment(
        &self,
        command: CreateCommentCommand,
        author: UserId,
    ) -> Result<Comment, CommentError> {
        self.ensure_blog_exists(command.blog_id).await?;

        let comment = NewComment {
            blog_id: command.blog_id,
            author_id: author,
            content: command.content,
            created_at: Utc::now(),
        };

        let created = self.comment_repository.create(comment).await?;
        tracing::info!(
            comment_id = %created.id,
            blog_id = %created.blog_id,
            user_id = %author,
            "Comment created"
        );

        Ok(created)
    }

    async fn get_comment(&self, id: CommentId) -> Result<Comment, CommentError> {
        self.comment_repository
            .find_by_id(id)
            .await?
            .ok_or(CommentError::NotFound(id))
    }

    async fn list_comments(&self, blog_id: BlogId) -> Result<Vec<Comment>, CommentError> {
        self.comment_repository.list_by_blog(blog_id).await
    }
}
