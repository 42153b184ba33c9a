use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::errors::BlogError;
use super::models::Blog;
use super::models::BlogId;
use super::models::CreateBlogCommand;
use super::models::NewBlog;
use super::models::Page;
use super::models::UpdateBlogCommand;
use super::ports::BlogRepository;
use super::ports::BlogServicePort;
use crate::domain::user::models::UserId;

/// Concrete implementation of BlogServicePort.
///
/// Mutations check that the requester authored the post before touching it.
pub struct BlogService<BR>
where
    BR: BlogRepository,
{
    blog_repository: Arc<BR>,
}

impl<BR> BlogService<BR>
where
    BR: BlogRepository,
{
    pub fn new(blog_repository: Arc<BR>) -> Self {
        Self { blog_repository }
    }

    async fn get_owned_blog(&self, id: BlogId, requester: UserId) -> Result<Blog, BlogError> {
        let blog = self.get_blog(id).await?;

        if !blog.is_owned_by(requester) {
            tracing::warn!(
                blog_id = %id,
                user_id = %requester,
                author_id = %blog.author_id,
                "Rejected change to blog owned by another user"
            );
            return Err(BlogError::Forbidden {
                user_id: requester,
                blog_id: id,
            });
        }

        Ok(blog)
    }
}

#[async_trait]
impl<BR> BlogServicePort for BlogService<BR>
where
    BR: BlogRepository,
{
    async fn create_blog(
        &self,
        command: CreateBlogCommand,
        author: UserId,
    ) -> Result<Blog, BlogError> {
        let blog = NewBlog {
            title: command.title,
            content: command.content,
            author_id: author,
            published_at: Utc::now(),
        };

        self.blog_repository.create(blog).await
    }

    async fn get_blog(&self, id: BlogId) -> Result<Blog, BlogError> {
        self.blog_repository
            .find_by_id(id)
            .await?
            .ok_or(BlogError::NotFound(id))
    }

    async fn list_blogs(&self, page: Page) -> Result<Vec<Blog>, BlogError> {
        self.blog_repository.list(page.limit(), page.offset()).await
    }

    async fn count_blogs(&self) -> Result<i64, BlogError> {
        self.blog_repository.count().await
    }

    async fn list_user_blogs(&self, user_id: UserId) -> Result<Vec<Blog>, BlogError> {
        self.blog_repository.list_by_user(user_id).await
    }

    async fn search_blogs(&self, title: &str, page: Page) -> Result<Vec<Blog>, BlogError> {
        self.blog_repository
            .search_by_title(title, page.limit(), page.offset())
            .await
    }

    async fn update_blog(
        &self,
        id: BlogId,
        command: UpdateBlogCommand,
        requester: UserId,
    ) -> Result<Blog, BlogError> {
        let mut blog = self.get_owned_blog(id, requester).await?;

        blog.title = command.title;
        blog.content = command.content;

        self.blog_repository.update(blog).await
    }

    async fn delete_blog(&self, id: BlogId, requester: UserId) -> Result<(), BlogError> {
        self.get_owned_blog(id, requester).await?;

        self.blog_repository.delete(id).await
    }
}
