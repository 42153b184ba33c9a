use async_trait::async_trait;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::CreateBlogCommand;
use crate::domain::blog::models::NewBlog;
use crate::domain::blog::models::Page;
use crate::domain::blog::models::UpdateBlogCommand;
use crate::domain::user::models::UserId;

/// Port for blog domain service operations.
#[async_trait]
pub trait BlogServicePort: Send + Sync + 'static {
    /// Publish a new blog post authored by `author`.
    async fn create_blog(
        &self,
        command: CreateBlogCommand,
        author: UserId,
    ) -> Result<Blog, BlogError>;

    /// Retrieve a blog post.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    async fn get_blog(&self, id: BlogId) -> Result<Blog, BlogError>;

    /// List blog posts, `Page::SIZE` per page.
    async fn list_blogs(&self, page: Page) -> Result<Vec<Blog>, BlogError>;

    /// Total number of blog posts.
    async fn count_blogs(&self) -> Result<i64, BlogError>;

    /// List every blog post written by `user_id`.
    async fn list_user_blogs(&self, user_id: UserId) -> Result<Vec<Blog>, BlogError>;

    /// List blog posts whose title contains `title`.
    async fn search_blogs(&self, title: &str, page: Page) -> Result<Vec<Blog>, BlogError>;

    /// Replace title and content of a blog post owned by `requester`.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `Forbidden` - `requester` is not the author
    async fn update_blog(
        &self,
        id: BlogId,
        command: UpdateBlogCommand,
        requester: UserId,
    ) -> Result<Blog, BlogError>;

    /// Delete a blog post owned by `requester`.
    ///
    /// # Errors
    /// * `NotFound` - Blog does not exist
    /// * `Forbidden` - `requester` is not the author
    async fn delete_blog(&self, id: BlogId, requester: UserId) -> Result<(), BlogError>;
}

/// Persistence operations for blog posts.
#[async_trait]
pub trait BlogRepository: Send + Sync + 'static {
    async fn create(&self, blog: NewBlog) -> Result<Blog, BlogError>;

    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, BlogError>;

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Blog>, BlogError>;

    async fn count(&self) -> Result<i64, BlogError>;

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Blog>, BlogError>;

    async fn search_by_title(
        &self,
        title: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Blog>, BlogError>;

    /// # Errors
    /// * `NotFound` - Blog does not exist
    async fn update(&self, blog: Blog) -> Result<Blog, BlogError>;

    /// # Errors
    /// * `NotFound` - Blog does not exist
    async fn delete(&self, id: BlogId) -> Result<(), BlogError>;
}
