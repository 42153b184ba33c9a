use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::SqlitePool;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::NewBlog;
use crate::domain::blog::ports::BlogRepository;
use crate::domain::user::models::UserId;

pub struct SqliteBlogRepository {
    pool: SqlitePool,
}

impl SqliteBlogRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct BlogRow {
    id: i64,
    title: String,
    content: String,
    user_id: i64,
    published_at: DateTime<Utc>,
}

impl From<BlogRow> for Blog {
    fn from(row: BlogRow) -> Self {
        Blog {
            id: BlogId(row.id),
            title: row.title,
            content: row.content,
            author_id: UserId(row.user_id),
            published_at: row.published_at,
        }
    }
}

fn database_error(e: sqlx::Error) -> BlogError {
    BlogError::DatabaseError(e.to_string())
}

#[async_trait]
impl BlogRepository for SqliteBlogRepository {
    async fn create(&self, blog: NewBlog) -> Result<Blog, BlogError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO blogs (title, content, user_id, published_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(blog.author_id.0)
        .bind(blog.published_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.is_foreign_key_violation() {
                    return BlogError::AuthorNotFound(blog.author_id);
                }
            }
            database_error(e)
        })?;

        Ok(Blog {
            id: BlogId(id),
            title: blog.title,
            content: blog.content,
            author_id: blog.author_id,
            published_at: blog.published_at,
        })
    }

    async fn find_by_id(&self, id: BlogId) -> Result<Option<Blog>, BlogError> {
        let row = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, title, content, user_id, published_at
            FROM blogs
            WHERE id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(Blog::from))
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Blog>, BlogError> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, title, content, user_id, published_at
            FROM blogs
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    async fn count(&self) -> Result<i64, BlogError> {
        sqlx::query_scalar("SELECT COUNT(*) FROM blogs")
            .fetch_one(&self.pool)
            .await
            .map_err(database_error)
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Blog>, BlogError> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, title, content, user_id, published_at
            FROM blogs
            WHERE user_id = ?
            ORDER BY id
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    async fn search_by_title(
        &self,
        title: &str,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Blog>, BlogError> {
        let rows = sqlx::query_as::<_, BlogRow>(
            r#"
            SELECT id, title, content, user_id, published_at
            FROM blogs
            WHERE title LIKE '%' || ? || '%'
            ORDER BY id
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(title)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Blog::from).collect())
    }

    async fn update(&self, blog: Blog) -> Result<Blog, BlogError> {
        let result = sqlx::query(
            r#"
            UPDATE blogs
            SET title = ?, content = ?
            WHERE id = ?
            "#,
        )
        .bind(&blog.title)
        .bind(&blog.content)
        .bind(blog.id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(BlogError::NotFound(blog.id));
        }

        Ok(blog)
    }

    async fn delete(&self, id: BlogId) -> Result<(), BlogError> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(BlogError::NotFound(id));
        }

        Ok(())
    }
}
