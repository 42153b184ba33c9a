use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;
use sqlx::FromRow;
use sqlx::SqlitePool;

use crate::domain::blog::models::BlogId;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CommentId;
use crate::domain::comment::models::NewComment;
use crate::domain::comment::ports::CommentRepository;
use crate::domain::user::models::UserId;

pub struct SqliteCommentRepository {
    pool: SqlitePool,
}

impl SqliteCommentRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Names the missing parent after a rejected insert.
    async fn missing_reference(&self, comment: &NewComment) -> CommentError {
        let blog_exists: Result<bool, sqlx::Error> =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM blogs WHERE id = ?)")
                .bind(comment.blog_id.0)
                .fetch_one(&self.pool)
                .await;

        match blog_exists {
            Ok(false) => CommentError::BlogNotFound(comment.blog_id),
            Ok(true) => CommentError::AuthorNotFound(comment.author_id),
            Err(e) => database_error(e),
        }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    id: i64,
    blog_id: i64,
    user_id: i64,
    content: String,
    created_at: DateTime<Utc>,
    author_name: String,
}

impl From<CommentRow> for Comment {
    fn from(row: CommentRow) -> Self {
        Comment {
            id: CommentId(row.id),
            blog_id: BlogId(row.blog_id),
            author_id: UserId(row.user_id),
            author_name: Some(row.author_name),
            content: row.content,
            created_at: row.created_at,
        }
    }
}

fn database_error(e: sqlx::Error) -> CommentError {
    CommentError::DatabaseError(e.to_string())
}

#[async_trait]
impl CommentRepository for SqliteCommentRepository {
    async fn create(&self, comment: NewComment) -> Result<Comment, CommentError> {
        let id: Result<i64, sqlx::Error> = sqlx::query_scalar(
            r#"
            INSERT INTO comments (blog_id, user_id, content, created_at)
            VALUES (?, ?, ?, ?)
            RETURNING id
            "#,
        )
        .bind(comment.blog_id.0)
        .bind(comment.author_id.0)
        .bind(&comment.content)
        .bind(comment.created_at)
        .fetch_one(&self.pool)
        .await;

        let id = match id {
            Ok(id) => id,
            Err(e) => {
                let foreign_key_violation = e
                    .as_database_error()
                    .is_some_and(|db_err| db_err.is_foreign_key_violation());
                if foreign_key_violation {
                    return Err(self.missing_reference(&comment).await);
                }
                return Err(database_error(e));
            }
        };

        self.find_by_id(CommentId(id))
            .await?
            .ok_or(CommentError::NotFound(CommentId(id)))
    }

    async fn find_by_id(&self, id: CommentId) -> Result<Option<Comment>, CommentError> {
        let row = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comments.id, comments.blog_id, comments.user_id, comments.content,
                   comments.created_at, users.name AS author_name
            FROM comments
            JOIN users ON comments.user_id = users.id
            WHERE comments.id = ?
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(row.map(Comment::from))
    }

    async fn list_by_blog(&self, blog_id: BlogId) -> Result<Vec<Comment>, CommentError> {
        let rows = sqlx::query_as::<_, CommentRow>(
            r#"
            SELECT comments.id, comments.blog_id, comments.user_id, comments.content,
                   comments.created_at, users.name AS author_name
            FROM comments
            JOIN users ON comments.user_id = users.id
            WHERE comments.blog_id = ?
            ORDER BY comments.id
            "#,
        )
        .bind(blog_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        Ok(rows.into_iter().map(Comment::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::blog::models::NewBlog;
    use crate::domain::blog::ports::BlogRepository;
    use crate::domain::user::models::EmailAddress;
    use crate::domain::user::models::NewUser;
    use crate::domain::user::models::UserName;
    use crate::domain::user::ports::UserRepository;
    use crate::outbound::database;
    use crate::outbound::repositories::SqliteBlogRepository;
    use crate::outbound::repositories::SqliteUserRepository;

    struct Fixture {
        comments: SqliteCommentRepository,
        blogs: SqliteBlogRepository,
        author: UserId,
        blog: BlogId,
    }

    async fn setup() -> Fixture {
        let pool = database::connect_in_memory().await.unwrap();
        database::migrate(&pool).await.unwrap();

        let author = SqliteUserRepository::new(pool.clone())
            .create(NewUser {
                name: UserName::new("Mallory".to_string()).unwrap(),
                email: EmailAddress::new("mallory@example.com".to_string()).unwrap(),
                password_hash: "hash".to_string(),
                created_at: Utc::now(),
            })
            .await
            .unwrap();

        let blogs = SqliteBlogRepository::new(pool.clone());
        let blog = blogs
            .create(NewBlog {
                title: "Post".to_string(),
                content: "Body".to_string(),
                author_id: author.id,
                published_at: Utc::now(),
            })
            .await
            .unwrap();

        Fixture {
            comments: SqliteCommentRepository::new(pool),
            blogs,
            author: author.id,
            blog: blog.id,
        }
    }

    fn new_comment(fixture: &Fixture, content: &str) -> NewComment {
        NewComment {
            blog_id: fixture.blog,
            author_id: fixture.author,
            content: content.to_string(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_create_returns_author_name() {
        let fixture = setup().await;

        let comment = fixture
            .comments
            .create(new_comment(&fixture, "<svg onload=alert(1)>"))
            .await
            .unwrap();

        assert_eq!(comment.author_name.as_deref(), Some("Mallory"));
        assert_eq!(comment.content, "<svg onload=alert(1)>");

        let found = fixture.comments.find_by_id(comment.id).await.unwrap();
        assert_eq!(found, Some(comment));
    }

    #[tokio::test]
    async fn test_list_by_blog_in_insertion_order() {
        let fixture = setup().await;

        fixture.comments.create(new_comment(&fixture, "first")).await.unwrap();
        fixture.comments.create(new_comment(&fixture, "second")).await.unwrap();

        let comments = fixture.comments.list_by_blog(fixture.blog).await.unwrap();
        let contents: Vec<&str> = comments.iter().map(|c| c.content.as_str()).collect();
        assert_eq!(contents, vec!["first", "second"]);

        assert!(fixture.comments.list_by_blog(BlogId(999)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_on_missing_blog() {
        let fixture = setup().await;

        let mut comment = new_comment(&fixture, "lost");
        comment.blog_id = BlogId(999);

        let result = fixture.comments.create(comment).await;
        assert!(matches!(result, Err(CommentError::BlogNotFound(BlogId(999)))));
    }

    #[tokio::test]
    async fn test_create_by_missing_author() {
        let fixture = setup().await;

        let mut comment = new_comment(&fixture, "ghost");
        comment.author_id = UserId(999);

        let result = fixture.comments.create(comment).await;
        assert!(matches!(
            result,
            Err(CommentError::AuthorNotFound(UserId(999)))
        ));
        assert!(fixture.comments.list_by_blog(fixture.blog).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_comments_removed_with_blog() {
        let fixture = setup().await;

        let comment = fixture
            .comments
            .create(new_comment(&fixture, "doomed"))
            .await
            .unwrap();

        fixture.blogs.delete(fixture.blog).await.unwrap();

        assert!(fixture.comments.find_by_id(comment.id).await.unwrap().is_none());
    }
}
