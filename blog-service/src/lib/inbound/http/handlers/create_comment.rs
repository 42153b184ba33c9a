use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Form;
use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::blog::models::BlogId;
use crate::domain::comment::errors::CommentError;
use crate::domain::comment::models::Comment;
use crate::domain::comment::models::CreateCommentCommand;
use crate::domain::comment::ports::CommentServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_comment(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Path(blog_id): Path<String>,
    Form(body): Form<CommentForm>,
) -> Result<ApiSuccess<CommentData>, ApiError> {
    let blog_id = BlogId::from_string(&blog_id).map_err(CommentError::from)?;

    let command = CreateCommentCommand {
        blog_id,
        content: body.content,
    };

    state
        .comment_service
        .create_comment(command, authenticated.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref comment| ApiSuccess::new(StatusCode::CREATED, comment.into()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CommentForm {
    #[serde(default)]
    content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentData {
    pub id: i64,
    pub blog_id: i64,
    pub user_id: i64,
    pub author_name: Option<String>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl From<&Comment> for CommentData {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id.0,
            blog_id: comment.blog_id.0,
            user_id: comment.author_id.0,
            author_name: comment.author_name.clone(),
            content: comment.content.clone(),
            created_at: comment.created_at,
        }
    }
}
