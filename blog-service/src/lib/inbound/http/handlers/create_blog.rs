use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Form;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::BlogData;
use crate::domain::blog::models::CreateBlogCommand;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn create_blog(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Form(body): Form<BlogForm>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let command = CreateBlogCommand {
        title: body.title,
        content: body.content,
    };

    state
        .blog_service
        .create_blog(command, authenticated.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::CREATED, blog.into()))
}

/// Title and content form shared by create and update.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BlogForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}
