use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;
use axum::Form;

use super::create_blog::BlogForm;
use super::ApiError;
use super::ApiSuccess;
use super::BlogData;
use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::models::UpdateBlogCommand;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn update_blog(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Path(blog_id): Path<String>,
    Form(body): Form<BlogForm>,
) -> Result<ApiSuccess<BlogData>, ApiError> {
    let blog_id = BlogId::from_string(&blog_id).map_err(BlogError::from)?;

    let command = UpdateBlogCommand {
        title: body.title,
        content: body.content,
    };

    state
        .blog_service
        .update_blog(blog_id, command, authenticated.user_id)
        .await
        .map_err(ApiError::from)
        .map(|ref blog| ApiSuccess::new(StatusCode::OK, blog.into()))
}
