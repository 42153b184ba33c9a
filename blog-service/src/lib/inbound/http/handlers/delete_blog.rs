use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Extension;

use super::ApiError;
use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::BlogId;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::middleware::AuthenticatedUser;
use crate::inbound::http::router::AppState;

pub async fn delete_blog(
    State(state): State<AppState>,
    Extension(authenticated): Extension<AuthenticatedUser>,
    Path(blog_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let blog_id = BlogId::from_string(&blog_id).map_err(BlogError::from)?;

    state
        .blog_service
        .delete_blog(blog_id, authenticated.user_id)
        .await?;

    tracing::info!(blog_id = %blog_id, user_id = %authenticated.user_id, "Blog deleted");

    Ok(StatusCode::NO_CONTENT)
}
