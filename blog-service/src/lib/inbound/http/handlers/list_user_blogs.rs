use axum::extract::Path;
use axum::extract::State;
use axum::http::StatusCode;

use super::ApiError;
use super::ApiSuccess;
use super::BlogData;
use crate::domain::blog::ports::BlogServicePort;
use crate::domain::user::models::UserId;
use crate::inbound::http::router::AppState;

pub async fn list_user_blogs(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<ApiSuccess<Vec<BlogData>>, ApiError> {
    let user_id = UserId::from_string(&user_id)
        .map_err(|e| ApiError::BadRequest(format!("Invalid user ID: {e}")))?;

    state
        .blog_service
        .list_user_blogs(user_id)
        .await
        .map_err(ApiError::from)
        .map(|blogs| ApiSuccess::new(StatusCode::OK, blogs.iter().map(BlogData::from).collect()))
}
