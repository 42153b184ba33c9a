use axum::extract::State;
use axum::http::StatusCode;
use serde::Serialize;

use super::ApiError;
use super::ApiSuccess;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::router::AppState;

pub async fn count_blogs(
    State(state): State<AppState>,
) -> Result<ApiSuccess<CountBlogsResponseData>, ApiError> {
    state
        .blog_service
        .count_blogs()
        .await
        .map_err(ApiError::from)
        .map(|count| ApiSuccess::new(StatusCode::OK, CountBlogsResponseData { count }))
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountBlogsResponseData {
    pub count: i64,
}
