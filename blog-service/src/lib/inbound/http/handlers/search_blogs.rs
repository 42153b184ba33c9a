use axum::extract::Query;
use axum::extract::State;
use axum::http::StatusCode;
use serde::Deserialize;

use super::ApiError;
use super::ApiSuccess;
use super::BlogData;
use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Page;
use crate::domain::blog::ports::BlogServicePort;
use crate::inbound::http::router::AppState;

/// Title substring search. A missing title matches every post.
pub async fn search_blogs(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> Result<ApiSuccess<Vec<BlogData>>, ApiError> {
    let page = Page::from_query(query.page.as_deref()).map_err(BlogError::from)?;
    let title = query.title.unwrap_or_default();

    state
        .blog_service
        .search_blogs(&title, page)
        .await
        .map_err(ApiError::from)
        .map(|blogs| ApiSuccess::new(StatusCode::OK, blogs.iter().map(BlogData::from).collect()))
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SearchQuery {
    title: Option<String>,
    page: Option<String>,
}
