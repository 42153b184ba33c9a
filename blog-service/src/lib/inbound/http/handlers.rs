use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Redirect;
use axum::response::Response;
use axum::Json;
use chrono::DateTime;
use chrono::Utc;
use serde::Serialize;

use crate::domain::blog::errors::BlogError;
use crate::domain::blog::models::Blog;
use crate::domain::comment::errors::CommentError;
use crate::domain::user::models::User;
use crate::user::errors::UserError;

pub mod count_blogs;
pub mod create_blog;
pub mod create_comment;
pub mod delete_blog;
pub mod list_blogs;
pub mod list_user_blogs;
pub mod login;
pub mod register;
pub mod search_blogs;
pub mod update_blog;

#[derive(Debug, Clone)]
pub struct ApiSuccess<T: Serialize + PartialEq>(StatusCode, Json<ApiResponseBody<T>>);

impl<T> PartialEq for ApiSuccess<T>
where
    T: Serialize + PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0 && self.1 .0 == other.1 .0
    }
}

impl<T: Serialize + PartialEq> ApiSuccess<T> {
    pub fn new(status: StatusCode, data: T) -> Self {
        ApiSuccess(status, Json(ApiResponseBody::new(status, data)))
    }
}

impl<T: Serialize + PartialEq> IntoResponse for ApiSuccess<T> {
    fn into_response(self) -> Response {
        (self.0, self.1).into_response()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    InternalServerError(String),
    UnprocessableEntity(String),
    BadRequest(String),
    NotFound(String),
    Conflict(String),
    Unauthorized(String),
    Forbidden(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InternalServerError(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ApiError::UnprocessableEntity(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, msg),
        };

        (status, Json(ApiResponseBody::new_error(status, message))).into_response()
    }
}

impl From<UserError> for ApiError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::NotFound(_) | UserError::NotFoundByEmail(_) => {
                ApiError::NotFound(err.to_string())
            }
            UserError::EmailAlreadyExists(_) => ApiError::Conflict(err.to_string()),
            UserError::InvalidName(_) | UserError::InvalidEmail(_) | UserError::InvalidUserId(_) => {
                ApiError::UnprocessableEntity(err.to_string())
            }
            UserError::Password(ref e) => match e.kind() {
                auth::ErrorKind::InvalidInput => ApiError::BadRequest(err.to_string()),
                auth::ErrorKind::AuthFailure => ApiError::Unauthorized(err.to_string()),
                auth::ErrorKind::Internal => ApiError::InternalServerError(err.to_string()),
            },
            UserError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<BlogError> for ApiError {
    fn from(err: BlogError) -> Self {
        match err {
            BlogError::InvalidBlogId(_) | BlogError::InvalidPage(_) => {
                ApiError::BadRequest(err.to_string())
            }
            BlogError::NotFound(_) => ApiError::NotFound(err.to_string()),
            BlogError::AuthorNotFound(_) => ApiError::Unauthorized(err.to_string()),
            BlogError::Forbidden { .. } => ApiError::Forbidden(err.to_string()),
            BlogError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

impl From<CommentError> for ApiError {
    fn from(err: CommentError) -> Self {
        match err {
            CommentError::InvalidCommentId(_) | CommentError::InvalidBlogId(_) => {
                ApiError::BadRequest(err.to_string())
            }
            CommentError::BlogNotFound(_) | CommentError::NotFound(_) => {
                ApiError::NotFound(err.to_string())
            }
            CommentError::AuthorNotFound(_) => ApiError::Unauthorized(err.to_string()),
            CommentError::DatabaseError(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiResponseBody<T: Serialize + PartialEq> {
    status_code: u16,
    data: T,
}

impl<T: Serialize + PartialEq> ApiResponseBody<T> {
    pub fn new(status_code: StatusCode, data: T) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data,
        }
    }
}

impl ApiResponseBody<ApiErrorData> {
    pub fn new_error(status_code: StatusCode, message: String) -> Self {
        Self {
            status_code: status_code.as_u16(),
            data: ApiErrorData { message },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiErrorData {
    pub message: String,
}

/// 303 back to a form page with `error` set to `message`.
pub fn redirect_with_error(page: &str, message: &str) -> Response {
    Redirect::to(&format!("{page}?error={}", urlencoding::encode(message))).into_response()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserData {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserData {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.0,
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            created_at: user.created_at,
        }
    }
}

/// Response data for login and registration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthResponseData {
    pub token: String,
    pub user: UserData,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogData {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub user_id: i64,
    pub published_at: DateTime<Utc>,
}

impl From<&Blog> for BlogData {
    fn from(blog: &Blog) -> Self {
        Self {
            id: blog.id.0,
            title: blog.title.clone(),
            content: blog.content.clone(),
            user_id: blog.author_id.0,
            published_at: blog.published_at,
        }
    }
}
