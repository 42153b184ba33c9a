use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Form;
use serde::Deserialize;

use super::redirect_with_error;
use super::ApiError;
use super::ApiSuccess;
use super::AuthResponseData;
use crate::domain::user::models::CreateUserCommand;
use crate::domain::user::models::EmailAddress;
use crate::domain::user::models::UserName;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;

const REGISTER_PAGE: &str = "/register";
const MIN_PASSWORD_LENGTH: usize = 8;

/// Create an account and log it in straight away.
pub async fn register(
    State(state): State<AppState>,
    Form(body): Form<RegisterForm>,
) -> Result<Response, ApiError> {
    if body.name.is_empty() || body.email.is_empty() || body.password.is_empty() {
        return Ok(redirect_with_error(REGISTER_PAGE, "All fields are required"));
    }

    if body.password.len() < MIN_PASSWORD_LENGTH {
        return Ok(redirect_with_error(
            REGISTER_PAGE,
            "Password must be at least 8 characters long",
        ));
    }

    let name = match UserName::new(body.name) {
        Ok(name) => name,
        Err(e) => return Ok(redirect_with_error(REGISTER_PAGE, &e.to_string())),
    };
    let email = match EmailAddress::new(body.email) {
        Ok(email) => email,
        Err(e) => return Ok(redirect_with_error(REGISTER_PAGE, &e.to_string())),
    };

    let user = state
        .user_service
        .create_user(CreateUserCommand::new(name, email, body.password))
        .await?;

    let token = state
        .authenticator
        .generate_token(&user.id.to_string())
        .map_err(|e| ApiError::InternalServerError(format!("Token generation failed: {e}")))?;

    let mut response = ApiSuccess::new(
        StatusCode::CREATED,
        AuthResponseData {
            token: token.clone(),
            user: (&user).into(),
        },
    )
    .into_response();

    auth::set_bearer_token(response.headers_mut(), &token)
        .map_err(|e| ApiError::InternalServerError(e.to_string()))?;

    Ok(response)
}

/// Registration form; absent fields deserialize as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterForm {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}
