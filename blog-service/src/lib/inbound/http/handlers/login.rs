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
use crate::domain::user::models::EmailAddress;
use crate::domain::user::ports::UserServicePort;
use crate::inbound::http::router::AppState;
use crate::user::errors::UserError;

const LOGIN_PAGE: &str = "/login";
const MISSING_FIELDS: &str = "Email and password are required";
const INVALID_CREDENTIALS: &str = "Invalid email or password";

/// Verify credentials and hand back a bearer token.
///
/// Every credential failure redirects with the same message; the actual
/// cause is only logged.
pub async fn login(
    State(state): State<AppState>,
    Form(body): Form<LoginForm>,
) -> Result<Response, ApiError> {
    if body.email.is_empty() || body.password.is_empty() {
        return Ok(redirect_with_error(LOGIN_PAGE, MISSING_FIELDS));
    }

    let Ok(email) = EmailAddress::new(body.email.clone()) else {
        tracing::warn!(email = %body.email, "Login with malformed email");
        return Ok(redirect_with_error(LOGIN_PAGE, INVALID_CREDENTIALS));
    };

    let user = match state.user_service.get_user_by_email(&email).await {
        Ok(user) => user,
        Err(UserError::NotFoundByEmail(_)) => {
            tracing::warn!(email = %email, "Login for unknown email");
            return Ok(redirect_with_error(LOGIN_PAGE, INVALID_CREDENTIALS));
        }
        Err(e) => return Err(ApiError::from(e)),
    };

    let result = match state.authenticator.authenticate(
        &user.password_hash,
        &body.password,
        &user.id.to_string(),
    ) {
        Ok(result) => result,
        Err(auth::AuthenticationError::JwtError(e)) => {
            return Err(ApiError::InternalServerError(format!(
                "Token generation failed: {e}"
            )));
        }
        Err(e) => {
            tracing::warn!(user_id = %user.id, error = %e, "Password verification failed");
            return Ok(redirect_with_error(LOGIN_PAGE, INVALID_CREDENTIALS));
        }
    };

    tracing::info!(user_id = %user.id, "User logged in");

    let mut response = ApiSuccess::new(
        StatusCode::OK,
        AuthResponseData {
            token: result.access_token.clone(),
            user: (&user).into(),
        },
    )
    .into_response();

    auth::set_bearer_token(response.headers_mut(), &result.access_token)
        .map_err(|e| ApiError::InternalServerError(e.to_string()))?;

    Ok(response)
}

/// Login form; absent fields deserialize as empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}
