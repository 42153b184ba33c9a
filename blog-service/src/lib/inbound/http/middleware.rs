use std::sync::Arc;

use auth::Authenticator;
use auth::ErrorKind;
use auth::HeaderError;
use axum::extract::Request;
use axum::extract::State;
use axum::middleware::Next;
use axum::response::Response;

use super::handlers::ApiError;
use crate::domain::user::models::UserId;

/// Extension type to store the authenticated user ID in request extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that validates the bearer token and adds the caller to request extensions.
///
/// The downstream handler only runs when the token is valid and its subject
/// parses as a user ID.
pub async fn authorize(
    State(authenticator): State<Arc<Authenticator>>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = auth::bearer_token(req.headers()).map_err(header_error)?;

    let subject = authenticator.validate_token(token).map_err(|e| {
        tracing::warn!(error = %e, "JWT validation failed");
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;

    let user_id = UserId::from_string(&subject).map_err(|e| {
        tracing::warn!(subject = %subject, error = %e, "Token subject is not a user ID");
        ApiError::BadRequest("Invalid user ID".to_string())
    })?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

fn header_error(e: HeaderError) -> ApiError {
    let kind = e.kind();
    let message = match e {
        HeaderError::Missing => "Missing Authorization header".to_string(),
        HeaderError::InvalidFormat => {
            "Invalid Authorization header format. Expected: Bearer <token>".to_string()
        }
        other => other.to_string(),
    };

    match kind {
        ErrorKind::InvalidInput => ApiError::BadRequest(message),
        ErrorKind::AuthFailure | ErrorKind::Internal => ApiError::Unauthorized(message),
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::header::AUTHORIZATION;
    use axum::http::StatusCode;
    use axum::middleware;
    use axum::routing::get;
    use axum::Extension;
    use axum::Router;
    use chrono::Duration;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    const SECRET: &[u8] = b"middleware-test-secret";

    fn authenticator() -> Arc<Authenticator> {
        Arc::new(Authenticator::new(SECRET, Duration::hours(1)).unwrap())
    }

    fn app(authenticator: Arc<Authenticator>) -> Router {
        Router::new()
            .route(
                "/protected",
                get(|Extension(user): Extension<AuthenticatedUser>| async move {
                    format!("user {}", user.user_id)
                }),
            )
            .route_layer(middleware::from_fn_with_state(authenticator, authorize))
    }

    async fn call(authorization: Option<&str>) -> (StatusCode, String) {
        let mut request = axum::http::Request::builder().uri("/protected");
        if let Some(value) = authorization {
            request = request.header(AUTHORIZATION, value);
        }

        let response = app(authenticator())
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_valid_token_reaches_handler() {
        let token = authenticator().generate_token("42").unwrap();

        let (status, body) = call(Some(&format!("Bearer {token}"))).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "user 42");
    }

    #[tokio::test]
    async fn test_missing_header() {
        let (status, body) = call(None).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Missing Authorization header"));
    }

    #[tokio::test]
    async fn test_wrong_scheme() {
        let (status, _) = call(Some("Token abc")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_lowercase_scheme() {
        let token = authenticator().generate_token("42").unwrap();

        let (status, _) = call(Some(&format!("bearer {token}"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_empty_token() {
        let (status, _) = call(Some("Bearer ")).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_token_signed_with_other_secret() {
        let other = Authenticator::new(b"another-secret", Duration::hours(1)).unwrap();
        let token = other.generate_token("42").unwrap();

        let (status, body) = call(Some(&format!("Bearer {token}"))).await;

        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert!(body.contains("Invalid or expired token"));
    }

    #[tokio::test]
    async fn test_expired_token() {
        let token = auth::jwt::issue(
            "42",
            std::str::from_utf8(SECRET).unwrap(),
            Duration::seconds(-30),
        )
        .unwrap();

        let (status, _) = call(Some(&format!("Bearer {token}"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_non_numeric_subject() {
        let token = authenticator().generate_token("alice").unwrap();

        let (status, body) = call(Some(&format!("Bearer {token}"))).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("Invalid user ID"));
    }

    #[tokio::test]
    async fn test_non_positive_subject() {
        for subject in ["0", "-4"] {
            let token = authenticator().generate_token(subject).unwrap();

            let (status, body) = call(Some(&format!("Bearer {token}"))).await;

            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body.contains("Invalid user ID"));
        }
    }
}
