pub mod claims;
pub mod errors;
pub mod handler;

use chrono::Duration;

pub use claims::Claims;
pub use claims::ISSUER;
pub use errors::JwtError;
pub use handler::JwtHandler;

/// Issue a token for `subject`, signed with `secret`, valid for `ttl`.
pub fn issue(subject: &str, secret: &str, ttl: Duration) -> Result<String, JwtError> {
    JwtHandler::new(secret.as_bytes())?.issue(subject, ttl)
}

/// Validate `token` against `secret` and return its subject.
pub fn validate(token: &str, secret: &str) -> Result<String, JwtError> {
    JwtHandler::new(secret.as_bytes())?.validate(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn test_issue_then_validate_same_secret() {
        let token = issue("42", "secret", Duration::hours(1)).unwrap();
        assert_eq!(validate(&token, "secret").unwrap(), "42");
    }

    #[test]
    fn test_validate_other_secret() {
        let token = issue("42", "secret-a", Duration::hours(1)).unwrap();

        let err = validate(&token, "secret-b").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::AuthFailure);
    }

    #[test]
    fn test_empty_arguments() {
        assert_eq!(
            issue("", "secret", Duration::hours(1)).unwrap_err(),
            JwtError::EmptySubject
        );
        assert_eq!(
            issue("42", "", Duration::hours(1)).unwrap_err(),
            JwtError::EmptySecret
        );
        assert_eq!(validate("validtoken", "").unwrap_err(), JwtError::EmptySecret);
    }
}
