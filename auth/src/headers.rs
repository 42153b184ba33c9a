use http::header::AUTHORIZATION;
use http::HeaderMap;
use http::HeaderValue;
use thiserror::Error;

use crate::errors::ErrorKind;

const BEARER_PREFIX: &str = "Bearer ";

/// Error type for reading or writing the `Authorization` header.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HeaderError {
    #[error("authorization header not found")]
    Missing,

    #[error("invalid authorization header format")]
    InvalidFormat,

    #[error("token is empty")]
    EmptyToken,

    #[error("token is not a valid header value")]
    InvalidToken,
}

impl HeaderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HeaderError::InvalidToken => ErrorKind::InvalidInput,
            _ => ErrorKind::AuthFailure,
        }
    }
}

/// Extract the token from an `Authorization: Bearer <token>` header.
///
/// The scheme is matched literally, including case and the single space.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, HeaderError> {
    let value = headers.get(AUTHORIZATION).ok_or(HeaderError::Missing)?;
    let value = value.to_str().map_err(|_| HeaderError::InvalidFormat)?;

    if value.is_empty() {
        return Err(HeaderError::Missing);
    }

    let token = value
        .strip_prefix(BEARER_PREFIX)
        .ok_or(HeaderError::InvalidFormat)?;

    if token.is_empty() {
        return Err(HeaderError::EmptyToken);
    }

    Ok(token)
}

/// Set `Authorization: Bearer <token>`, or remove the header when `token` is empty.
pub fn set_bearer_token(headers: &mut HeaderMap, token: &str) -> Result<(), HeaderError> {
    if token.is_empty() {
        headers.remove(AUTHORIZATION);
        return Ok(());
    }

    let value = HeaderValue::from_str(&format!("{BEARER_PREFIX}{token}"))
        .map_err(|_| HeaderError::InvalidToken)?;
    headers.insert(AUTHORIZATION, value);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_authorization(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_bearer_token_valid() {
        let headers = with_authorization("Bearer validtoken");
        assert_eq!(bearer_token(&headers), Ok("validtoken"));
    }

    #[test]
    fn test_bearer_token_missing() {
        let err = bearer_token(&HeaderMap::new()).unwrap_err();
        assert_eq!(err, HeaderError::Missing);
        assert_eq!(err.kind(), ErrorKind::AuthFailure);
    }

    #[test]
    fn test_bearer_token_invalid_format() {
        for value in ["InvalidFormat", "Token abc", "bearer abc", "Bearer"] {
            let headers = with_authorization(value);
            assert_eq!(
                bearer_token(&headers),
                Err(HeaderError::InvalidFormat),
                "value {value:?}"
            );
        }
    }

    #[test]
    fn test_bearer_token_empty() {
        let headers = with_authorization("Bearer ");
        assert_eq!(bearer_token(&headers), Err(HeaderError::EmptyToken));
    }

    #[test]
    fn test_set_bearer_token_replaces_existing() {
        let mut headers = with_authorization("OldToken");

        set_bearer_token(&mut headers, "NewToken").unwrap();

        assert_eq!(headers.get_all(AUTHORIZATION).iter().count(), 1);
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer NewToken");
    }

    #[test]
    fn test_set_empty_token_removes_header() {
        let mut headers = with_authorization("Bearer stale");

        set_bearer_token(&mut headers, "").unwrap();

        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_set_bearer_token_rejects_control_characters() {
        let mut headers = HeaderMap::new();

        let err = set_bearer_token(&mut headers, "abc\ndef").unwrap_err();
        assert_eq!(err, HeaderError::InvalidToken);
        assert!(headers.is_empty());
    }

    #[test]
    fn test_set_then_read_back() {
        let mut headers = HeaderMap::new();
        set_bearer_token(&mut headers, "abc123").unwrap();
        assert_eq!(bearer_token(&headers), Ok("abc123"));
    }
}
