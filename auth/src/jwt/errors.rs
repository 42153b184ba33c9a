use thiserror::Error;

use crate::errors::ErrorKind;

/// Error type for JWT operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JwtError {
    #[error("token subject cannot be empty")]
    EmptySubject,

    #[error("token secret cannot be empty")]
    EmptySecret,

    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Failed to decode token: {0}")]
    DecodingFailed(String),

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token issuer is invalid")]
    InvalidIssuer,

    #[error("Token is expired")]
    TokenExpired,
}

impl JwtError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            JwtError::EmptySubject | JwtError::EmptySecret => ErrorKind::InvalidInput,
            JwtError::EncodingFailed(_) => ErrorKind::Internal,
            JwtError::DecodingFailed(_)
            | JwtError::InvalidSignature
            | JwtError::InvalidIssuer
            | JwtError::TokenExpired => ErrorKind::AuthFailure,
        }
    }
}
