use thiserror::Error;

use crate::errors::ErrorKind;

/// Error type for password operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PasswordError {
    #[error("password cannot be empty")]
    Empty,

    #[error("password length cannot exceed {max} bytes, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("password does not match")]
    Mismatch,

    #[error("invalid password hash: {0}")]
    MalformedHash(String),

    #[error("password hashing failed: {0}")]
    HashingFailed(String),
}

impl PasswordError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            PasswordError::Empty | PasswordError::TooLong { .. } => ErrorKind::InvalidInput,
            PasswordError::Mismatch | PasswordError::MalformedHash(_) => ErrorKind::AuthFailure,
            PasswordError::HashingFailed(_) => ErrorKind::Internal,
        }
    }
}
