use chrono::Duration;

use crate::errors::ErrorKind;
use crate::jwt::JwtError;
use crate::jwt::JwtHandler;
use crate::password::PasswordError;
use crate::password::PasswordHasher;

/// Authentication coordinator combining password verification and JWT generation.
///
/// Built once at start-up from configuration and shared read-only between
/// request handlers.
pub struct Authenticator {
    password_hasher: PasswordHasher,
    jwt_handler: JwtHandler,
    token_ttl: Duration,
}

/// Result of successful authentication.
#[derive(Debug)]
pub struct AuthenticationResult {
    /// JWT access token
    pub access_token: String,
}

/// Authentication operation errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("JWT error: {0}")]
    JwtError(#[from] JwtError),
}

impl AuthenticationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthenticationError::InvalidCredentials => ErrorKind::AuthFailure,
            AuthenticationError::PasswordError(e) => e.kind(),
            AuthenticationError::JwtError(e) => e.kind(),
        }
    }
}

impl Authenticator {
    /// Create a new authenticator.
    ///
    /// # Arguments
    /// * `jwt_secret` - Secret key for JWT signing
    /// * `token_ttl` - Lifetime of every issued token
    ///
    /// # Errors
    /// * `EmptySecret` - The secret is empty
    pub fn new(jwt_secret: &[u8], token_ttl: Duration) -> Result<Self, JwtError> {
        Ok(Self {
            password_hasher: PasswordHasher::new(),
            jwt_handler: JwtHandler::new(jwt_secret)?,
            token_ttl,
        })
    }

    /// Hash a password for storage.
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        self.password_hasher.hash(password)
    }

    /// Verify credentials and issue a token for `subject`.
    ///
    /// # Arguments
    /// * `stored_hash` - Stored password hash
    /// * `password` - Plaintext password to verify
    /// * `subject` - Identifier to embed in the token
    ///
    /// # Errors
    /// * `InvalidCredentials` - Password does not match
    /// * `PasswordError` - Password is malformed or the hash cannot be read
    /// * `JwtError` - Token generation failed
    pub fn authenticate(
        &self,
        stored_hash: &str,
        password: &str,
        subject: &str,
    ) -> Result<AuthenticationResult, AuthenticationError> {
        self.password_hasher
            .verify(stored_hash, password)
            .map_err(|e| match e {
                PasswordError::Mismatch => AuthenticationError::InvalidCredentials,
                other => AuthenticationError::PasswordError(other),
            })?;

        let access_token = self.generate_token(subject)?;

        Ok(AuthenticationResult { access_token })
    }

    /// Issue a token without password verification.
    ///
    /// Used right after registration, when the caller just proved the password.
    pub fn generate_token(&self, subject: &str) -> Result<String, JwtError> {
        self.jwt_handler.issue(subject, self.token_ttl)
    }

    /// Validate a token and return its subject.
    pub fn validate_token(&self, token: &str) -> Result<String, JwtError> {
        self.jwt_handler.validate(token)
    }
}
