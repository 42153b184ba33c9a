//! Authentication utilities library
//!
//! Provides the authentication building blocks for the blog service:
//! - Password hashing (Argon2id, inputs limited to 72 bytes)
//! - JWT issuing and validation (HS256, fixed issuer, hard expiry)
//! - `Authorization: Bearer` header helpers
//! - Authentication coordination
//!
//! Every error type exposes [`ErrorKind`] so callers can tell invalid input
//! apart from authentication failures.
//!
//! # Examples
//!
//! ## Password Hashing
//! ```
//! let hash = auth::password::hash("my_password").unwrap();
//! assert!(auth::password::verify(&hash, "my_password").is_ok());
//! assert!(auth::password::verify(&hash, "not_my_password").is_err());
//! ```
//!
//! ## JWT Tokens
//! ```
//! use chrono::Duration;
//!
//! let token = auth::jwt::issue("42", "secret", Duration::hours(1)).unwrap();
//! assert_eq!(auth::jwt::validate(&token, "secret").unwrap(), "42");
//! assert!(auth::jwt::validate(&token, "other").is_err());
//! ```
//!
//! ## Complete Authentication Flow
//! ```
//! use auth::Authenticator;
//! use chrono::Duration;
//!
//! let auth = Authenticator::new(b"secret_key_at_least_32_bytes_long!", Duration::hours(1)).unwrap();
//!
//! // Register: hash password
//! let hash = auth.hash_password("password123").unwrap();
//!
//! // Login: verify and generate token
//! let result = auth.authenticate(&hash, "password123", "42").unwrap();
//!
//! // Validate token
//! let subject = auth.validate_token(&result.access_token).unwrap();
//! assert_eq!(subject, "42");
//! ```

pub mod authenticator;
pub mod errors;
pub mod headers;
pub mod jwt;
pub mod password;

// Re-export commonly used items
pub use authenticator::AuthenticationError;
pub use authenticator::AuthenticationResult;
pub use authenticator::Authenticator;
pub use errors::ErrorKind;
pub use headers::bearer_token;
pub use headers::set_bearer_token;
pub use headers::HeaderError;
pub use jwt::Claims;
pub use jwt::JwtError;
pub use jwt::JwtHandler;
pub use password::PasswordError;
pub use password::PasswordHasher;
