use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::Error as PasswordHashError;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Argon2;

use super::errors::PasswordError;

/// Password hashing implementation.
///
/// Produces self-describing PHC strings (internally uses Argon2id with the
/// crate's fixed default cost parameters and a fresh random salt per hash).
pub struct PasswordHasher;

impl PasswordHasher {
    /// Longest accepted password, in bytes.
    pub const MAX_LENGTH: usize = 72;

    /// Create a new password hasher instance.
    pub fn new() -> Self {
        Self
    }

    /// Hash a plaintext password for storage.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `Empty` / `TooLong` - Password violates the length constraints
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        Self::check_length(password)?;

        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();

        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// # Arguments
    /// * `hash` - Stored password hash in PHC string format
    /// * `password` - Plaintext password to verify
    ///
    /// # Errors
    /// * `Empty` / `TooLong` - Password violates the length constraints
    /// * `Mismatch` - Password does not match the hash
    /// * `MalformedHash` - Stored hash cannot be parsed or checked
    pub fn verify(&self, hash: &str, password: &str) -> Result<(), PasswordError> {
        Self::check_length(password)?;

        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| PasswordError::MalformedHash(e.to_string()))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|e| match e {
                PasswordHashError::Password => PasswordError::Mismatch,
                other => PasswordError::MalformedHash(other.to_string()),
            })
    }

    fn check_length(password: &str) -> Result<(), PasswordError> {
        match password.len() {
            0 => Err(PasswordError::Empty),
            n if n > Self::MAX_LENGTH => Err(PasswordError::TooLong {
                max: Self::MAX_LENGTH,
                actual: n,
            }),
            _ => Ok(()),
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
