pub mod argon2;
pub mod errors;

pub use argon2::PasswordHasher;
pub use errors::PasswordError;

/// Hash a plaintext password with the default hasher.
pub fn hash(password: &str) -> Result<String, PasswordError> {
    PasswordHasher::new().hash(password)
}

/// Verify a plaintext password against a stored hash with the default hasher.
pub fn verify(hash: &str, password: &str) -> Result<(), PasswordError> {
    PasswordHasher::new().verify(hash, password)
}
