//! Password hashing and verification.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chalkboard_database::{IdentityError, IdentityResult};

/// Hash a password using Argon2 with a fresh random salt. Hashing the same
/// plaintext twice yields different strings; both verify.
pub fn hash_password(password: &str) -> IdentityResult<String> {
    if password.is_empty() {
        return Err(IdentityError::Hash("password must not be empty".to_string()));
    }

    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| IdentityError::Hash(e.to_string()))?
        .to_string();

    Ok(password_hash)
}

/// Verify a password against its stored hash. Mismatched and malformed
/// hashes both answer false; this never fails.
pub fn verify_password(password: &str, stored_hash: &str) -> bool {
    let Ok(parsed_hash) = PasswordHash::new(stored_hash) else {
        return false;
    };

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok()
}
