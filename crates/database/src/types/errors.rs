//! Error types shared by the identity core and its storage layer.

use thiserror::Error;

/// Failures of the identity services and the store adapter beneath them.
///
/// The first three variants are business-rule failures that the HTTP layer
/// surfaces as client errors; everything else is treated as an internal
/// fault and never leaks detail to the caller.
#[derive(Debug, Error)]
pub enum IdentityError {
    #[error("an account with this email already exists")]
    DuplicateEmail,

    #[error("record not found")]
    NotFound,

    #[error("the email or password is wrong")]
    InvalidCredentials,

    #[error("password hashing failed: {0}")]
    Hash(String),

    #[error("token error: {0}")]
    Token(String),

    #[error("database error: {0}")]
    Database(String),
}

/// Result alias used throughout the identity core.
pub type IdentityResult<T> = Result<T, IdentityError>;

impl From<sqlx::Error> for IdentityError {
    fn from(error: sqlx::Error) -> Self {
        IdentityError::Database(error.to_string())
    }
}
