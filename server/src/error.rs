//! Mapping of identity errors onto the response envelope.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chalkboard_database::{IdentityError, IdentityKind};
use serde_json::json;

/// An identity failure tagged with the kind whose route produced it, so
/// not-found messages can name the entity.
#[derive(Debug)]
pub struct ApiError {
    kind: IdentityKind,
    inner: IdentityError,
}

impl ApiError {
    pub fn new(kind: IdentityKind, inner: IdentityError) -> Self {
        Self { kind, inner }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.inner {
            IdentityError::DuplicateEmail => (
                StatusCode::BAD_REQUEST,
                "An account with this email already exists".to_string(),
            ),
            IdentityError::NotFound => (
                StatusCode::BAD_REQUEST,
                format!(
                    "There is no {} that has the corresponding ID",
                    self.kind.label()
                ),
            ),
            IdentityError::InvalidCredentials => (
                StatusCode::BAD_REQUEST,
                "The email or password is wrong".to_string(),
            ),
            IdentityError::Hash(_) | IdentityError::Token(_) | IdentityError::Database(_) => {
                tracing::error!(kind = self.kind.label(), error = %self.inner, "request failed");
                let body = json!({
                    "success": false,
                    "data": null,
                    "error": "Internal Server Error",
                });
                return (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response();
            }
        };

        let body = json!({
            "success": false,
            "data": null,
            "message": message,
        });
        (status, Json(body)).into_response()
    }
}

/// Result alias for route handlers.
pub type ApiResult<T> = Result<T, ApiError>;
