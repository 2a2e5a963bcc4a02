//! Handler bodies shared by the teacher and student route modules. The
//! modules differ only in which service bundle they address, the name of
//! their list-filter query parameter, and the shape of the classroom
//! lookup.

use axum::response::{IntoResponse, Response};
use axum::{http::HeaderValue, Json};
use chalkboard_database::{
    NewRosterMember, RosterMember, RosterRepository, UpdateRosterMember,
};
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::state::IdentityServices;

type RosterServices = IdentityServices<RosterRepository>;

pub(super) async fn list(
    services: &RosterServices,
    name_query: Option<String>,
) -> ApiResult<Json<ApiResponse<Vec<RosterMember>>>> {
    let members = services
        .directory
        .search_by_name(name_query.as_deref().unwrap_or(""))
        .await
        .map_err(|e| ApiError::new(services.kind, e))?;
    Ok(ApiResponse::ok(members))
}

pub(super) async fn get_by_id(
    services: &RosterServices,
    id: &str,
) -> ApiResult<Json<ApiResponse<RosterMember>>> {
    let member = services
        .directory
        .get(id)
        .await
        .map_err(|e| ApiError::new(services.kind, e))?;
    Ok(ApiResponse::ok(member))
}

pub(super) async fn add(
    services: &RosterServices,
    request: NewRosterMember,
) -> ApiResult<Json<ApiResponse<RosterMember>>> {
    let member = services
        .registration
        .register(request)
        .await
        .map_err(|e| ApiError::new(services.kind, e))?;
    Ok(ApiResponse::ok_with_message(
        member,
        format!("Successfully created a new {}", services.kind.label()),
    ))
}

pub(super) async fn edit(
    services: &RosterServices,
    id: &str,
    patch: UpdateRosterMember,
) -> ApiResult<Json<ApiResponse<RosterMember>>> {
    let member = services
        .directory
        .update(id, patch)
        .await
        .map_err(|e| ApiError::new(services.kind, e))?;
    Ok(ApiResponse::ok_with_message(
        member,
        format!("Successfully updated a {}", services.kind.label()),
    ))
}

pub(super) async fn delete(
    services: &RosterServices,
    id: &str,
) -> ApiResult<Json<ApiResponse<RosterMember>>> {
    let member = services
        .directory
        .delete(id)
        .await
        .map_err(|e| ApiError::new(services.kind, e))?;
    Ok(ApiResponse::ok_with_message(
        member,
        format!("Successfully deleted a {}", services.kind.label()),
    ))
}

pub(super) async fn login(
    services: &RosterServices,
    email: &str,
    password: &str,
) -> ApiResult<Response> {
    let (member, token) = services
        .auth
        .login(email, password)
        .await
        .map_err(|e| ApiError::new(services.kind, e))?;
    Ok(login_success(member, email, token))
}

/// Successful-login envelope: the token rides in the body and in an
/// `x-auth-token` response header.
pub(crate) fn login_success<T: Serialize>(record: T, email: &str, token: String) -> Response {
    let body = ApiResponse {
        success: true,
        data: Some(record),
        message: Some(format!("Successfully logged in as {email}")),
        error: None,
        token: Some(token.clone()),
    };

    let mut response = Json(body).into_response();
    // JWTs are ASCII; a malformed one here would be an issuer bug.
    if let Ok(value) = HeaderValue::from_str(&token) {
        response.headers_mut().insert("x-auth-token", value);
    }
    response
}
