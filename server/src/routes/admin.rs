//! Admin REST endpoints. Admins carry only credentials, cannot be
//! deleted over HTTP, and have no name or classroom lookups.

use axum::{
    extract::{Path, State},
    response::Response,
    routing::{get, post, put},
    Json, Router,
};
use chalkboard_database::{Admin, NewAdmin, UpdateAdmin};

use super::{roster::login_success, LoginRequest};
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_admins))
        .route("/add", post(add_admin))
        .route("/login", post(login))
        .route("/edit/:id", put(edit_admin))
        .route("/:id", get(get_admin))
}

pub(crate) async fn list_admins(State(state): State<AppState>) -> ApiResult<Json<ApiResponse<Vec<Admin>>>> {
    let admins = state
        .admins
        .directory
        .list_all()
        .await
        .map_err(|e| ApiError::new(state.admins.kind, e))?;
    Ok(ApiResponse::ok(admins))
}

async fn get_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<Admin>>> {
    let admin = state
        .admins
        .directory
        .get(&id)
        .await
        .map_err(|e| ApiError::new(state.admins.kind, e))?;
    Ok(ApiResponse::ok(admin))
}

async fn add_admin(
    State(state): State<AppState>,
    Json(request): Json<NewAdmin>,
) -> ApiResult<Json<ApiResponse<Admin>>> {
    let admin = state
        .admins
        .registration
        .register(request)
        .await
        .map_err(|e| ApiError::new(state.admins.kind, e))?;
    Ok(ApiResponse::ok_with_message(
        admin,
        "Successfully created a new admin",
    ))
}

async fn edit_admin(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateAdmin>,
) -> ApiResult<Json<ApiResponse<Admin>>> {
    let admin = state
        .admins
        .directory
        .update(&id, patch)
        .await
        .map_err(|e| ApiError::new(state.admins.kind, e))?;
    Ok(ApiResponse::ok_with_message(
        admin,
        "Successfully updated an admin",
    ))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Response> {
    let (admin, token) = state
        .admins
        .auth
        .login(&request.email, &request.password)
        .await
        .map_err(|e| ApiError::new(state.admins.kind, e))?;
    Ok(login_success(admin, &request.email, token))
}
