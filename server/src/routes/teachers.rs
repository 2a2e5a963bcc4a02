//! Teacher REST endpoints.

use axum::{
    extract::{Path, Query, State},
    response::Response,
    routing::{delete, get, post, put},
    Json, Router,
};
use chalkboard_database::{NewRosterMember, RosterMember, UpdateRosterMember};
use serde::Deserialize;

use super::{roster, LoginRequest};
use crate::error::{ApiError, ApiResult};
use crate::response::ApiResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub(crate) struct ListQuery {
    teacher_name: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_teachers))
        .route("/add", post(add_teacher))
        .route("/login", post(login))
        .route("/edit/:id", put(edit_teacher))
        .route("/delete/:id", delete(delete_teacher))
        .route("/class_name/:class_name", get(teacher_by_classroom))
        .route("/:id", get(get_teacher))
}

pub(crate) async fn list_teachers(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<RosterMember>>>> {
    roster::list(&state.teachers, query.teacher_name).await
}

async fn get_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<RosterMember>>> {
    roster::get_by_id(&state.teachers, &id).await
}

async fn add_teacher(
    State(state): State<AppState>,
    Json(request): Json<NewRosterMember>,
) -> ApiResult<Json<ApiResponse<RosterMember>>> {
    roster::add(&state.teachers, request).await
}

async fn edit_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateRosterMember>,
) -> ApiResult<Json<ApiResponse<RosterMember>>> {
    roster::edit(&state.teachers, &id, patch).await
}

async fn delete_teacher(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<RosterMember>>> {
    roster::delete(&state.teachers, &id).await
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Response> {
    roster::login(&state.teachers, &request.email, &request.password).await
}

/// A classroom has at most one assigned teacher, so this answers a single
/// record or null.
async fn teacher_by_classroom(
    State(state): State<AppState>,
    Path(class_name): Path<String>,
) -> ApiResult<Json<ApiResponse<Option<RosterMember>>>> {
    let teacher = state
        .teachers
        .directory
        .find_by_classroom(&class_name)
        .await
        .map_err(|e| ApiError::new(state.teachers.kind, e))?
        .into_iter()
        .next();
    Ok(ApiResponse::ok(teacher))
}
