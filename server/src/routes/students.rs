//! Student REST endpoints.

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
    student_name: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_students))
        .route("/add", post(add_student))
        .route("/login", post(login))
        .route("/edit/:id", put(edit_student))
        .route("/delete/:id", delete(delete_student))
        .route("/class_name/:class_name", get(students_by_classroom))
        .route("/:id", get(get_student))
}

pub(crate) async fn list_students(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ApiResult<Json<ApiResponse<Vec<RosterMember>>>> {
    roster::list(&state.students, query.student_name).await
}

async fn get_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<RosterMember>>> {
    roster::get_by_id(&state.students, &id).await
}

async fn add_student(
    State(state): State<AppState>,
    Json(request): Json<NewRosterMember>,
) -> ApiResult<Json<ApiResponse<RosterMember>>> {
    roster::add(&state.students, request).await
}

async fn edit_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(patch): Json<UpdateRosterMember>,
) -> ApiResult<Json<ApiResponse<RosterMember>>> {
    roster::edit(&state.students, &id, patch).await
}

async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<RosterMember>>> {
    roster::delete(&state.students, &id).await
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> ApiResult<Response> {
    roster::login(&state.students, &request.email, &request.password).await
}

/// Every student assigned to the given classroom label.
async fn students_by_classroom(
    State(state): State<AppState>,
    Path(class_name): Path<String>,
) -> ApiResult<Json<ApiResponse<Vec<RosterMember>>>> {
    let students = state
        .students
        .directory
        .find_by_classroom(&class_name)
        .await
        .map_err(|e| ApiError::new(state.students.kind, e))?;
    Ok(ApiResponse::ok(students))
}
