//! Router assembly and the request types shared across route modules.

use axum::{http::Method, routing::get, Json, Router};
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::state::AppState;

pub mod admin;
mod roster;
pub mod students;
pub mod teachers;

/// Login payload, identical for all three kinds.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Build the full application router.
pub fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    let trace = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route("/health", get(health))
        .nest("/admin", admin::routes())
        .nest("/teachers", teachers::routes())
        .nest("/students", students::routes())
        // `nest` maps the inner `/` route to the bare prefix only; the
        // trailing-slash form of each list route must be registered at the
        // top level.
        .route("/admin/", get(admin::list_admins))
        .route("/teachers/", get(teachers::list_teachers))
        .route("/students/", get(students::list_students))
        .with_state(state)
        .layer(cors)
        .layer(trace)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
