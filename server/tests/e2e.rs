//! End-to-end tests driving the real router over a temporary database.

use std::time::Duration;

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Method, Request, StatusCode},
    Router,
};
use chalkboard_backend::{build_router, AppState};
use chalkboard_config::DatabaseConfig;
use chalkboard_database::initialize_database;
use chalkboard_identity::TokenIssuer;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

const TEST_SECRET: &str = "e2e-test-secret-long-enough-for-hs256";

struct TestApp {
    router: Router,
    tokens: TokenIssuer,
    _db_dir: TempDir,
}

struct TestResponse {
    status: StatusCode,
    json: Value,
    auth_header: Option<String>,
}

impl TestApp {
    async fn new() -> Self {
        let db_dir = TempDir::new().expect("create temp dir");
        let db_path = db_dir.path().join("chalkboard-test.db");

        let config = DatabaseConfig {
            url: format!("sqlite://{}", db_path.to_string_lossy()),
            max_connections: 5,
        };

        let pool = initialize_database(&config)
            .await
            .expect("initialize database");

        let tokens = TokenIssuer::new(TEST_SECRET, Duration::from_secs(3600));
        let state = AppState::new(pool, tokens.clone());

        Self {
            router: build_router(state),
            tokens,
            _db_dir: db_dir,
        }
    }

    async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
        let app = self.router.clone();
        let mut builder = Request::builder().method(method).uri(uri);

        let body = if let Some(json_body) = body {
            let bytes = serde_json::to_vec(&json_body).expect("serialize request body");
            builder = builder.header(CONTENT_TYPE, "application/json");
            Body::from(bytes)
        } else {
            Body::empty()
        };

        let response = app
            .oneshot(builder.body(body).expect("build request"))
            .await
            .expect("dispatch request");

        let status = response.status();
        let auth_header = response
            .headers()
            .get("x-auth-token")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let bytes = response
            .into_body()
            .collect()
            .await
            .expect("collect response body")
            .to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            json,
            auth_header,
        }
    }

    async fn get(&self, uri: &str) -> TestResponse {
        self.request(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::POST, uri, Some(body)).await
    }

    async fn put(&self, uri: &str, body: Value) -> TestResponse {
        self.request(Method::PUT, uri, Some(body)).await
    }

    async fn delete(&self, uri: &str) -> TestResponse {
        self.request(Method::DELETE, uri, None).await
    }
}

fn ann() -> Value {
    json!({
        "name": "Ann",
        "email": "a@x.com",
        "password": "pw1",
        "phone_number": "555-0100",
        "assigned_classroom": "4b"
    })
}

#[tokio::test]
async fn health_endpoint_answers() {
    let app = TestApp::new().await;

    let response = app.get("/health").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["status"], "ok");
}

#[tokio::test]
async fn student_register_login_search_delete_scenario() {
    let app = TestApp::new().await;

    // Register: success, id assigned, no password material in the body.
    let response = app.post("/students/add", ann()).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["success"], true);
    let id = response.json["data"]["id"].as_str().expect("id").to_string();
    assert!(response.json["data"].get("password_hash").is_none());
    assert!(response.json["data"].get("password").is_none());

    // Same email again: duplicate, rejected as a client error.
    let response = app.post("/students/add", ann()).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["success"], false);
    assert!(response.json["data"].is_null());

    // Login with the right password: token in body and header, subject is
    // the student's id.
    let response = app
        .post("/students/login", json!({ "email": "a@x.com", "password": "pw1" }))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["success"], true);
    let token = response.json["token"].as_str().expect("token").to_string();
    assert_eq!(response.auth_header.as_deref(), Some(token.as_str()));
    let claims = app.tokens.verify(&token).expect("valid token");
    assert_eq!(claims.sub, id);

    // Wrong password and unknown email: identical outward failure.
    let wrong = app
        .post("/students/login", json!({ "email": "a@x.com", "password": "nope" }))
        .await;
    let unknown = app
        .post("/students/login", json!({ "email": "b@x.com", "password": "pw1" }))
        .await;
    assert_eq!(wrong.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown.status, StatusCode::BAD_REQUEST);
    assert_eq!(wrong.json["message"], unknown.json["message"]);
    assert!(wrong.auth_header.is_none());

    // Name substring filter finds Ann, case-insensitively.
    let response = app.get("/students/?student_name=an").await;
    assert_eq!(response.status, StatusCode::OK);
    let hits = response.json["data"].as_array().expect("array");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0]["name"], "Ann");

    // Delete returns the prior record; the id then misses.
    let response = app.delete(&format!("/students/delete/{id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["data"]["email"], "a@x.com");

    let response = app.get(&format!("/students/{id}")).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json["success"], false);
}

#[tokio::test]
async fn student_edit_merges_partial_fields() {
    let app = TestApp::new().await;

    let response = app.post("/students/add", ann()).await;
    let id = response.json["data"]["id"].as_str().expect("id").to_string();

    let response = app
        .put(
            &format!("/students/edit/{id}"),
            json!({ "assigned_classroom": "5a" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["data"]["assigned_classroom"], "5a");
    assert_eq!(response.json["data"]["name"], "Ann");
    assert_eq!(response.json["data"]["phone_number"], "555-0100");
    assert_eq!(response.json["data"]["id"], id.as_str());

    // Editing a missing id is a client error naming the kind.
    let response = app
        .put("/students/edit/no-such-id", json!({ "name": "X" }))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json["message"],
        "There is no student that has the corresponding ID"
    );
}

#[tokio::test]
async fn classroom_lookups_differ_between_kinds() {
    let app = TestApp::new().await;

    app.post(
        "/teachers/add",
        json!({ "name": "Mr Finch", "email": "finch@x.com", "password": "pw", "assigned_classroom": "4b" }),
    )
    .await;
    app.post("/students/add", ann()).await;
    app.post(
        "/students/add",
        json!({ "name": "Ben", "email": "ben@x.com", "password": "pw", "assigned_classroom": "4b" }),
    )
    .await;

    // Teachers: single record or null.
    let response = app.get("/teachers/class_name/4b").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["data"]["name"], "Mr Finch");

    let response = app.get("/teachers/class_name/9z").await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.json["data"].is_null());
    assert_eq!(response.json["success"], true);

    // Students: every member of the class.
    let response = app.get("/students/class_name/4b").await;
    let hits = response.json["data"].as_array().expect("array");
    assert_eq!(hits.len(), 2);
}

#[tokio::test]
async fn admin_surface_has_no_delete_route() {
    let app = TestApp::new().await;

    let response = app
        .post(
            "/admin/add",
            json!({ "email": "head@school.test", "password": "sekrit" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let id = response.json["data"]["id"].as_str().expect("id").to_string();

    let response = app
        .post(
            "/admin/login",
            json!({ "email": "head@school.test", "password": "sekrit" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.auth_header.is_some());

    let response = app.get("/admin/").await;
    assert_eq!(response.json["data"].as_array().expect("array").len(), 1);

    let response = app
        .put(
            &format!("/admin/edit/{id}"),
            json!({ "email": "root@school.test" }),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["data"]["email"], "root@school.test");

    // Hard deletes are not exposed for admins.
    let response = app.delete(&format!("/admin/delete/{id}")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn list_without_filter_returns_everyone() {
    let app = TestApp::new().await;

    app.post("/students/add", ann()).await;
    app.post(
        "/students/add",
        json!({ "name": "Ben", "email": "ben@x.com", "password": "pw" }),
    )
    .await;

    let response = app.get("/students/").await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json["data"].as_array().expect("array").len(), 2);
}
