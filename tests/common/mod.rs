//! Shared test fixtures and helpers.
//!
//! Each test gets its own in-memory SQLite database with migrations applied,
//! wrapped in an `axum_test::TestServer` over the real router, so tests are
//! fully isolated and exercise the same code paths as production requests.
#![allow(dead_code)]

use axum::http::StatusCode;
use axum_test::TestServer;
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use uuid::Uuid;

use studylink::server::config::ServerConfig;
use studylink::server::init::create_app;

pub const TEST_JWT_SECRET: &str = "integration-test-secret";

/// Spin up a test server backed by a fresh in-memory database.
///
/// `max_connections(1)` keeps the whole pool on the single connection that
/// owns the in-memory database.
pub async fn spawn_server() -> TestServer {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");

    sqlx::migrate!()
        .run(&pool)
        .await
        .expect("failed to run migrations");

    let config = ServerConfig {
        database_url: "sqlite::memory:".to_string(),
        jwt_secret: TEST_JWT_SECRET.to_string(),
        port: 0,
    };

    TestServer::new(create_app(pool, &config)).expect("failed to build test server")
}

/// Register a user and return their token and id.
pub async fn register_user(
    server: &TestServer,
    display_name: &str,
    email: &str,
    password: &str,
) -> (String, Uuid) {
    let response = server
        .post("/register")
        .json(&json!({
            "display_name": display_name,
            "email": email,
            "password": password,
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();

    let token = body["token"].as_str().expect("token missing").to_string();
    let id = Uuid::parse_str(body["user"]["id"].as_str().expect("user id missing"))
        .expect("user id is not a uuid");

    (token, id)
}

/// The two-user fixture most scenarios start from.
pub async fn alice_and_bob(server: &TestServer) -> ((String, Uuid), (String, Uuid)) {
    let alice = register_user(server, "alice", "a@x.com", "password1").await;
    let bob = register_user(server, "bob", "b@x.com", "password2").await;
    (alice, bob)
}

/// Send a connection request and return the created request's id.
pub async fn send_connect(server: &TestServer, token: &str, receiver: Uuid) -> Uuid {
    let response = server
        .post(&format!("/connect/{receiver}"))
        .authorization_bearer(token)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    Uuid::parse_str(body["id"].as_str().expect("request id missing")).expect("not a uuid")
}

/// Assert an error body carries the expected stable code.
pub fn assert_error_code(body: &Value, code: &str) {
    assert_eq!(body["code"].as_str(), Some(code), "body: {body}");
}
