//! Profile update and user search integration tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use common::{register_user, spawn_server};

#[tokio::test]
async fn test_profile_partial_update_preserves_unset_fields() {
    let server = spawn_server().await;
    let (token, _) = register_user(&server, "alice", "a@x.com", "password1").await;

    let response = server
        .put("/profile")
        .authorization_bearer(&token)
        .json(&json!({ "city": "Austin", "college": "UT" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    // A later update of one field leaves the others untouched.
    let response = server
        .put("/profile")
        .authorization_bearer(&token)
        .json(&json!({ "bio": "studying algorithms" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["city"].as_str(), Some("Austin"));
    assert_eq!(body["college"].as_str(), Some("UT"));
    assert_eq!(body["bio"].as_str(), Some("studying algorithms"));
}

#[tokio::test]
async fn test_profile_requires_auth() {
    let server = spawn_server().await;

    let response = server.put("/profile").json(&json!({ "city": "Austin" })).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_search_filters_are_conjoined() {
    let server = spawn_server().await;

    let (alice_token, _) = register_user(&server, "alice", "a@x.com", "password1").await;
    let (bob_token, _) = register_user(&server, "bob", "b@x.com", "password2").await;

    server
        .put("/profile")
        .authorization_bearer(&alice_token)
        .json(&json!({ "city": "Austin", "college": "UT" }))
        .await;
    server
        .put("/profile")
        .authorization_bearer(&bob_token)
        .json(&json!({ "city": "Austin", "college": "Rice" }))
        .await;

    let both: Value = server
        .get("/users")
        .add_query_param("city", "Austin")
        .await
        .json();
    assert_eq!(both.as_array().unwrap().len(), 2);

    let only_alice: Value = server
        .get("/users")
        .add_query_param("city", "Austin")
        .add_query_param("college", "UT")
        .await
        .json();
    assert_eq!(only_alice.as_array().unwrap().len(), 1);
    assert_eq!(only_alice[0]["display_name"].as_str(), Some("alice"));
}

#[tokio::test]
async fn test_search_with_blank_params_returns_everyone() {
    let server = spawn_server().await;
    register_user(&server, "alice", "a@x.com", "password1").await;
    register_user(&server, "bob", "b@x.com", "password2").await;

    // Blank query parameters count as absent filters.
    let body: Value = server
        .get("/users")
        .add_query_param("city", "")
        .add_query_param("country", "")
        .await
        .json();

    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_search_never_exposes_credential_hash() {
    let server = spawn_server().await;
    register_user(&server, "alice", "a@x.com", "password1").await;

    let body: Value = server.get("/users").await.json();

    let user = &body.as_array().unwrap()[0];
    assert!(user.get("password_hash").is_none());
    assert!(user.get("id").is_some());
}
