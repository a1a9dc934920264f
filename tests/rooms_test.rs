//! Room membership and room messaging integration tests.

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use uuid::Uuid;

use common::{alice_and_bob, assert_error_code, spawn_server};

async fn create_room(server: &axum_test::TestServer, token: &str, name: &str) -> Uuid {
    let response = server
        .post("/rooms")
        .authorization_bearer(token)
        .json(&json!({ "name": name }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: Value = response.json();
    Uuid::parse_str(body["id"].as_str().unwrap()).unwrap()
}

#[tokio::test]
async fn test_creator_is_member_and_room_is_listed() {
    let server = spawn_server().await;
    let ((alice_token, _), _) = alice_and_bob(&server).await;

    let room_id = create_room(&server, &alice_token, "algorithms study group").await;

    let rooms: Value = server
        .get("/rooms")
        .authorization_bearer(&alice_token)
        .await
        .json();

    assert_eq!(rooms.as_array().unwrap().len(), 1);
    assert_eq!(rooms[0]["id"].as_str(), Some(room_id.to_string().as_str()));
}

#[tokio::test]
async fn test_non_member_cannot_post_or_read() {
    let server = spawn_server().await;
    let ((alice_token, _), (bob_token, _)) = alice_and_bob(&server).await;

    let room_id = create_room(&server, &alice_token, "private notes").await;

    let response = server
        .post(&format!("/rooms/{room_id}/message"))
        .authorization_bearer(&bob_token)
        .json(&json!({ "content": "let me in" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    assert_error_code(&response.json(), "forbidden");

    let response = server
        .get(&format!("/rooms/{room_id}/messages"))
        .authorization_bearer(&bob_token)
        .await;
    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_join_then_exchange_messages() {
    let server = spawn_server().await;
    let ((alice_token, _), (bob_token, _)) = alice_and_bob(&server).await;

    let room_id = create_room(&server, &alice_token, "exam prep").await;

    let response = server
        .post(&format!("/rooms/{room_id}/join"))
        .authorization_bearer(&bob_token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    for (token, content) in [(&alice_token, "anyone done problem 3?"), (&bob_token, "yes, use induction")] {
        let response = server
            .post(&format!("/rooms/{room_id}/message"))
            .authorization_bearer(token)
            .json(&json!({ "content": content }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let messages: Value = server
        .get(&format!("/rooms/{room_id}/messages"))
        .authorization_bearer(&bob_token)
        .await
        .json();

    let messages = messages.as_array().unwrap();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0]["content"].as_str(), Some("anyone done problem 3?"));
    assert_eq!(messages[1]["content"].as_str(), Some("yes, use induction"));
}

#[tokio::test]
async fn test_duplicate_join_is_noop() {
    let server = spawn_server().await;
    let ((alice_token, _), (bob_token, _)) = alice_and_bob(&server).await;

    let room_id = create_room(&server, &alice_token, "study hall").await;

    for _ in 0..2 {
        let response = server
            .post(&format!("/rooms/{room_id}/join"))
            .authorization_bearer(&bob_token)
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let rooms: Value = server
        .get("/rooms")
        .authorization_bearer(&bob_token)
        .await
        .json();
    assert_eq!(rooms.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_join_unknown_room() {
    let server = spawn_server().await;
    let ((token, _), _) = alice_and_bob(&server).await;

    let response = server
        .post(&format!("/rooms/{}/join", Uuid::new_v4()))
        .authorization_bearer(&token)
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_empty_room_name_rejected() {
    let server = spawn_server().await;
    let ((token, _), _) = alice_and_bob(&server).await;

    let response = server
        .post("/rooms")
        .authorization_bearer(&token)
        .json(&json!({ "name": "   " }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
