/**
 * Messaging HTTP Handlers
 *
 * - `POST /message/{user_id}` - send a direct message
 * - `GET /chat/{user_id}` - conversation with that user, oldest first
 * - `GET /chats` - distinct conversation peers
 *
 * # Block gate
 *
 * Message creation is refused when a block exists in *either* direction
 * between sender and receiver: blocking someone silences both sides of the
 * pair. The gate re-reads block state on every send; there is no cached
 * block set.
 */

use axum::extract::{Path, State};
use axum::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::handlers::types::UserResponse;
use crate::blocks;
use crate::error::ApiError;
use crate::messaging::db;
use crate::messaging::types::{Message, SendMessageRequest};
use crate::middleware::auth::AuthUser;
use crate::server::state::AppState;

/// Send a direct message.
///
/// # Errors
///
/// * `400 invalid_request` - empty content or messaging yourself
/// * `403 forbidden` - a block exists in either direction
pub async fn send_message(
    State(state): State<AppState>,
    AuthUser(sender_id): AuthUser,
    Path(receiver_id): Path<Uuid>,
    Json(request): Json<SendMessageRequest>,
) -> Result<Json<Message>, ApiError> {
    if sender_id == receiver_id {
        return Err(ApiError::InvalidRequest(
            "cannot message yourself".into(),
        ));
    }

    if request.content.is_empty() {
        return Err(ApiError::InvalidRequest("message content is empty".into()));
    }

    if blocks::db::is_blocked(&state.db, sender_id, receiver_id).await? {
        return Err(ApiError::Forbidden(
            "messaging is blocked between these users".into(),
        ));
    }

    let message = db::create_message(&state.db, sender_id, receiver_id, &request.content).await?;

    // Fan out to any live subscribers of this conversation.
    state.conversations.publish(message.clone());

    tracing::debug!("Message {} -> {}", sender_id, receiver_id);

    Ok(Json(message))
}

/// List the conversation with another user, creation order ascending.
pub async fn list_conversation(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
    Path(peer_id): Path<Uuid>,
) -> Result<Json<Vec<Message>>, ApiError> {
    let messages = db::list_conversation(&pool, user_id, peer_id).await?;

    Ok(Json(messages))
}

/// List the distinct identities the user has exchanged messages with.
pub async fn list_conversation_peers(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let peers = db::list_conversation_peers(&pool, user_id).await?;

    Ok(Json(peers.into_iter().map(UserResponse::from).collect()))
}
