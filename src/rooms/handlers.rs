/**
 * Room HTTP Handlers
 *
 * - `POST /rooms` - create a room (creator auto-joins)
 * - `POST /rooms/{id}/join` - join a room
 * - `GET /rooms` - rooms the user belongs to
 * - `POST /rooms/{id}/message` - post to a room (members only)
 * - `GET /rooms/{id}/messages` - read a room (members only)
 */

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::rooms::db;
use crate::rooms::types::{CreateRoomRequest, PostRoomMessageRequest, Room, RoomMessage};

/// Create a room.
pub async fn create_room(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
    Json(request): Json<CreateRoomRequest>,
) -> Result<(StatusCode, Json<Room>), ApiError> {
    let name = request.name.trim();
    if name.is_empty() {
        return Err(ApiError::InvalidRequest("room name is required".into()));
    }

    let room = db::create_room(&pool, name, user_id).await?;

    tracing::info!("Room {} created by {}", room.id, user_id);

    Ok((StatusCode::CREATED, Json(room)))
}

/// Join a room. Joining twice is a no-op.
pub async fn join_room(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
    Path(room_id): Path<Uuid>,
) -> Result<Json<Room>, ApiError> {
    let room = db::get_room_by_id(&pool, room_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("room not found".into()))?;

    db::add_member(&pool, room_id, user_id).await?;

    Ok(Json(room))
}

/// List the rooms the authenticated user belongs to.
pub async fn list_rooms(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<Room>>, ApiError> {
    let rooms = db::list_rooms_for_user(&pool, user_id).await?;

    Ok(Json(rooms))
}

/// Post a message to a room. Members only.
pub async fn post_room_message(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
    Path(room_id): Path<Uuid>,
    Json(request): Json<PostRoomMessageRequest>,
) -> Result<Json<RoomMessage>, ApiError> {
    if request.content.is_empty() {
        return Err(ApiError::InvalidRequest("message content is empty".into()));
    }

    if !db::is_member(&pool, room_id, user_id).await? {
        return Err(ApiError::Forbidden("not a member of this room".into()));
    }

    let message = db::create_room_message(&pool, room_id, user_id, &request.content).await?;

    Ok(Json(message))
}

/// Read a room's messages, oldest first. Members only.
pub async fn list_room_messages(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
    Path(room_id): Path<Uuid>,
) -> Result<Json<Vec<RoomMessage>>, ApiError> {
    if !db::is_member(&pool, room_id, user_id).await? {
        return Err(ApiError::Forbidden("not a member of this room".into()));
    }

    let messages = db::list_room_messages(&pool, room_id).await?;

    Ok(Json(messages))
}
