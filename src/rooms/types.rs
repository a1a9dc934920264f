/**
 * Room Types
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A chat room.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Room {
    pub id: Uuid,
    pub name: String,
    pub created_by: Uuid,
    pub created_at: DateTime<Utc>,
}

/// A message posted in a room.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct RoomMessage {
    pub id: Uuid,
    pub room_id: Uuid,
    pub sender_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Body for POST /rooms
#[derive(Debug, Deserialize, Serialize)]
pub struct CreateRoomRequest {
    pub name: String,
}

/// Body for POST /rooms/{id}/message
#[derive(Debug, Deserialize, Serialize)]
pub struct PostRoomMessageRequest {
    pub content: String,
}
