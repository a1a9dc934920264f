//! Database operations for rooms, membership, and room messages.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::rooms::types::{Room, RoomMessage};

/// Create a room and enroll the creator as its first member.
pub async fn create_room(
    pool: &SqlitePool,
    name: &str,
    created_by: Uuid,
) -> Result<Room, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    let mut tx = pool.begin().await?;

    sqlx::query(
        r#"
        INSERT INTO rooms (id, name, created_by, created_at)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(name)
    .bind(created_by)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    sqlx::query(
        r#"
        INSERT INTO room_members (room_id, user_id, joined_at)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(created_by)
    .bind(now)
    .execute(&mut *tx)
    .await?;

    tx.commit().await?;

    Ok(Room {
        id,
        name: name.to_string(),
        created_by,
        created_at: now,
    })
}

/// Get a room by ID
pub async fn get_room_by_id(pool: &SqlitePool, room_id: Uuid) -> Result<Option<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        "SELECT id, name, created_by, created_at FROM rooms WHERE id = ?",
    )
    .bind(room_id)
    .fetch_optional(pool)
    .await
}

/// Add a member to a room; joining twice is a no-op.
pub async fn add_member(pool: &SqlitePool, room_id: Uuid, user_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO room_members (room_id, user_id, joined_at)
        VALUES (?, ?, ?)
        ON CONFLICT (room_id, user_id) DO NOTHING
        "#,
    )
    .bind(room_id)
    .bind(user_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

/// True if the user belongs to the room.
pub async fn is_member(pool: &SqlitePool, room_id: Uuid, user_id: Uuid) -> Result<bool, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(
        "SELECT EXISTS (SELECT 1 FROM room_members WHERE room_id = ? AND user_id = ?)",
    )
    .bind(room_id)
    .bind(user_id)
    .fetch_one(pool)
    .await?;

    Ok(row.0 != 0)
}

/// Rooms the user belongs to, newest first.
pub async fn list_rooms_for_user(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<Room>, sqlx::Error> {
    sqlx::query_as::<_, Room>(
        r#"
        SELECT r.id, r.name, r.created_by, r.created_at
        FROM rooms r
        JOIN room_members m ON m.room_id = r.id
        WHERE m.user_id = ?
        ORDER BY r.created_at DESC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}

/// Persist a room message.
pub async fn create_room_message(
    pool: &SqlitePool,
    room_id: Uuid,
    sender_id: Uuid,
    content: &str,
) -> Result<RoomMessage, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO room_messages (id, room_id, sender_id, content, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(room_id)
    .bind(sender_id)
    .bind(content)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(RoomMessage {
        id,
        room_id,
        sender_id,
        content: content.to_string(),
        created_at: now,
    })
}

/// Messages in a room, creation order ascending. Unpaginated.
pub async fn list_room_messages(
    pool: &SqlitePool,
    room_id: Uuid,
) -> Result<Vec<RoomMessage>, sqlx::Error> {
    sqlx::query_as::<_, RoomMessage>(
        r#"
        SELECT id, room_id, sender_id, content, created_at
        FROM room_messages
        WHERE room_id = ?
        ORDER BY created_at ASC
        "#,
    )
    .bind(room_id)
    .fetch_all(pool)
    .await
}
