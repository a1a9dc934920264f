//! Database operations for connection requests.
//!
//! The unordered-pair unique index on `connection_requests` is the atomicity
//! guard: inserts race at the index, not at a read-then-write check, and
//! accept/reject are single conditional statements keyed on the receiver.

use chrono::Utc;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

use crate::auth::users::User;
use crate::connections::types::{ConnectionRequest, ConnectionStatus};

fn request_from_row(row: &sqlx::sqlite::SqliteRow) -> Result<ConnectionRequest, sqlx::Error> {
    let raw_status: String = row.get("status");
    let status =
        ConnectionStatus::from_str(&raw_status).ok_or_else(|| sqlx::Error::ColumnDecode {
            index: "status".into(),
            source: format!("unknown connection status: {raw_status}").into(),
        })?;

    Ok(ConnectionRequest {
        id: row.get("id"),
        sender_id: row.get("sender_id"),
        receiver_id: row.get("receiver_id"),
        status,
        created_at: row.get("created_at"),
    })
}

/// Insert a new pending request.
///
/// A unique violation means an active request already exists for the pair
/// (in either direction); the caller maps that to a conflict.
pub async fn create_request(
    pool: &SqlitePool,
    sender_id: Uuid,
    receiver_id: Uuid,
) -> Result<ConnectionRequest, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO connection_requests (id, sender_id, receiver_id, status, created_at)
        VALUES (?, ?, ?, 'pending', ?)
        "#,
    )
    .bind(id)
    .bind(sender_id)
    .bind(receiver_id)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(ConnectionRequest {
        id,
        sender_id,
        receiver_id,
        status: ConnectionStatus::Pending,
        created_at: now,
    })
}

/// Get a request by ID
pub async fn get_request_by_id(
    pool: &SqlitePool,
    request_id: Uuid,
) -> Result<Option<ConnectionRequest>, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT id, sender_id, receiver_id, status, created_at
        FROM connection_requests
        WHERE id = ?
        "#,
    )
    .bind(request_id)
    .fetch_optional(pool)
    .await?;

    row.as_ref().map(request_from_row).transpose()
}

/// Transition a pending request to accepted, iff the acting user is the
/// receiver. Returns the number of rows updated (0 or 1); zero rows means
/// the request is missing, already accepted, or not addressed to this user.
pub async fn accept_request(
    pool: &SqlitePool,
    request_id: Uuid,
    receiver_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE connection_requests
        SET status = 'accepted'
        WHERE id = ? AND receiver_id = ? AND status = 'pending'
        "#,
    )
    .bind(request_id)
    .bind(receiver_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// Delete a pending request, iff the acting user is the receiver.
/// Rejection is modeled as deletion, which frees the pair to exchange a
/// fresh request afterwards. Returns the number of rows deleted (0 or 1).
pub async fn delete_pending_request(
    pool: &SqlitePool,
    request_id: Uuid,
    receiver_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM connection_requests
        WHERE id = ? AND receiver_id = ? AND status = 'pending'
        "#,
    )
    .bind(request_id)
    .bind(receiver_id)
    .execute(pool)
    .await?;

    Ok(result.rows_affected())
}

/// List requests where the user is sender or receiver, optionally filtered
/// by status, newest first. Unpaginated.
pub async fn list_requests_for_user(
    pool: &SqlitePool,
    user_id: Uuid,
    status: Option<ConnectionStatus>,
) -> Result<Vec<ConnectionRequest>, sqlx::Error> {
    let rows = sqlx::query(
        r#"
        SELECT id, sender_id, receiver_id, status, created_at
        FROM connection_requests
        WHERE (sender_id = ?1 OR receiver_id = ?1)
          AND (?2 IS NULL OR status = ?2)
        ORDER BY created_at DESC
        "#,
    )
    .bind(user_id)
    .bind(status.map(|s| s.as_str()))
    .fetch_all(pool)
    .await?;

    rows.iter().map(request_from_row).collect()
}

/// List identities linked to the user through accepted requests, in either
/// direction. Friendship is symmetric once accepted.
pub async fn list_friends(pool: &SqlitePool, user_id: Uuid) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT u.id, u.display_name, u.email, u.password_hash, u.city, u.state,
               u.country, u.college, u.bio, u.created_at, u.updated_at
        FROM users u
        JOIN connection_requests cr
          ON (u.id = cr.sender_id AND cr.receiver_id = ?1)
          OR (u.id = cr.receiver_id AND cr.sender_id = ?1)
        WHERE cr.status = 'accepted'
        ORDER BY u.display_name ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
