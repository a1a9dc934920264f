//! Database operations for direct messages.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::users::User;
use crate::messaging::types::Message;

/// Persist a message. No receiver-existence check: messages are stored
/// unconditionally once past the block gate.
pub async fn create_message(
    pool: &SqlitePool,
    sender_id: Uuid,
    receiver_id: Uuid,
    content: &str,
) -> Result<Message, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO messages (id, sender_id, receiver_id, content, created_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(sender_id)
    .bind(receiver_id)
    .bind(content)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(Message {
        id,
        sender_id,
        receiver_id,
        content: content.to_string(),
        created_at: now,
    })
}

/// All messages between the pair, creation order ascending. Unpaginated.
pub async fn list_conversation(
    pool: &SqlitePool,
    a: Uuid,
    b: Uuid,
) -> Result<Vec<Message>, sqlx::Error> {
    sqlx::query_as::<_, Message>(
        r#"
        SELECT id, sender_id, receiver_id, content, created_at
        FROM messages
        WHERE (sender_id = ?1 AND receiver_id = ?2)
           OR (sender_id = ?2 AND receiver_id = ?1)
        ORDER BY created_at ASC
        "#,
    )
    .bind(a)
    .bind(b)
    .fetch_all(pool)
    .await
}

/// Distinct identities the user has exchanged messages with.
pub async fn list_conversation_peers(
    pool: &SqlitePool,
    user_id: Uuid,
) -> Result<Vec<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, display_name, email, password_hash, city, state, country,
               college, bio, created_at, updated_at
        FROM users
        WHERE id IN (
            SELECT receiver_id FROM messages WHERE sender_id = ?1
            UNION
            SELECT sender_id FROM messages WHERE receiver_id = ?1
        )
        ORDER BY display_name ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await
}
