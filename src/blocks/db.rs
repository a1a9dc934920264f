//! Database operations for block relations.

use chrono::Utc;
use sqlx::SqlitePool;
use uuid::Uuid;

/// Insert a block relation. A duplicate block is a no-op thanks to the
/// ordered-pair unique constraint and `ON CONFLICT DO NOTHING`.
pub async fn create_block(
    pool: &SqlitePool,
    blocker_id: Uuid,
    blocked_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO block_relations (blocker_id, blocked_id, created_at)
        VALUES (?, ?, ?)
        ON CONFLICT (blocker_id, blocked_id) DO NOTHING
        "#,
    )
    .bind(blocker_id)
    .bind(blocked_id)
    .bind(Utc::now())
    .execute(pool)
    .await?;

    Ok(())
}

/// True if a block exists in either direction between the two identities.
pub async fn is_blocked(pool: &SqlitePool, a: Uuid, b: Uuid) -> Result<bool, sqlx::Error> {
    let row: (i64,) = sqlx::query_as(
        r#"
        SELECT EXISTS (
            SELECT 1 FROM block_relations
            WHERE (blocker_id = ?1 AND blocked_id = ?2)
               OR (blocker_id = ?2 AND blocked_id = ?1)
        )
        "#,
    )
    .bind(a)
    .bind(b)
    .fetch_one(pool)
    .await?;

    Ok(row.0 != 0)
}
