/**
 * Block HTTP Handlers
 *
 * Implements POST /block/{user_id}: records a block relation from the
 * authenticated user towards the target. Blocking an already-blocked user
 * is a no-op; the target does not need to exist as messaging never
 * validates receivers either.
 */

use axum::extract::{Path, State};
use axum::Json;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::blocks::db;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Block another user.
///
/// # Errors
///
/// * `400 invalid_request` - blocking yourself
pub async fn block_user(
    State(pool): State<SqlitePool>,
    AuthUser(blocker_id): AuthUser,
    Path(blocked_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if blocker_id == blocked_id {
        return Err(ApiError::InvalidRequest("cannot block yourself".into()));
    }

    db::create_block(&pool, blocker_id, blocked_id).await?;

    tracing::info!("User {} blocked {}", blocker_id, blocked_id);

    Ok(Json(serde_json::json!({ "blocked": true })))
}
