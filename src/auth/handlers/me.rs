/**
 * Current User Handler
 *
 * Implements GET /me: returns the profile of the authenticated identity.
 */

use axum::extract::State;
use axum::Json;
use sqlx::SqlitePool;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_id;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Get the current user's profile.
///
/// The token is stateless, so a valid token for a since-deleted identity is
/// possible in principle; that case surfaces as `404 not_found`.
pub async fn get_me(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = get_user_by_id(&pool, user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("user not found".into()))?;

    Ok(Json(UserResponse::from(user)))
}
