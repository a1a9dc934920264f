/**
 * Profile Handlers
 *
 * Implements PUT /profile (partial update of the authenticated user's
 * profile) and GET /users (public search by location and affiliation).
 */

use axum::extract::{Query, State};
use axum::Json;
use sqlx::SqlitePool;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::{self, ProfileUpdate, UserFilter};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Update the authenticated user's profile.
///
/// Absent fields keep their current value; concurrent updates resolve as
/// last-write-wins.
pub async fn update_profile(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = users::update_profile(&pool, user_id, &update)
        .await?
        .ok_or_else(|| ApiError::NotFound("user not found".into()))?;

    tracing::info!("Profile updated for {}", user.email);

    Ok(Json(UserResponse::from(user)))
}

/// Search users by optional city/state/country/college filters.
///
/// Public endpoint; provided filters are conjoined, and the result set is
/// unpaginated.
pub async fn search_users(
    State(pool): State<SqlitePool>,
    Query(filter): Query<UserFilter>,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let users = users::search_users(&pool, &filter).await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}
