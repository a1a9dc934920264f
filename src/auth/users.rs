/**
 * User Model and Database Operations
 *
 * This module handles user records and their database operations.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;
use uuid::Uuid;

/// User struct representing a user in the database
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID (UUID)
    pub id: Uuid,
    /// Display name shown to other users
    pub display_name: String,
    /// User email address (unique)
    pub email: String,
    /// Hashed password (bcrypt)
    pub password_hash: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    /// Affiliation, e.g. the college the user attends
    pub college: Option<String>,
    pub bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Optional profile fields accepted by the profile update; absent fields
/// keep their current value (last write wins for concurrent updates).
#[derive(Debug, Default, Deserialize)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub college: Option<String>,
    pub bio: Option<String>,
}

/// Filters for the public user search; provided filters are conjoined.
#[derive(Debug, Default, Deserialize)]
pub struct UserFilter {
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub college: Option<String>,
}

const USER_COLUMNS: &str = "id, display_name, email, password_hash, city, state, country, college, bio, created_at, updated_at";

/// Create a new user
///
/// Relies on the unique constraint on `email`; a duplicate registration
/// surfaces as a unique violation rather than a check-then-insert.
pub async fn create_user(
    pool: &SqlitePool,
    display_name: &str,
    email: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = Uuid::new_v4();
    let now = Utc::now();

    sqlx::query(
        r#"
        INSERT INTO users (id, display_name, email, password_hash, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(id)
    .bind(display_name)
    .bind(email)
    .bind(password_hash)
    .bind(now)
    .bind(now)
    .execute(pool)
    .await?;

    Ok(User {
        id,
        display_name: display_name.to_string(),
        email: email.to_string(),
        password_hash: password_hash.to_string(),
        city: None,
        state: None,
        country: None,
        college: None,
        bio: None,
        created_at: now,
        updated_at: now,
    })
}

/// Get user by email
pub async fn get_user_by_email(
    pool: &SqlitePool,
    email: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!(
        "SELECT {USER_COLUMNS} FROM users WHERE email = ?"
    ))
    .bind(email)
    .fetch_optional(pool)
    .await
}

/// Get user by ID
pub async fn get_user_by_id(pool: &SqlitePool, id: Uuid) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(&format!("SELECT {USER_COLUMNS} FROM users WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Apply a partial profile update and return the updated record.
///
/// Absent fields are preserved via COALESCE, so the whole update is one
/// statement and concurrent updates resolve as last-write-wins.
pub async fn update_profile(
    pool: &SqlitePool,
    user_id: Uuid,
    update: &ProfileUpdate,
) -> Result<Option<User>, sqlx::Error> {
    let now = Utc::now();

    let result = sqlx::query(
        r#"
        UPDATE users
        SET display_name = COALESCE(?, display_name),
            city         = COALESCE(?, city),
            state        = COALESCE(?, state),
            country      = COALESCE(?, country),
            college      = COALESCE(?, college),
            bio          = COALESCE(?, bio),
            updated_at   = ?
        WHERE id = ?
        "#,
    )
    .bind(&update.display_name)
    .bind(&update.city)
    .bind(&update.state)
    .bind(&update.country)
    .bind(&update.college)
    .bind(&update.bio)
    .bind(now)
    .bind(user_id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Ok(None);
    }

    get_user_by_id(pool, user_id).await
}

/// Search users by optional location and affiliation filters.
///
/// Each absent filter is skipped via the `?N IS NULL OR column = ?N`
/// pattern, so one query covers every filter combination. Empty-string
/// filters (a blank query parameter) count as absent. Unpaginated.
pub async fn search_users(
    pool: &SqlitePool,
    filter: &UserFilter,
) -> Result<Vec<User>, sqlx::Error> {
    fn present(value: &Option<String>) -> Option<&str> {
        value.as_deref().filter(|s| !s.is_empty())
    }

    sqlx::query_as::<_, User>(&format!(
        r#"
        SELECT {USER_COLUMNS} FROM users
        WHERE (?1 IS NULL OR city = ?1)
          AND (?2 IS NULL OR state = ?2)
          AND (?3 IS NULL OR country = ?3)
          AND (?4 IS NULL OR college = ?4)
        ORDER BY display_name ASC
        "#
    ))
    .bind(present(&filter.city))
    .bind(present(&filter.state))
    .bind(present(&filter.country))
    .bind(present(&filter.college))
    .fetch_all(pool)
    .await
}
