/**
 * Registration Handler
 *
 * Implements user registration for POST /register.
 *
 * # Registration Process
 *
 * 1. Validate email format and password length
 * 2. Hash the password with bcrypt
 * 3. Insert the user (the unique email column rejects duplicates atomically)
 * 4. Issue a JWT token
 *
 * # Security
 *
 * - Passwords are hashed with bcrypt at DEFAULT_COST
 * - Passwords are never logged or returned in responses
 */

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use bcrypt::{hash, DEFAULT_COST};

use crate::auth::handlers::types::{AuthResponse, RegisterRequest, UserResponse};
use crate::auth::sessions::create_token;
use crate::auth::users::create_user;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Register handler
///
/// # Errors
///
/// * `400 invalid_request` - invalid email format or password under 8 chars
/// * `400 conflict` - email already registered
/// * `500 internal_error` - hashing, insert, or token generation failure
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), ApiError> {
    tracing::info!("Registration request for {}", request.email);

    if request.display_name.trim().is_empty() {
        return Err(ApiError::InvalidRequest("display name is required".into()));
    }

    if !request.email.contains('@') {
        return Err(ApiError::InvalidRequest("invalid email format".into()));
    }

    if request.password.len() < 8 {
        return Err(ApiError::InvalidRequest(
            "password must be at least 8 characters".into(),
        ));
    }

    let password_hash = hash(&request.password, DEFAULT_COST)
        .map_err(|e| ApiError::Internal(format!("password hashing failed: {e}")))?;

    let user = create_user(&state.db, request.display_name.trim(), &request.email, &password_hash)
        .await
        .map_err(|e| ApiError::conflict_on_unique(e, "email already registered"))?;

    let token = create_token(user.id, &state.jwt_secret)
        .map_err(|e| ApiError::Internal(format!("token generation failed: {e}")))?;

    tracing::info!("User registered: {} ({})", user.display_name, user.email);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: UserResponse::from(user),
        }),
    ))
}
