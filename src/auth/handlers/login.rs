/**
 * Login Handler
 *
 * Implements user authentication for POST /login.
 *
 * # Authentication Process
 *
 * 1. Look up the user by email
 * 2. Verify the password with bcrypt
 * 3. Issue a JWT token (1-hour expiry)
 *
 * # Security
 *
 * - Unknown email and wrong password return the same `invalid_credentials`
 *   error to prevent user enumeration
 * - Passwords are never logged or returned in responses
 */

use axum::extract::State;
use axum::Json;
use bcrypt::verify;

use crate::auth::handlers::types::{AuthResponse, LoginRequest, UserResponse};
use crate::auth::sessions::create_token;
use crate::auth::users::get_user_by_email;
use crate::error::ApiError;
use crate::server::state::AppState;

/// Login handler
///
/// # Errors
///
/// * `400 invalid_credentials` - unknown email or wrong password
/// * `500 internal_error` - database query or token generation failure
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    tracing::info!("Login request for {}", request.email);

    let user = get_user_by_email(&state.db, &request.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let valid = verify(&request.password, &user.password_hash)
        .map_err(|e| ApiError::Internal(format!("password verification failed: {e}")))?;

    if !valid {
        tracing::warn!("Invalid password for {}", request.email);
        return Err(ApiError::InvalidCredentials);
    }

    let token = create_token(user.id, &state.jwt_secret)
        .map_err(|e| ApiError::Internal(format!("token generation failed: {e}")))?;

    tracing::info!("User logged in: {}", user.email);

    Ok(Json(AuthResponse {
        token,
        user: UserResponse::from(user),
    }))
}
