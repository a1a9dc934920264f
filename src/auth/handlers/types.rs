/**
 * Authentication Handler Types
 *
 * Request and response types shared by the register, login, me, and profile
 * handlers.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::User;

/// Registration request
#[derive(Deserialize, Serialize, Debug)]
pub struct RegisterRequest {
    /// Display name shown to other users
    pub display_name: String,
    /// User's email address (unique)
    pub email: String,
    /// User's password (hashed before storage, never stored or logged)
    pub password: String,
}

/// Login request
#[derive(Deserialize, Serialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Auth response returned by register and login.
#[derive(Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    /// JWT session token (1-hour expiry)
    pub token: String,
    /// User information (without sensitive data)
    pub user: UserResponse,
}

/// User response (without sensitive data)
///
/// The credential hash never leaves the server; every endpoint that returns
/// users goes through this type.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserResponse {
    pub id: uuid::Uuid,
    pub display_name: String,
    pub email: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
    pub college: Option<String>,
    pub bio: Option<String>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name,
            email: user.email,
            city: user.city,
            state: user.state,
            country: user.country,
            college: user.college,
            bio: user.bio,
        }
    }
}
