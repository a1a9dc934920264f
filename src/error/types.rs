/**
 * API Error Types
 *
 * This module defines the error taxonomy used by every HTTP handler.
 *
 * # Taxonomy
 *
 * - `InvalidRequest` - malformed or self-referential input (400)
 * - `Conflict` - duplicate state, e.g. an active request already exists (400)
 * - `InvalidCredentials` - failed login (400)
 * - `Unauthenticated` - missing, malformed, or expired token (401)
 * - `Forbidden` - authorization failure, including block-gated messaging
 *   and "not found or not yours" on accept/reject (403)
 * - `NotFound` - missing resource (404)
 * - `Database` - wrapped persistence failure (500)
 *
 * # Response Format
 *
 * Every error renders as JSON with a stable machine-readable `code` next to
 * the human-readable `message`, so clients never have to string-match:
 *
 * ```json
 * { "code": "conflict", "message": "connection request already exists" }
 * ```
 *
 * Database errors are logged server-side and surface as a generic
 * `internal_error` with no detail leaked to the caller.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// All errors an API handler can return.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or self-referential input
    #[error("{0}")]
    InvalidRequest(String),

    /// Duplicate state (active request or email already exists)
    #[error("{0}")]
    Conflict(String),

    /// Wrong email or password on login
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Missing, malformed, or expired bearer token
    #[error("{0}")]
    Unauthenticated(String),

    /// Authenticated but not allowed to perform the operation
    #[error("{0}")]
    Forbidden(String),

    /// Resource does not exist
    #[error("{0}")]
    NotFound(String),

    /// Persistence failure; detail stays server-side
    #[error("internal error")]
    Database(#[from] sqlx::Error),

    /// Other internal failure (hashing, token signing); detail stays server-side
    #[error("internal error")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::Conflict(_) | Self::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            Self::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable error code for the response body.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidRequest(_) => "invalid_request",
            Self::Conflict(_) => "conflict",
            Self::InvalidCredentials => "invalid_credentials",
            Self::Unauthenticated(_) => "unauthenticated",
            Self::Forbidden(_) => "forbidden",
            Self::NotFound(_) => "not_found",
            Self::Database(_) | Self::Internal(_) => "internal_error",
        }
    }

    /// Message safe to show the caller.
    pub fn public_message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => "internal error".to_string(),
            other => other.to_string(),
        }
    }

    /// Map a sqlx error to `Conflict` when it is a unique-constraint
    /// violation, otherwise wrap it as a database error.
    ///
    /// Used wherever a uniqueness invariant lives in the schema (duplicate
    /// email, duplicate active connection request) so concurrent duplicate
    /// requests resolve at the storage layer instead of a check-then-insert.
    pub fn conflict_on_unique(err: sqlx::Error, message: impl Into<String>) -> Self {
        match err.as_database_error() {
            Some(db_err) if db_err.is_unique_violation() => Self::Conflict(message.into()),
            _ => Self::Database(err),
        }
    }
}
