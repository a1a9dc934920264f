/**
 * Connection Request HTTP Handlers
 *
 * Handlers for the connection request lifecycle:
 *
 * - `POST /connect/{user_id}` - send a request
 * - `PUT /connect/accept/{id}` - accept (receiver only)
 * - `DELETE /connect/reject/{id}` - reject (receiver only, deletes the row)
 * - `GET /connections?status=` - list the user's requests
 * - `GET /friends` - list accepted counterparts
 *
 * # Authorization convention
 *
 * Accept and reject answer `403 forbidden` uniformly for "request does not
 * exist" and "request is not addressed to you", so the response does not
 * reveal whether a request id exists.
 */

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use sqlx::SqlitePool;
use uuid::Uuid;

use crate::auth::handlers::types::UserResponse;
use crate::auth::users::get_user_by_id;
use crate::connections::db;
use crate::connections::types::{ConnectionRequest, ConnectionStatus};
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;

/// Query parameters for GET /connections
#[derive(Debug, Deserialize)]
pub struct ConnectionListParams {
    /// Optional status filter: `pending` or `accepted`
    pub status: Option<String>,
}

/// Send a connection request to another user.
///
/// # Errors
///
/// * `400 invalid_request` - sending a request to yourself
/// * `404 not_found` - receiver does not exist
/// * `400 conflict` - an active request already exists for the pair
pub async fn send_connection_request(
    State(pool): State<SqlitePool>,
    AuthUser(sender_id): AuthUser,
    Path(receiver_id): Path<Uuid>,
) -> Result<Json<ConnectionRequest>, ApiError> {
    if sender_id == receiver_id {
        return Err(ApiError::InvalidRequest(
            "cannot send a connection request to yourself".into(),
        ));
    }

    get_user_by_id(&pool, receiver_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("user not found".into()))?;

    // The insert races at the pair-unique index, not at a pre-check, so
    // concurrent duplicates all but one collapse into this conflict.
    let request = db::create_request(&pool, sender_id, receiver_id)
        .await
        .map_err(|e| ApiError::conflict_on_unique(e, "connection request already exists"))?;

    tracing::info!("Connection request {} -> {}", sender_id, receiver_id);

    Ok(Json(request))
}

/// Accept a connection request. Receiver only.
///
/// Re-accepting an already-accepted request succeeds idempotently: the
/// conditional update misses, but the follow-up read shows the caller is
/// the receiver and the request is already in the terminal state.
pub async fn accept_connection_request(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
    Path(request_id): Path<Uuid>,
) -> Result<Json<ConnectionRequest>, ApiError> {
    let updated = db::accept_request(&pool, request_id, user_id).await?;

    if updated == 0 {
        return match db::get_request_by_id(&pool, request_id).await? {
            Some(request)
                if request.receiver_id == user_id
                    && request.status == ConnectionStatus::Accepted =>
            {
                Ok(Json(request))
            }
            _ => Err(ApiError::Forbidden(
                "only the receiver can accept a request".into(),
            )),
        };
    }

    tracing::info!("Connection request {} accepted by {}", request_id, user_id);

    let request = db::get_request_by_id(&pool, request_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("connection request not found".into()))?;

    Ok(Json(request))
}

/// Reject a connection request. Receiver only; deletes the row, after which
/// either party may send a fresh request.
pub async fn reject_connection_request(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
    Path(request_id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let deleted = db::delete_pending_request(&pool, request_id, user_id).await?;

    if deleted == 0 {
        return match db::get_request_by_id(&pool, request_id).await? {
            Some(request)
                if request.receiver_id == user_id
                    && request.status == ConnectionStatus::Accepted =>
            {
                // No transition out of accepted.
                Err(ApiError::Conflict("request already accepted".into()))
            }
            _ => Err(ApiError::Forbidden(
                "only the receiver can reject a request".into(),
            )),
        };
    }

    tracing::info!("Connection request {} rejected by {}", request_id, user_id);

    Ok(Json(serde_json::json!({ "rejected": true })))
}

/// List the user's connection requests, optionally filtered by status.
pub async fn list_connections(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
    Query(params): Query<ConnectionListParams>,
) -> Result<Json<Vec<ConnectionRequest>>, ApiError> {
    let status = match params.status.as_deref() {
        None | Some("") => None,
        Some(value) => Some(ConnectionStatus::from_str(value).ok_or_else(|| {
            ApiError::InvalidRequest(format!("unknown status filter: {value}"))
        })?),
    };

    let requests = db::list_requests_for_user(&pool, user_id, status).await?;

    Ok(Json(requests))
}

/// List the user's friends (accepted counterparts, either direction).
pub async fn list_friends(
    State(pool): State<SqlitePool>,
    AuthUser(user_id): AuthUser,
) -> Result<Json<Vec<UserResponse>>, ApiError> {
    let friends = db::list_friends(&pool, user_id).await?;

    Ok(Json(friends.into_iter().map(UserResponse::from).collect()))
}
