/**
 * Application State Management
 *
 * This module defines the application state shared by all request handlers.
 *
 * # Architecture
 *
 * `AppState` is the central state container, holding:
 * - The SQLite connection pool (the only persistence handle in the process)
 * - The JWT signing secret used by the auth extractor and login/register
 * - Per-conversation broadcast channels for in-process message fan-out
 *
 * # Thread Safety
 *
 * `SqlitePool` and `ConversationBroadcast` are internally synchronized and
 * cheap to clone, so `AppState` is cloned into every handler invocation.
 *
 * # State Extraction
 *
 * The `FromRef` implementation lets database-only handlers extract
 * `State<SqlitePool>` directly; handlers that also need the signing secret
 * or the broadcast channels take the whole `AppState`.
 */

use axum::extract::FromRef;
use sqlx::SqlitePool;

use crate::realtime::broadcast::ConversationBroadcast;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, opened at startup and passed explicitly
    pub db: SqlitePool,
    /// Secret for signing and verifying session tokens
    pub jwt_secret: String,
    /// In-process broadcast channels for direct-message fan-out
    pub conversations: ConversationBroadcast,
}

impl AppState {
    pub fn new(db: SqlitePool, jwt_secret: String) -> Self {
        Self {
            db,
            jwt_secret,
            conversations: ConversationBroadcast::new(),
        }
    }
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}
