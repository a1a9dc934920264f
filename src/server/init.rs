/**
 * Server Initialization
 *
 * This module assembles the application from its parts: shared state,
 * routes, and the periodic cleanup task for broadcast channels.
 *
 * # Initialization Process
 *
 * 1. Build `AppState` from the already-opened pool and configuration
 * 2. Configure the router with all routes and middleware
 * 3. Spawn the broadcast-channel cleanup task
 *
 * Migrations are *not* run here; `main` runs them once before calling in.
 */

use axum::Router;

use crate::routes::router::create_router;
use crate::server::config::ServerConfig;
use crate::server::state::AppState;

/// Create and configure the Axum application.
///
/// # Arguments
///
/// * `pool` - Database connection pool (migrations already applied)
/// * `config` - Server configuration
///
/// # Returns
///
/// Configured Axum `Router` ready to serve requests.
pub fn create_app(pool: sqlx::SqlitePool, config: &ServerConfig) -> Router<()> {
    let app_state = AppState::new(pool, config.jwt_secret.clone());

    let app = create_router(app_state.clone());

    // Periodically drop conversation channels nobody subscribes to anymore.
    let cleanup = app_state.conversations.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_secs(300));
        loop {
            interval.tick().await;
            cleanup.cleanup_inactive_channels();
            tracing::debug!("Cleaned up inactive conversation channels");
        }
    });

    tracing::info!("Router configured");

    app
}
