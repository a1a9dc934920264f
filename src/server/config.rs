/**
 * Server Configuration
 *
 * This module handles loading server configuration from the environment
 * and opening the SQLite connection pool.
 *
 * # Configuration Sources
 *
 * Configuration is read from environment variables, with sensible defaults
 * for local development:
 *
 * - `DATABASE_URL` - SQLite connection string (default `sqlite:studylink.db?mode=rwc`)
 * - `JWT_SECRET` - HMAC secret for session tokens
 * - `SERVER_PORT` - Listening port (default 3000)
 *
 * The resulting `ServerConfig` is passed explicitly to `create_app`; nothing
 * in the request path reads the environment.
 */

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

/// Server configuration loaded once at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// SQLite connection string
    pub database_url: String,
    /// Secret used to sign and verify session tokens
    pub jwt_secret: String,
    /// TCP port to listen on
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Missing values fall back to development defaults; a missing
    /// `JWT_SECRET` is logged as a warning because tokens signed with the
    /// fallback secret are worthless outside local development.
    pub fn from_env() -> Self {
        let database_url = std::env::var("DATABASE_URL")
            .unwrap_or_else(|_| "sqlite:studylink.db?mode=rwc".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using development fallback");
            "dev-secret-change-in-production".to_string()
        });

        let port = std::env::var("SERVER_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);

        Self {
            database_url,
            jwt_secret,
            port,
        }
    }
}

/// Open the SQLite connection pool.
///
/// The pool is the single database handle for the process: opened here at
/// startup, passed into `AppState`, and closed when the process exits.
pub async fn connect_database(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}
