/**
 * StudyLink Server Entry Point
 *
 * Loads configuration from the environment, opens the database pool, runs
 * the versioned migrations once, and serves the Axum router until shutdown.
 */

use studylink::server::config::ServerConfig;
use studylink::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    let config = ServerConfig::from_env();
    tracing::info!("Connecting to database at {}", config.database_url);

    let pool = studylink::server::config::connect_database(&config.database_url).await?;

    // Migrations are a single explicit step before the listener binds, not
    // something handlers or state restoration paths trigger again later.
    tracing::info!("Running database migrations");
    sqlx::migrate!().run(&pool).await?;

    let app = create_app(pool, &config);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
