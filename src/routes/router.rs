/**
 * Router Configuration
 *
 * Combines the API route table with cross-cutting middleware into the
 * final Axum router.
 *
 * # Middleware
 *
 * - `TraceLayer` - request/response tracing
 * - `CorsLayer` - permissive CORS for browser clients
 */

use axum::http::StatusCode;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::routes::api_routes::configure_api_routes;
use crate::server::state::AppState;

/// Create the Axum router with all routes and middleware configured.
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new().route("/health", axum::routing::get(|| async { "ok" }));

    let router = configure_api_routes(router);

    let router = router
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") })
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    router.with_state(app_state)
}
