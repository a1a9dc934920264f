//! HTTP route configuration.

pub mod api_routes;
pub mod router;
