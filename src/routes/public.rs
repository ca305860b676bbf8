use crate::{AppState, handlers};
use axum::{Router, routing::get};

/// Public Router Module
///
/// Endpoints that carry no role-dependent data.
pub fn public_routes() -> Router<AppState> {
    Router::new()
        // GET /health
        // Liveness probe for load balancers and monitoring.
        .route("/health", get(|| async { "ok" }))
        // GET /routes
        // The built-in conditional table in the `{ code: 20000, data }` envelope.
        // Local deployments point ROUTE_PROVIDER_URL here.
        .route("/routes", get(handlers::get_provider_routes))
}
