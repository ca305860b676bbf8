use crate::{AppState, handlers};
use axum::{
    Router,
    routing::{get, post},
};

/// Navigation Router Module
///
/// Endpoints that produce or read the role-filtered navigation state. Roles are taken
/// from the request body; nothing here authenticates the caller, and the result only
/// governs what the dashboard displays.
pub fn navigation_routes() -> Router<AppState> {
    Router::new()
        // POST /routes/generate
        // Re-fetches provider data, filters it for the given roles and replaces the
        // stored collection.
        .route("/generate", post(handlers::generate_routes))
        // GET /routes/current
        // The stored `routes` / `addRoutes` pair from the last generation.
        .route("/current", get(handlers::get_current_routes))
        // GET /routes/menu
        // Sidebar entries derived from the stored `routes`.
        .route("/menu", get(handlers::get_menu))
}
