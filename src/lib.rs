use axum::{
    Router,
    extract::FromRef,
    http::HeaderName,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

// --- Module Structure ---

// Route data, the access filter and the generation pipeline.
pub mod components;
pub mod error;
pub mod generator;
pub mod menu;
pub mod models;
pub mod permission;
pub mod provider;
pub mod store;
pub mod table;

// Service plumbing.
pub mod config;
pub mod handlers;
pub mod routes;
use routes::{navigation, public};

// --- Public Re-exports ---

pub use components::{ComponentRegistry, resolve_components};
pub use config::AppConfig;
pub use error::{RouteError, RouteResult};
pub use generator::RouteGenerator;
pub use permission::{filter_async_routes, has_permission};
pub use provider::{HttpRouteProvider, MockRouteProvider, ProviderState, RouteProvider};
pub use store::RouteStore;
pub use table::RouteTable;

/// ApiDoc
///
/// OpenAPI description of the HTTP surface, served at `/api-docs/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::get_provider_routes, handlers::generate_routes,
        handlers::get_current_routes, handlers::get_menu
    ),
    components(
        schemas(
            models::RouteNode, models::RouteMeta, models::ProviderResponse,
            models::GenerateRoutesRequest, models::RouteCollection, models::MenuItem,
        )
    ),
    tags(
        (name = "admin-routes", description = "Role-filtered dashboard navigation API")
    )
)]
struct ApiDoc;

/// AppState
///
/// Shared state for every request. The generator owns the provider, registry, table
/// and store handles; handlers pull out only what they need through `FromRef`.
/// Configuration is consumed at startup and not carried here.
#[derive(Clone)]
pub struct AppState {
    pub generator: RouteGenerator,
}

impl FromRef<AppState> for RouteGenerator {
    fn from_ref(app_state: &AppState) -> RouteGenerator {
        app_state.generator.clone()
    }
}

impl FromRef<AppState> for RouteStore {
    fn from_ref(app_state: &AppState) -> RouteStore {
        app_state.generator.store().clone()
    }
}

/// create_router
///
/// Assembles the routing structure, the observability layers and the shared state.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_origin(Any)
        .allow_headers(Any);

    let x_request_id = HeaderName::from_static("x-request-id");

    let base_router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(public::public_routes())
        .nest("/routes", navigation::navigation_routes())
        .with_state(state);

    base_router
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    x_request_id.clone(),
                    MakeRequestUuid,
                ))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(trace_span_logger)
                        .on_response(
                            DefaultOnResponse::new()
                                .level(Level::INFO)
                                .latency_unit(tower_http::LatencyUnit::Millis),
                        ),
                )
                .layer(PropagateRequestIdLayer::new(x_request_id)),
        )
        .layer(cors)
}

/// trace_span_logger
///
/// Opens the per-request span, tagged with the `x-request-id` set by the layer above
/// so every log line of one request can be correlated.
fn trace_span_logger(request: &axum::http::Request<axum::body::Body>) -> Span {
    let request_id = request
        .headers()
        .get("x-request-id")
        .and_then(|value| value.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "http_request",
        method = ?request.method(),
        uri = ?request.uri(),
        req_id = %request_id,
    )
}
