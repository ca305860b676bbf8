use crate::{
    error::RouteError,
    generator::RouteGenerator,
    menu::build_menu,
    models::{GenerateRoutesRequest, MenuItem, ProviderResponse, RouteCollection},
    store::RouteStore,
};
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

// --- Handlers ---

/// get_provider_routes
///
/// [Provider Route] Serves the built-in conditional route table in the provider
/// envelope. This is the endpoint a dashboard (or this service in local mode) fetches
/// its dynamic routes from.
#[utoipa::path(
    get,
    path = "/routes",
    responses((status = 200, description = "Route provider envelope", body = ProviderResponse))
)]
pub async fn get_provider_routes(State(generator): State<RouteGenerator>) -> Json<ProviderResponse> {
    Json(ProviderResponse::success(generator.table().dynamic.clone()))
}

/// generate_routes
///
/// [Navigation Route] Regenerates the navigation tree for the given roles and replaces
/// the stored collection. Returns the accessible conditional routes in the same
/// `{ code, data }` envelope the provider uses.
#[utoipa::path(
    post,
    path = "/routes/generate",
    request_body = GenerateRoutesRequest,
    responses(
        (status = 200, description = "Accessible routes", body = ProviderResponse),
        (status = 400, description = "Malformed request body"),
        (status = 500, description = "Route data failed to resolve"),
        (status = 502, description = "Route provider unreachable")
    )
)]
pub async fn generate_routes(
    State(generator): State<RouteGenerator>,
    payload: Result<Json<GenerateRoutesRequest>, JsonRejection>,
) -> Result<Json<ProviderResponse>, RouteError> {
    let Json(request) = payload.map_err(|e| RouteError::BadRequest(e.body_text()))?;
    let accessed = generator.generate_routes(&request.roles).await?;
    Ok(Json(ProviderResponse::success(accessed)))
}

/// get_current_routes
///
/// [Navigation Route] The stored collection from the last generation. Empty lists and
/// a null timestamp until the first generation has run.
#[utoipa::path(
    get,
    path = "/routes/current",
    responses((status = 200, description = "Current route collection", body = RouteCollection))
)]
pub async fn get_current_routes(State(store): State<RouteStore>) -> Json<RouteCollection> {
    Json(store.snapshot())
}

/// get_menu
///
/// [Navigation Route] The sidebar built from the stored `routes`, hidden entries removed.
#[utoipa::path(
    get,
    path = "/routes/menu",
    responses((status = 200, description = "Sidebar entries", body = [MenuItem]))
)]
pub async fn get_menu(State(store): State<RouteStore>) -> Json<Vec<MenuItem>> {
    Json(build_menu(&store.routes()))
}
