use admin_routes::{
    AppState, ComponentRegistry, HttpRouteProvider, ProviderState, RouteGenerator, RouteStore,
    RouteTable,
    config::{AppConfig, Env},
    create_router,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// main
///
/// Loads configuration, sets up logging, validates the built-in route table against
/// the component registry, and serves the HTTP API.
#[tokio::main]
async fn main() {
    // 1. Configuration (fail-fast on missing production settings).
    dotenv::dotenv().ok();
    let config = AppConfig::load();

    // 2. Logging
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "admin_routes=debug,tower_http=info".into());

    match config.env {
        Env::Local => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().pretty())
                .init();
        }
        Env::Production => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(tracing_subscriber::fmt::layer().json())
                .init();
        }
    }

    tracing::info!("Application starting in {:?} mode", config.env);

    // 3. Component registry and route table. An unknown view key in the compiled-in
    // tables is a configuration error and stops startup here.
    let registry = ComponentRegistry::builtin(config.views_root.as_str());
    let table = RouteTable::load(&registry, config.max_route_depth)
        .expect("FATAL: built-in route table failed validation.");

    // 4. Route provider
    let provider = HttpRouteProvider::new(
        &config.route_provider_url,
        Duration::from_secs(config.provider_timeout_secs),
    )
    .expect("FATAL: could not build the route provider HTTP client.");
    tracing::info!(url = %provider.url(), "route provider configured");

    // 5. State assembly
    let generator = RouteGenerator::new(
        Arc::new(provider) as ProviderState,
        Arc::new(registry),
        Arc::new(table),
        RouteStore::new(),
        config.max_route_depth,
    );
    let app = create_router(AppState { generator });

    // 6. Server
    let listener = TcpListener::bind(&config.bind_addr)
        .await
        .expect("FATAL: could not bind the HTTP listener.");

    tracing::info!("Listening on {}", config.bind_addr);
    tracing::info!("API Documentation (Swagger UI) available at /swagger-ui");

    axum::serve(listener, app)
        .await
        .expect("FATAL: HTTP server terminated unexpectedly.");
}
