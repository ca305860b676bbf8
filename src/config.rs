use std::env;

/// AppConfig
///
/// Immutable runtime configuration, loaded once at startup and shared through the
/// application state.
#[derive(Clone, Debug)]
pub struct AppConfig {
    // Runtime environment marker. Selects the log format and which settings are mandatory.
    pub env: Env,
    // Socket address the HTTP server binds to.
    pub bind_addr: String,
    // URL answering with the `{ code, data }` route envelope.
    pub route_provider_url: String,
    // Prefix joined onto view keys to form the module path the dashboard imports.
    pub views_root: String,
    // Deepest route nesting accepted from provider data.
    pub max_route_depth: usize,
    // Upper bound on a single provider fetch.
    pub provider_timeout_secs: u64,
}

/// Env
///
/// Local runs against the built-in mock provider endpoint with pretty logs; Production
/// requires an explicit provider URL and logs JSON.
#[derive(Clone, PartialEq, Debug)]
pub enum Env {
    Local,
    Production,
}

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
pub const DEFAULT_VIEWS_ROOT: &str = "@/views";
pub const DEFAULT_MAX_ROUTE_DEPTH: usize = 16;
pub const DEFAULT_PROVIDER_TIMEOUT_SECS: u64 = 10;

impl Default for AppConfig {
    /// Non-panicking values for tests; no environment variables are read.
    fn default() -> Self {
        Self {
            env: Env::Local,
            bind_addr: "127.0.0.1:0".to_string(),
            route_provider_url: "http://127.0.0.1:3000/routes".to_string(),
            views_root: DEFAULT_VIEWS_ROOT.to_string(),
            max_route_depth: DEFAULT_MAX_ROUTE_DEPTH,
            provider_timeout_secs: DEFAULT_PROVIDER_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// load
    ///
    /// Reads the configuration from environment variables.
    ///
    /// # Panics
    /// Panics in production when `ROUTE_PROVIDER_URL` is missing, and in any
    /// environment when a numeric setting does not parse.
    pub fn load() -> Self {
        let env_str = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());
        let env = match env_str.as_str() {
            "production" => Env::Production,
            _ => Env::Local,
        };

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let route_provider_url = match env {
            Env::Production => env::var("ROUTE_PROVIDER_URL")
                .expect("FATAL: ROUTE_PROVIDER_URL must be set in production."),
            // Locally the service answers its own mock provider endpoint.
            Env::Local => env::var("ROUTE_PROVIDER_URL")
                .unwrap_or_else(|_| format!("http://{}/routes", local_host(&bind_addr))),
        };

        Self {
            env,
            route_provider_url,
            views_root: env::var("VIEWS_ROOT").unwrap_or_else(|_| DEFAULT_VIEWS_ROOT.to_string()),
            max_route_depth: parse_var("MAX_ROUTE_DEPTH", DEFAULT_MAX_ROUTE_DEPTH),
            provider_timeout_secs: parse_var(
                "PROVIDER_TIMEOUT_SECS",
                DEFAULT_PROVIDER_TIMEOUT_SECS,
            ),
            bind_addr,
        }
    }
}

fn parse_var<T: std::str::FromStr>(name: &str, default: T) -> T {
    match env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("FATAL: {name} must be a number, got `{raw}`.")),
        Err(_) => default,
    }
}

// A wildcard bind address is not something a client can connect to.
fn local_host(bind_addr: &str) -> String {
    match bind_addr.strip_prefix("0.0.0.0:") {
        Some(port) => format!("127.0.0.1:{port}"),
        None => bind_addr.to_string(),
    }
}
