use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::{
    error::{RouteError, RouteResult},
    models::{ProviderResponse, RouteNode},
};

// 1. RouteProvider Contract
/// RouteProvider
///
/// Source of the server-side route list. The generator only sees this trait, so the
/// HTTP client used in deployments and the in-memory mock used in tests are
/// interchangeable.
#[async_trait]
pub trait RouteProvider: Send + Sync {
    /// Fetches the `{ code, data }` envelope.
    ///
    /// A non-success `code` is a normal answer and comes back as `Ok`. Only failures
    /// to reach the provider or read its reply are errors.
    async fn get_routes(&self) -> RouteResult<ProviderResponse>;
}

// 2. The Real Implementation (HTTP)
/// HttpRouteProvider
///
/// Fetches the route list with a GET against a fixed URL.
#[derive(Clone)]
pub struct HttpRouteProvider {
    client: reqwest::Client,
    url: String,
}

impl HttpRouteProvider {
    pub fn new(url: &str, timeout: Duration) -> RouteResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            url: url.to_string(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RouteProvider for HttpRouteProvider {
    async fn get_routes(&self) -> RouteResult<ProviderResponse> {
        debug!(url = %self.url, "fetching dynamic routes");

        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        // A malformed upstream body is the provider's fault, not ours.
        let response: ProviderResponse =
            serde_json::from_slice(&body).map_err(RouteError::ProviderDecode)?;

        debug!(code = response.code, routes = response.data.len(), "route provider replied");
        Ok(response)
    }
}

// 3. The Mock Implementation (For Tests)
/// MockRouteProvider
///
/// Replays a canned envelope, or fails every call when built with `new_failing`.
#[derive(Clone)]
pub struct MockRouteProvider {
    response: ProviderResponse,
    // When true, every call returns `RouteError::Unavailable`.
    should_fail: bool,
}

impl MockRouteProvider {
    pub fn new(code: i64, data: Vec<RouteNode>) -> Self {
        Self {
            response: ProviderResponse { code, data },
            should_fail: false,
        }
    }

    pub fn success(data: Vec<RouteNode>) -> Self {
        Self {
            response: ProviderResponse::success(data),
            should_fail: false,
        }
    }

    pub fn new_failing() -> Self {
        Self {
            response: ProviderResponse::default(),
            should_fail: true,
        }
    }
}

#[async_trait]
impl RouteProvider for MockRouteProvider {
    async fn get_routes(&self) -> RouteResult<ProviderResponse> {
        if self.should_fail {
            return Err(RouteError::Unavailable(
                "Mock Provider Error: Simulation requested".to_string(),
            ));
        }
        Ok(self.response.clone())
    }
}

/// ProviderState
///
/// Shared, type-erased provider handle held in the application state.
pub type ProviderState = Arc<dyn RouteProvider>;
