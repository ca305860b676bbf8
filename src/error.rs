use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// RouteError
///
/// Every failure the route pipeline can report. Non-success provider codes are not
/// errors (they mean "no dynamic routes"); only transport and decoding failures are.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("route provider request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("route provider unavailable: {0}")]
    Unavailable(String),

    #[error("route provider sent an unreadable reply: {0}")]
    ProviderDecode(serde_json::Error),

    #[error("route data could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("unknown component `{key}` on route `{path}`")]
    UnknownComponent { key: String, path: String },

    #[error("route tree exceeds the maximum depth of {limit}")]
    DepthExceeded { limit: usize },

    #[error("bad request: {0}")]
    BadRequest(String),
}

impl RouteError {
    pub fn status(&self) -> StatusCode {
        match self {
            RouteError::Transport(_)
            | RouteError::Unavailable(_)
            | RouteError::ProviderDecode(_) => StatusCode::BAD_GATEWAY,
            RouteError::BadRequest(_) => StatusCode::BAD_REQUEST,
            RouteError::Decode(_)
            | RouteError::UnknownComponent { .. }
            | RouteError::DepthExceeded { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for RouteError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(error = %self, "route generation failed");
        } else {
            tracing::warn!(error = %self, "rejected request");
        }

        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

pub type RouteResult<T> = Result<T, RouteError>;
