use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

pub const TIMEOUT_ERROR: &str = "Request timed out. Please try again.";
pub const GENERIC_ERROR: &str = "An error occurred while processing your request";

/// Every failure in the proxy collapses into one of two wire shapes: a 504
/// for an exceeded deadline, a 500 for everything else. The underlying cause
/// is logged, never exposed to the caller.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("upstream call exceeded the deadline")]
    Timeout,

    #[error("upstream returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Internal(err.into())
    }
}

impl From<serde_json::Error> for ProxyError {
    fn from(err: serde_json::Error) -> Self {
        ProxyError::Internal(err.into())
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        tracing::error!("Chat proxy error: {:?}", self);

        let (status, error) = match self {
            ProxyError::Timeout => (StatusCode::GATEWAY_TIMEOUT, TIMEOUT_ERROR),
            ProxyError::UpstreamStatus(_) | ProxyError::Internal(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, GENERIC_ERROR)
            }
        };

        (status, Json(ErrorBody { error })).into_response()
    }
}
