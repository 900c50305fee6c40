//! Handler errors and their HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a request can end in. Each is terminal to its own request only.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid location: {0}")]
    InvalidLocation(String),

    #[error("location is {len} bytes, limit is {max}")]
    LocationTooLong { len: usize, max: usize },

    /// Reserved for a real weather provider being unreachable. Synthetic data
    /// is never substituted for this case.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("no route for {0}")]
    NotFound(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidLocation(_) | ApiError::LocationTooLong { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable client-facing code.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidLocation(_) => "INVALID_LOCATION",
            ApiError::LocationTooLong { .. } => "LOCATION_TOO_LONG",
            ApiError::UpstreamUnavailable(_) => "UPSTREAM_UNAVAILABLE",
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::Internal(_) => "INTERNAL",
        }
    }
}

/// JSON body of every error produced by this service's handlers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: self.to_string(),
            code: self.code().to_string(),
        };
        (status, Json(body)).into_response()
    }
}
