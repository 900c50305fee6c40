//! Route handlers.

use std::time::Instant;

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, HeaderValue, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use crate::health::HealthStatus;
use crate::http::error::ApiError;
use crate::http::response::json_response;
use crate::http::server::AppState;
use crate::observability::metrics::EXPOSITION_CONTENT_TYPE;

/// `GET /weather/{location}`
///
/// Counted on entry, including requests whose location cannot be decoded;
/// latency covers synthesis and serialization.
pub async fn get_weather(
    State(state): State<AppState>,
    location: Result<Path<String>, PathRejection>,
) -> Result<Response, ApiError> {
    let started = Instant::now();
    state.metrics.record_request();

    let result = match location {
        Ok(Path(location)) => lookup_weather(&state, &location),
        Err(rejection) => Err(ApiError::InvalidLocation(rejection.body_text())),
    };

    state.metrics.observe_latency(started.elapsed());
    result
}

fn lookup_weather(state: &AppState, location: &str) -> Result<Response, ApiError> {
    let max = state.max_location_bytes;
    if location.len() > max {
        return Err(ApiError::LocationTooLong {
            len: location.len(),
            max,
        });
    }

    let reading = state.synthesizer.synthesize(location);
    tracing::debug!(
        location = %reading.location,
        temperature = reading.temperature,
        humidity = reading.humidity,
        "Reading synthesized"
    );
    json_response(StatusCode::OK, &reading)
}

/// `GET /health`. Not counted in request metrics.
pub async fn health_check(State(state): State<AppState>) -> Result<Response, ApiError> {
    let status = HealthStatus::healthy(&state.service_name, state.clock.now());
    json_response(StatusCode::OK, &status)
}

/// `GET /metrics`. Not counted in request metrics.
pub async fn export_metrics(State(state): State<AppState>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, HeaderValue::from_static(EXPOSITION_CONTENT_TYPE))],
        state.metrics.render(),
    )
        .into_response()
}

/// Fallback for unknown paths.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
