//! Request identification.
//!
//! Every request gets an `x-request-id` (client-supplied or a fresh UUID v4)
//! which is echoed on the response and recorded on the request span.

use axum::body::Body;
use axum::http::Request;
use tracing::Span;

pub const X_REQUEST_ID: &str = "x-request-id";

/// Span for one request, tagged with its ID.
pub fn request_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown");

    tracing::info_span!(
        "request",
        method = %request.method(),
        path = %request.uri().path(),
        request_id = %request_id,
    )
}
