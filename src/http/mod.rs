//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (request ID, span)
//!     → middleware/cors.rs (preflight short-circuit, CORS headers)
//!     → handlers.rs (weather / health / metrics)
//!     → response.rs, error.rs (JSON bodies, status mapping)
//!     → Send to client
//! ```

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod request;
pub mod response;
pub mod server;

pub use error::{ApiError, ErrorBody};
pub use request::X_REQUEST_ID;
pub use server::{build_router, AppState, HttpServer, ServerError};
