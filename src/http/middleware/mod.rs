//! Request/response middleware.

pub mod cors;

pub use cors::{cors_middleware, AllowedOrigins, CorsError, CorsPolicy};
