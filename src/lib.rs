//! Weather query service.
//!
//! A small HTTP service answering `GET /weather/{location}` with a reading
//! synthesized from the clock, plus `/health` and a Prometheus `/metrics`
//! endpoint.
//!
//! # Architecture Overview
//!
//! ```text
//!     request ──▶ request id ──▶ trace span ──▶ CORS ──▶ router
//!                                                         │
//!                 ┌───────────────────┬───────────────────┤
//!                 ▼                   ▼                   ▼
//!         /weather/{location}      /health            /metrics
//!          synthesizer+clock     HealthStatus      ServiceMetrics
//!                 │                                       ▲
//!                 └────── count + latency ────────────────┘
//! ```

pub mod config;
pub mod health;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod weather;

pub use config::ServiceConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
