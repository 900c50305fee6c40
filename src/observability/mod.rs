//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers produce:
//!     → logging.rs (structured log events via tracing)
//!     → metrics.rs (request counter, latency histogram)
//!
//! Consumers:
//!     → stdout (log aggregation)
//!     → GET /metrics (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Metrics live in an owned registry, never a process-global recorder
//! - Metric updates are atomic increments
//! - Request ID is recorded on every request span

pub mod logging;
pub mod metrics;

pub use self::logging::init_logging;
pub use self::metrics::ServiceMetrics;
