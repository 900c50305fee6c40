//! Health reporting.
//!
//! Only liveness is reported: the service has no dependencies, so a process
//! that can answer is healthy. A readiness signal belongs here once a real
//! downstream (provider, cache) exists.

pub mod status;

pub use status::{HealthStatus, VERSION};
