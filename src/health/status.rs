//! Liveness payload.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// Reported version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub service: String,
    /// RFC3339, second precision.
    pub timestamp: String,
    pub version: String,
}

impl HealthStatus {
    /// Status of a live process. Nothing downstream is consulted.
    pub fn healthy(service: &str, now: DateTime<Utc>) -> Self {
        Self {
            status: "healthy".to_string(),
            service: service.to_string(),
            timestamp: now.to_rfc3339_opts(SecondsFormat::Secs, true),
            version: VERSION.to_string(),
        }
    }
}
