//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from a TOML file and
//! every field has a default, so an empty file is a valid configuration.

use serde::{Deserialize, Serialize};

/// Root configuration for the weather service.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct ServiceConfig {
    /// Listener configuration (host, port).
    pub listener: ListenerConfig,

    /// Reading synthesis settings.
    pub weather: WeatherConfig,

    /// Cross-origin policy applied to every response.
    pub cors: CorsConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// Port to bind. Overridden by the `PORT` environment variable.
    pub port: u16,
}

impl ListenerConfig {
    /// Printable `host:port` form, for logs.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Weather lookup settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct WeatherConfig {
    /// Longest accepted `location` path segment, in bytes.
    pub max_location_bytes: usize,

    /// Tag written into every reading's `source` field.
    pub source: String,
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            max_location_bytes: 256,
            source: "CloudWeather-Sentinel-API".to_string(),
        }
    }
}

/// Cross-origin resource sharing settings.
///
/// The defaults are the open demo profile: any origin, a small fixed set of
/// methods and the `Content-Type` request header.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CorsConfig {
    /// Allowed origins. `"*"` alone allows any origin.
    pub allowed_origins: Vec<String>,

    /// Methods advertised in `Access-Control-Allow-Methods`.
    pub allowed_methods: Vec<String>,

    /// Request headers advertised in `Access-Control-Allow-Headers`.
    pub allowed_headers: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()],
            allowed_headers: vec!["Content-Type".to_string()],
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    pub log_level: String,

    /// Service identifier reported by the health endpoint.
    pub service_name: String,

    /// How often buffered histogram samples are drained, in seconds.
    pub upkeep_interval_secs: u64,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            service_name: "weather-api".to_string(),
            upkeep_interval_secs: 5,
        }
    }
}
