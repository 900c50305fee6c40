//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! optional TOML file (--config)
//!     → loader.rs (parse & deserialize, PORT override)
//!     → validation.rs (semantic checks)
//!     → ServiceConfig (validated, immutable)
//! ```
//!
//! # Design Decisions
//! - All fields have defaults; running with no file is the normal case
//! - `PORT` always wins over the file's `listener.port`
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_config_with_port, ConfigError, PORT_ENV};
pub use schema::{CorsConfig, ListenerConfig, ObservabilityConfig, ServiceConfig, WeatherConfig};
pub use validation::ValidationError;
