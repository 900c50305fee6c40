//! Configuration validation.
//!
//! Serde handles syntax; this module checks value ranges and that the CORS
//! lists build a policy. All errors are collected, not just the first; the
//! CORS section reports its first problem.

use thiserror::Error;

use crate::config::schema::ServiceConfig;
use crate::http::middleware::CorsPolicy;

/// Upper bound accepted for `weather.max_location_bytes`.
pub const MAX_LOCATION_BYTES_LIMIT: usize = 8192;

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a parsed configuration.
pub fn validate_config(config: &ServiceConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    let max = config.weather.max_location_bytes;
    if max == 0 || max > MAX_LOCATION_BYTES_LIMIT {
        errors.push(ValidationError::new(
            "weather.max_location_bytes",
            format!("must be between 1 and {MAX_LOCATION_BYTES_LIMIT}, got {max}"),
        ));
    }

    if config.weather.source.trim().is_empty() {
        errors.push(ValidationError::new("weather.source", "must not be empty"));
    }

    validate_cors(config, &mut errors);

    if config.observability.upkeep_interval_secs == 0 {
        errors.push(ValidationError::new(
            "observability.upkeep_interval_secs",
            "must be greater than zero",
        ));
    }

    if config.observability.service_name.trim().is_empty() {
        errors.push(ValidationError::new(
            "observability.service_name",
            "must not be empty",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_cors(config: &ServiceConfig, errors: &mut Vec<ValidationError>) {
    if let Err(e) = CorsPolicy::from_config(&config.cors) {
        errors.push(ValidationError::new(e.field(), e.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(validate_config(&ServiceConfig::default()).is_ok());
    }

    #[test]
    fn collects_every_error() {
        let mut config = ServiceConfig::default();
        config.weather.max_location_bytes = 0;
        config.weather.source = "  ".into();
        config.observability.upkeep_interval_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "weather.max_location_bytes",
                "weather.source",
                "observability.upkeep_interval_secs",
            ]
        );
    }

    #[test]
    fn rejects_oversized_location_limit() {
        let mut config = ServiceConfig::default();
        config.weather.max_location_bytes = MAX_LOCATION_BYTES_LIMIT + 1;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn rejects_wildcard_mixed_with_origins() {
        let mut config = ServiceConfig::default();
        config.cors.allowed_origins = vec!["*".into(), "https://example.com".into()];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "cors.allowed_origins");
    }

    #[test]
    fn rejects_malformed_cors_entries() {
        let mut config = ServiceConfig::default();
        config.cors.allowed_methods = vec!["GE T".into()];
        config.cors.allowed_headers = vec!["bad header".into()];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].to_string(), "cors.allowed_methods: invalid method \"GE T\"");

        let mut config = ServiceConfig::default();
        config.cors.allowed_origins = vec!["".into()];
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors[0].field, "cors.allowed_origins");
    }
}
