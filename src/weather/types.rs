//! Weather reading payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One synthesized observation, built per request and never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    /// Location exactly as it appeared in the request path.
    pub location: String,

    /// Degrees Celsius.
    pub temperature: f64,

    /// Relative humidity, 0..=100.
    pub humidity: u8,

    /// Hectopascals.
    pub pressure: f64,

    /// Metres per second.
    pub wind_speed: f64,

    /// Instant of synthesis.
    pub timestamp: DateTime<Utc>,

    /// Tag identifying the service that produced the reading.
    pub source: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> WeatherReading {
        WeatherReading {
            location: "london".into(),
            temperature: 25.5,
            humidity: 72,
            pressure: 1013.25,
            wind_speed: 5.2,
            timestamp: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            source: "CloudWeather-Sentinel-API".into(),
        }
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec!["humidity", "location", "pressure", "source", "temperature", "timestamp", "wind_speed"]
        );
        assert!(object["humidity"].is_u64());
        assert!(object["temperature"].is_f64());
        assert_eq!(object["timestamp"], "2024-03-01T12:00:00Z");
    }

    #[test]
    fn reserialization_is_stable() {
        let first = serde_json::to_string(&sample()).unwrap();
        let parsed: WeatherReading = serde_json::from_str(&first).unwrap();
        let second = serde_json::to_string(&parsed).unwrap();

        assert_eq!(parsed, sample());
        assert_eq!(first, second);
    }
}
