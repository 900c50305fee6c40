//! Reading synthesis.
//!
//! Field values are derived from the clock's unix seconds:
//!
//! | field       | value                                   |
//! |-------------|-----------------------------------------|
//! | temperature | `22.5 + (secs mod 10)`                  |
//! | humidity    | `65 + (secs mod 20)`, clamped to 0..=100 |
//! | pressure    | `1013.25`                               |
//! | wind_speed  | `5.2`                                   |
//!
//! Callers may only rely on the field set and types, not on the values.

use std::sync::Arc;

use crate::weather::clock::Clock;
use crate::weather::types::WeatherReading;

const BASE_TEMPERATURE: f64 = 22.5;
const TEMPERATURE_SPREAD: i64 = 10;
const BASE_HUMIDITY: i64 = 65;
const HUMIDITY_SPREAD: i64 = 20;
const PRESSURE_HPA: f64 = 1013.25;
const WIND_SPEED: f64 = 5.2;

/// Produces a reading for a location.
pub trait ReadingSynthesizer: Send + Sync + 'static {
    fn synthesize(&self, location: &str) -> WeatherReading;
}

/// Synthesizer driven purely by a [`Clock`].
#[derive(Clone)]
pub struct ClockSynthesizer {
    clock: Arc<dyn Clock>,
    source: String,
}

impl ClockSynthesizer {
    pub fn new(clock: Arc<dyn Clock>, source: impl Into<String>) -> Self {
        Self {
            clock,
            source: source.into(),
        }
    }
}

impl ReadingSynthesizer for ClockSynthesizer {
    fn synthesize(&self, location: &str) -> WeatherReading {
        let now = self.clock.now();
        let secs = now.timestamp();

        let temperature = BASE_TEMPERATURE + secs.rem_euclid(TEMPERATURE_SPREAD) as f64;
        let humidity = (BASE_HUMIDITY + secs.rem_euclid(HUMIDITY_SPREAD)).clamp(0, 100) as u8;

        WeatherReading {
            location: location.to_string(),
            temperature,
            humidity,
            pressure: PRESSURE_HPA,
            wind_speed: WIND_SPEED,
            timestamp: now,
            source: self.source.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather::clock::FixedClock;

    fn at(secs: i64) -> ClockSynthesizer {
        ClockSynthesizer::new(Arc::new(FixedClock::from_unix_secs(secs)), "test-source")
    }

    #[test]
    fn exact_values_for_a_pinned_instant() {
        // 1_700_000_007 mod 10 = 7, mod 20 = 7
        let reading = at(1_700_000_007).synthesize("berlin");

        assert_eq!(reading.location, "berlin");
        assert_eq!(reading.temperature, 29.5);
        assert_eq!(reading.humidity, 72);
        assert_eq!(reading.pressure, 1013.25);
        assert_eq!(reading.wind_speed, 5.2);
        assert_eq!(reading.timestamp.timestamp(), 1_700_000_007);
        assert_eq!(reading.source, "test-source");
    }

    #[test]
    fn humidity_spread_uses_twenty_second_cycle() {
        // 1_700_000_019 mod 20 = 19, mod 10 = 9
        let reading = at(1_700_000_019).synthesize("x");
        assert_eq!(reading.humidity, 84);
        assert_eq!(reading.temperature, 31.5);
    }

    #[test]
    fn humidity_stays_within_bounds() {
        for offset in 0..1000 {
            let secs = 1_600_000_000 + offset * 37;
            let reading = at(secs).synthesize("sample");
            assert!(reading.humidity <= 100, "humidity {} at {}", reading.humidity, secs);
            assert!(reading.temperature.is_finite());
            assert!(reading.pressure.is_finite());
            assert!(reading.wind_speed.is_finite());
        }
    }

    #[test]
    fn pre_epoch_instants_stay_in_range() {
        let reading = at(-13).synthesize("past");
        // -13 rem_euclid 10 = 7, rem_euclid 20 = 7
        assert_eq!(reading.temperature, 29.5);
        assert_eq!(reading.humidity, 72);
    }

    #[test]
    fn location_is_not_normalized() {
        let reading = at(0).synthesize("  São Paulo/Centro ");
        assert_eq!(reading.location, "  São Paulo/Centro ");
    }
}
