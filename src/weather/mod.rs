//! Weather reading subsystem.
//!
//! # Data Flow
//! ```text
//! GET /weather/{location}
//!     → clock.rs (current instant)
//!     → synthesizer.rs (derive fields from the instant)
//!     → types.rs (WeatherReading, serialized and discarded)
//! ```
//!
//! # Design Decisions
//! - Readings are derived from the clock only; no provider, no cache
//! - The clock sits behind a trait so tests can pin the instant

pub mod clock;
pub mod synthesizer;
pub mod types;

pub use clock::{Clock, FixedClock, SystemClock};
pub use synthesizer::{ClockSynthesizer, ReadingSynthesizer};
pub use types::WeatherReading;
