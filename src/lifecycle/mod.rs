//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! signals.rs:  SIGINT/SIGTERM → shutdown.trigger()
//! shutdown.rs: broadcast → HTTP server stops accepting, drains
//!                        → metrics upkeep task exits
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
