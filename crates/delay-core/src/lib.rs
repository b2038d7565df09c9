//! Randomised-delay health responder.
//!
//! A request resolves a [`Bounds`] pair, sleeps for a uniformly chosen delay
//! inside it and answers with a [`HealthResponse`]. Both server variants share
//! this crate; only the way bounds are resolved differs between them.

pub mod bounds;
pub mod config;
pub mod response;
pub mod telemetry;

pub use bounds::Bounds;
pub use config::{parse_or, ConfigError, DelayConfig};
pub use response::{respond, HealthResponse};
