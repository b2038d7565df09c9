//! HTTP surface for the delay test-double.
//!
//! Two deployables share this library: `delay-routes` serves
//! [`routes::fixed_router`] and `delay-health` serves
//! [`routes::health_router`].

pub mod routes;
mod server;

pub use server::{attach_http_layers, serve, serve_on, Error};
