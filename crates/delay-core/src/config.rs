use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use crate::Bounds;

pub const ENV_PORT: &str = "PORT";
pub const ENV_BIND: &str = "BIND";
pub const ENV_MIN_TIMEOUT: &str = "MIN_TIMEOUT";
pub const ENV_MAX_TIMEOUT: &str = "MAX_TIMEOUT";

pub const DEFAULT_PORT: &str = "8081";
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Fallback bounds reported by the fixed-route server. Its routes carry their
/// own ranges, so these only show up in the startup log.
pub const FIXED_ROUTES_FALLBACK: Bounds = Bounds::new(1_000, 10_000);
/// Fallback bounds for the configurable `/health` route.
pub const HEALTH_FALLBACK: Bounds = Bounds::new(4_000, 4_000);

/// Parse `raw` as `T`, keeping `fallback` when the value is absent or does not
/// parse. Every tunable goes through here so malformed input never turns into
/// an error.
pub fn parse_or<T: FromStr>(raw: Option<&str>, fallback: T) -> T {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return fallback;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::debug!(value = raw, "ignoring unparseable tunable");
            fallback
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid BIND: {0}")]
    InvalidBind(String),
}

/// Process-wide settings, read once at startup and passed to handlers by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelayConfig {
    pub addr: SocketAddr,
    pub defaults: Bounds,
}

impl DelayConfig {
    pub fn from_env(fallback: Bounds) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok(), fallback)
    }

    /// Resolve settings through `lookup`. Default bounds never fail: a bad
    /// `MIN_TIMEOUT` or `MAX_TIMEOUT` keeps the fallback. The listen address
    /// has no sensible fallback, so a bad `PORT` or `BIND` is reported.
    pub fn from_lookup<F>(lookup: F, fallback: Bounds) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Bounds::new(
            parse_or(lookup(ENV_MIN_TIMEOUT).as_deref(), fallback.min_ms),
            parse_or(lookup(ENV_MAX_TIMEOUT).as_deref(), fallback.max_ms),
        );

        let port_raw = lookup(ENV_PORT)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_PORT.into());
        let port: u16 = port_raw
            .parse()
            .map_err(|_| ConfigError::InvalidPort(port_raw.clone()))?;

        let bind_raw = lookup(ENV_BIND)
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BIND.into());
        let ip: IpAddr = bind_raw
            .trim_start_matches('[')
            .trim_end_matches(']')
            .parse()
            .map_err(|_| ConfigError::InvalidBind(bind_raw.clone()))?;

        Ok(Self {
            addr: SocketAddr::new(ip, port),
            defaults,
        })
    }
}
