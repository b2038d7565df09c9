use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::Bounds;

pub const STATUS_OK: &str = "ok";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub delay_ms: u64,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_name: String,
}

impl HealthResponse {
    /// Stamped with the current UTC time.
    pub fn ok(delay_ms: u64, service_name: impl Into<String>) -> Self {
        Self {
            status: STATUS_OK.to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            delay_ms,
            service_name: service_name.into(),
        }
    }
}

/// Sleep for a delay drawn from `bounds`, then build the health payload.
///
/// Only the calling task is suspended. Dropping the future (for example when
/// the client goes away) cancels the pending sleep.
pub async fn respond(bounds: Bounds, service_name: impl Into<String>) -> HealthResponse {
    let delay = bounds.pick();
    let service_name = service_name.into();
    tracing::debug!(
        service = %service_name,
        min_ms = bounds.min_ms,
        max_ms = bounds.max_ms,
        delay_ms = delay.as_millis() as u64,
        "delaying response"
    );
    tokio::time::sleep(delay).await;
    HealthResponse::ok(delay.as_millis() as u64, service_name)
}
