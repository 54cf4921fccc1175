//! Response DTOs for the API.

use serde::Serialize;

/// Bot field value before the bot has logged in.
pub const BOT_NOT_LOGGED_IN: &str = "Not logged in";

/// Health check response.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Process status; always "online" when the endpoint answers.
    pub status: String,
    /// Bot display name, or "Not logged in".
    pub bot: String,
    /// Process uptime in seconds.
    pub uptime: f64,
    /// Cached service availability: "online" or "offline".
    pub service_status: String,
    /// Store reachability: "connected" or "disconnected".
    pub database: String,
    /// Response time, RFC 3339 UTC.
    pub timestamp: String,
}
