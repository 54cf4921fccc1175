//! Health check handlers.

use axum::{extract::State, http::Uri, Json};
use chrono::{SecondsFormat, Utc};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{HealthResponse, BOT_NOT_LOGGED_IN};

/// GET /health - Health check endpoint.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let status = state.context.status().await;
    let bot = state
        .bot_identity()
        .await
        .unwrap_or_else(|| BOT_NOT_LOGGED_IN.to_string());

    Json(HealthResponse {
        status: "online".to_string(),
        bot,
        uptime: state.config.uptime_seconds(),
        service_status: status.label().to_string(),
        database: state.connection_state().label().to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::NotFound(uri.path().to_string())
}
