//! Health endpoints polled by the hosting platform.

use axum::{extract::State, routing::get, Json, Router};
use chrono::Utc;
use serde::Serialize;

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(status))
        .route("/health", get(health))
}

#[derive(Debug, Serialize)]
pub struct StatusDto {
    pub status: String,
    /// Seconds since the process started.
    pub uptime: i64,
    pub timestamp: String,
    /// Guilds currently in the bot's cache.
    pub guilds: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthDto {
    pub status: String,
    pub timestamp: String,
}

/// GET /
pub async fn status(State(state): State<AppState>) -> Json<StatusDto> {
    let now = Utc::now();

    Json(StatusDto {
        status: "online".to_string(),
        uptime: (now - state.started_at).num_seconds(),
        timestamp: now.to_rfc3339(),
        guilds: state.cache.guild_count(),
    })
}

/// GET /health
pub async fn health() -> Json<HealthDto> {
    Json(HealthDto {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339(),
    })
}
