//! Health check endpoint

use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ApiResult;
use crate::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Service status ("ok" whenever the store is readable)
    pub status: String,
    /// Module name
    pub module: String,
    /// Crate version from Cargo.toml
    pub version: String,
    /// Time of this health check
    pub timestamp: DateTime<Utc>,
    /// Number of track records, read fresh from the store on every call
    #[serde(rename = "musicCount")]
    pub music_count: usize,
}

/// GET /api/health
///
/// Liveness plus a fresh track count. A store read failure surfaces as an
/// ordinary 500, same as any other store error.
pub async fn health_check(State(state): State<AppState>) -> ApiResult<Json<HealthResponse>> {
    let music_count = state.library.count()?;

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        module: "tracknest-server".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        music_count,
    }))
}

/// Build health check routes
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/api/health", get(health_check))
}
