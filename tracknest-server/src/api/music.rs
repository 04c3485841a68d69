//! Track listing and lifecycle endpoints

use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde::Serialize;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::files::DeleteOutcome;
use crate::AppState;
use tracknest_common::Library;

/// GET /api/music
///
/// Returns the full library document verbatim.
pub async fn list_tracks(State(state): State<AppState>) -> ApiResult<Json<Library>> {
    let library = state.library.snapshot()?;
    tracing::debug!("Returning {} tracks", library.tracks.len());
    Ok(Json(library))
}

/// Deletion response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: Uuid,
    #[serde(rename = "trackName")]
    pub track_name: String,
    pub artist: String,
}

/// DELETE /api/music/:id
///
/// Removes the record and best-effort deletes the backing file. A missing
/// file is logged and ignored; any other file-store failure aborts before
/// the record is touched.
pub async fn delete_track(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<DeleteResponse>> {
    let track_id = Uuid::parse_str(&id)
        .map_err(|_| ApiError::NotFound(format!("No track with id {}", id)))?;

    let library = state.library.snapshot()?;
    let track = library
        .find(track_id)
        .cloned()
        .ok_or_else(|| ApiError::NotFound(format!("No track with id {}", id)))?;

    match state.files.delete(&track.filename) {
        DeleteOutcome::Deleted => {
            tracing::info!("Deleted stored file {}", track.filename);
        }
        DeleteOutcome::NotFound => {
            tracing::warn!(
                "Stored file {} already missing, removing record anyway",
                track.filename
            );
        }
        DeleteOutcome::Failed(e) => {
            tracing::error!("Failed to delete stored file {}: {}", track.filename, e);
            return Err(e.into());
        }
    }

    let removed = state.library.remove(track_id).await?.unwrap_or(track);
    tracing::info!("Deleted track {} ({})", removed.id, removed.name);

    Ok(Json(DeleteResponse {
        message: "Track deleted successfully".to_string(),
        id: removed.id,
        track_name: removed.name,
        artist: removed.artist,
    }))
}

/// Build track listing and lifecycle routes
pub fn music_routes() -> Router<AppState> {
    Router::new()
        .route("/api/music", get(list_tracks))
        .route("/api/music/:id", delete(delete_track))
}
