//! Upload pipeline
//!
//! Multipart batch upload: validate everything first, then persist the
//! files, then append all records in one store cycle. One bad file
//! rejects the whole batch with nothing written.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use chrono::Utc;
use serde::Serialize;

use crate::error::{ApiError, ApiResult};
use crate::AppState;
use tracknest_common::metadata::{display_stem, split_artist_title};
use tracknest_common::Track;

/// Multipart field carrying the audio files
pub const UPLOAD_FIELD: &str = "musicFiles";

/// Most files accepted in one batch
pub const MAX_UPLOAD_FILES: usize = 10;

/// Per-file size ceiling (50 MiB)
pub const MAX_FILE_SIZE: usize = 50 * 1024 * 1024;

// Request body ceiling handed to axum: a full batch of maximum-size files
// plus multipart framing. Axum's default limit is 2 MB.
const MAX_REQUEST_BYTES: usize = MAX_UPLOAD_FILES * MAX_FILE_SIZE + 1024 * 1024;

/// One incoming file, fully read and awaiting validation
struct IncomingFile {
    original_name: String,
    mimetype: String,
    bytes: Bytes,
}

/// Upload response
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub tracks: Vec<Track>,
}

/// POST /api/music/upload
///
/// Accepts up to 10 files in the `musicFiles` multipart field, audio
/// content types only, each at most 50 MiB.
pub async fn upload_tracks(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> ApiResult<(StatusCode, Json<UploadResponse>)> {
    let files = collect_files(&mut multipart).await?;

    if files.is_empty() {
        return Err(ApiError::BadRequest("No files uploaded".to_string()));
    }

    // Validation layer: fail fast, before any file or record is written
    for file in &files {
        if !is_audio_mimetype(&file.mimetype) {
            return Err(ApiError::UnsupportedMediaType(format!(
                "{} is not an audio file ({})",
                file.original_name, file.mimetype
            )));
        }
        if file.bytes.len() > MAX_FILE_SIZE {
            return Err(ApiError::UnsupportedMediaType(format!(
                "{} exceeds the {} MiB per-file limit",
                file.original_name,
                MAX_FILE_SIZE / (1024 * 1024)
            )));
        }
    }

    let mut tracks = Vec::with_capacity(files.len());
    for file in &files {
        let stored = state.files.store(&file.bytes, &file.original_name)?;
        let (artist, name) = split_artist_title(&display_stem(&file.original_name));

        tracks.push(Track {
            id: stored.id,
            name,
            artist,
            path: format!("/data/{}", stored.filename),
            filename: stored.filename,
            mimetype: file.mimetype.clone(),
            size: file.bytes.len() as u64,
            date_added: Utc::now(),
        });
    }

    state.library.append_all(tracks.clone()).await?;
    tracing::info!("Uploaded {} track(s)", tracks.len());

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            message: "Files uploaded successfully".to_string(),
            tracks,
        }),
    ))
}

/// Drain the multipart stream, keeping fields named `musicFiles`
async fn collect_files(multipart: &mut Multipart) -> Result<Vec<IncomingFile>, ApiError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Malformed multipart request: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        if files.len() == MAX_UPLOAD_FILES {
            return Err(ApiError::BadRequest(format!(
                "At most {} files per upload",
                MAX_UPLOAD_FILES
            )));
        }

        let original_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| ApiError::BadRequest("File field without a filename".to_string()))?;
        let mimetype = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();
        let bytes = field.bytes().await.map_err(|e| {
            ApiError::BadRequest(format!("Failed to read {}: {}", original_name, e))
        })?;

        files.push(IncomingFile {
            original_name,
            mimetype,
            bytes,
        });
    }

    Ok(files)
}

/// Type filter over the declared content type
fn is_audio_mimetype(mimetype: &str) -> bool {
    mimetype.starts_with("audio/")
}

/// Build upload routes, with the request body ceiling raised to hold a
/// full batch
pub fn upload_routes() -> Router<AppState> {
    Router::new()
        .route("/api/music/upload", post(upload_tracks))
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BYTES))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_audio_mimetypes_pass_the_filter() {
        assert!(is_audio_mimetype("audio/mpeg"));
        assert!(is_audio_mimetype("audio/flac"));
        assert!(is_audio_mimetype("audio/x-wav"));
    }

    #[test]
    fn test_non_audio_mimetypes_are_rejected() {
        assert!(!is_audio_mimetype("text/plain"));
        assert!(!is_audio_mimetype("video/mp4"));
        assert!(!is_audio_mimetype("application/octet-stream"));
        assert!(!is_audio_mimetype(""));
    }
}
