//! tracknest-server library - media-library HTTP service
//!
//! Exposes the application state and router for integration testing.

pub mod api;
pub mod error;
pub mod files;
pub mod library;
pub mod store;

pub use crate::error::{ApiError, ApiResult};

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::files::FileStore;
use crate::library::MusicLibrary;
use crate::store::LibraryStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Track record store behind the single-writer library service
    pub library: MusicLibrary,
    /// Uploaded-file directory
    pub files: FileStore,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<dyn LibraryStore>, data_dir: PathBuf) -> Self {
        Self {
            library: MusicLibrary::new(store),
            files: FileStore::new(data_dir),
        }
    }
}

/// Build application router
///
/// API routes plus static serving: stored audio under /data, the embedded
/// front-end at the root.
pub fn build_router(state: AppState) -> Router {
    let stored_files = ServeDir::new(state.files.dir());

    Router::new()
        .merge(api::ui_routes())
        .merge(api::music_routes())
        .merge(api::upload_routes())
        .merge(api::health_routes())
        .nest_service("/data", stored_files)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
