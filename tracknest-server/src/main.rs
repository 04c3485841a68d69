//! tracknest-server - minimal media-library server
//!
//! Accepts uploaded audio files, keeps track metadata in a flat JSON
//! document, lists the library, deletes tracks, and serves the stored
//! files.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use tracknest_common::config::{self, RootInitializer};
use tracknest_server::store::JsonLibraryStore;
use tracknest_server::{build_router, AppState};

#[derive(Debug, Parser)]
#[command(name = "tracknest-server", about = "Minimal media-library server")]
struct Cli {
    /// Library root folder (holds library.json and data/)
    #[arg(long)]
    root: Option<PathBuf>,

    /// Listen address
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Listen port (falls back to the PORT environment variable, then 3000)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing subscriber
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    info!("Starting tracknest-server v{}", env!("CARGO_PKG_VERSION"));

    let root = config::resolve_root(cli.root.as_deref());
    let port = config::resolve_port(cli.port);
    info!("Library root: {}", root.display());

    let initializer = RootInitializer::new(root);
    initializer.ensure_directories()?;

    let store = JsonLibraryStore::new(initializer.library_path());
    store.init_if_missing()?;

    let state = AppState::new(Arc::new(store), initializer.data_dir());
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), port)).await?;
    info!("tracknest-server listening on http://{}:{}", cli.host, port);
    info!("Health check: http://{}:{}/api/health", cli.host, port);

    axum::serve(listener, app).await?;

    Ok(())
}
