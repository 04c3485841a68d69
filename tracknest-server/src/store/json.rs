//! JSON file-backed library store
//!
//! The whole library lives in one pretty-printed JSON document. Each load
//! reopens and reparses the file; each save rewrites it in full.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracknest_common::{Error, Library, Result};

use super::LibraryStore;

/// Library store over a single JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonLibraryStore {
    path: PathBuf,
}

impl JsonLibraryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Write an empty library document on first run
    pub fn init_if_missing(&self) -> Result<()> {
        if !self.path.exists() {
            tracing::info!("Creating empty library document at {}", self.path.display());
            self.save(&Library::default())?;
        }
        Ok(())
    }
}

impl LibraryStore for JsonLibraryStore {
    fn load(&self) -> Result<Library> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            // An absent document reads as an empty library; the file
            // reappears on the next save.
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Library::default()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_str(&content)
            .map_err(|e| Error::StoreCorrupt(format!("{}: {}", self.path.display(), e)))
    }

    fn save(&self, library: &Library) -> Result<()> {
        let json = serde_json::to_string_pretty(library)
            .map_err(|e| Error::Internal(format!("Library serialization failed: {}", e)))?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
