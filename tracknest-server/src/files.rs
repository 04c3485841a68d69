//! Uploaded-file store
//!
//! Files land in one flat directory, named by a generated uuid with the
//! original extension preserved. Records point at these names; the uuid
//! (without extension) doubles as the track id.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracknest_common::{Error, Result};
use uuid::Uuid;

/// Name and identifier assigned to a newly stored file
#[derive(Debug, Clone)]
pub struct StoredFile {
    pub id: Uuid,
    pub filename: String,
}

/// Outcome of a best-effort file deletion. Callers log `NotFound` and
/// carry on; only `Failed` propagates.
#[derive(Debug)]
pub enum DeleteOutcome {
    Deleted,
    NotFound,
    Failed(Error),
}

/// Directory of uploaded audio files
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write bytes under a fresh uuid name, preserving the original
    /// extension when there is one
    pub fn store(&self, bytes: &[u8], original_name: &str) -> Result<StoredFile> {
        let id = Uuid::new_v4();
        let filename = match Path::new(original_name).extension().and_then(|e| e.to_str()) {
            Some(ext) => format!("{}.{}", id, ext),
            None => id.to_string(),
        };

        fs::write(self.dir.join(&filename), bytes)?;
        tracing::debug!("Stored {} as {}", original_name, filename);

        Ok(StoredFile { id, filename })
    }

    /// Remove a stored file
    pub fn delete(&self, filename: &str) -> DeleteOutcome {
        if !is_safe_filename(filename) {
            return DeleteOutcome::Failed(Error::InvalidInput(format!(
                "Refusing to delete suspicious filename: {}",
                filename
            )));
        }

        match fs::remove_file(self.dir.join(filename)) {
            Ok(()) => DeleteOutcome::Deleted,
            Err(e) if e.kind() == ErrorKind::NotFound => DeleteOutcome::NotFound,
            Err(e) => DeleteOutcome::Failed(e.into()),
        }
    }
}

/// Stored names are uuid-with-extension; anything resembling a path has
/// no business being deleted from the store
fn is_safe_filename(name: &str) -> bool {
    !name.is_empty() && !name.contains('/') && !name.contains('\\') && !name.contains("..")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> FileStore {
        FileStore::new(dir.path().to_path_buf())
    }

    #[test]
    fn test_store_preserves_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);

        let stored = store.store(b"abc", "Artist - Song.mp3").unwrap();

        assert!(stored.filename.ends_with(".mp3"));
        assert_eq!(stored.filename, format!("{}.mp3", stored.id));
        assert_eq!(fs::read(tmp.path().join(&stored.filename)).unwrap(), b"abc");
    }

    #[test]
    fn test_store_without_extension() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);

        let stored = store.store(b"abc", "rawtrack").unwrap();

        assert_eq!(stored.filename, stored.id.to_string());
    }

    #[test]
    fn test_two_stores_never_collide() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);

        let first = store.store(b"one", "same.mp3").unwrap();
        let second = store.store(b"two", "same.mp3").unwrap();

        assert_ne!(first.filename, second.filename);
        assert_eq!(fs::read(tmp.path().join(&first.filename)).unwrap(), b"one");
        assert_eq!(fs::read(tmp.path().join(&second.filename)).unwrap(), b"two");
    }

    #[test]
    fn test_delete_existing_file() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);
        let stored = store.store(b"abc", "track.ogg").unwrap();

        assert!(matches!(store.delete(&stored.filename), DeleteOutcome::Deleted));
        assert!(!tmp.path().join(&stored.filename).exists());
    }

    #[test]
    fn test_delete_missing_file_is_not_found() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);

        assert!(matches!(
            store.delete("00000000-0000-0000-0000-000000000000.mp3"),
            DeleteOutcome::NotFound
        ));
    }

    #[test]
    fn test_delete_refuses_path_like_names() {
        let tmp = tempfile::tempdir().unwrap();
        let store = store_in(&tmp);

        assert!(matches!(store.delete("../library.json"), DeleteOutcome::Failed(_)));
        assert!(matches!(store.delete("a/b.mp3"), DeleteOutcome::Failed(_)));
        assert!(matches!(store.delete(""), DeleteOutcome::Failed(_)));
    }
}
