//! In-memory library store
//!
//! Drop-in fake for tests that want library behavior without a temp dir.

use std::sync::RwLock;

use tracknest_common::{Error, Library, Result};

use super::LibraryStore;

/// Library store holding the document in process memory
#[derive(Debug, Default)]
pub struct MemoryLibraryStore {
    inner: RwLock<Library>,
}

impl MemoryLibraryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LibraryStore for MemoryLibraryStore {
    fn load(&self) -> Result<Library> {
        match self.inner.read() {
            Ok(guard) => Ok(guard.clone()),
            Err(_) => Err(Error::Internal("library lock poisoned".to_string())),
        }
    }

    fn save(&self, library: &Library) -> Result<()> {
        match self.inner.write() {
            Ok(mut guard) => {
                *guard = library.clone();
                Ok(())
            }
            Err(_) => Err(Error::Internal("library lock poisoned".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty_and_persists_saves() {
        let store = MemoryLibraryStore::new();
        assert!(store.load().unwrap().tracks.is_empty());

        let library = Library::default();
        store.save(&library).unwrap();
        assert_eq!(store.load().unwrap(), library);
    }
}
