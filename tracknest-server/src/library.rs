//! Library service
//!
//! Wraps the injected store and serializes every mutation as one full
//! load→modify→save cycle behind a single-writer lock, so interleaved
//! requests cannot lose each other's records.

use std::sync::Arc;

use tokio::sync::Mutex;
use tracknest_common::{Library, Result, Track};
use uuid::Uuid;

use crate::store::LibraryStore;

/// Domain operations over the track record store
#[derive(Clone)]
pub struct MusicLibrary {
    store: Arc<dyn LibraryStore>,
    write_lock: Arc<Mutex<()>>,
}

impl MusicLibrary {
    pub fn new(store: Arc<dyn LibraryStore>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Current full document, read fresh from the store
    pub fn snapshot(&self) -> Result<Library> {
        self.store.load()
    }

    /// Current number of track records
    pub fn count(&self) -> Result<usize> {
        Ok(self.store.load()?.tracks.len())
    }

    /// Append a whole upload batch in one cycle; either the entire batch
    /// becomes visible or none of it does
    pub async fn append_all(&self, tracks: Vec<Track>) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let mut library = self.store.load()?;
        library.tracks.extend(tracks);
        self.store.save(&library)
    }

    /// Remove one record by id, returning it. An unknown id leaves the
    /// document untouched.
    pub async fn remove(&self, id: Uuid) -> Result<Option<Track>> {
        let _guard = self.write_lock.lock().await;
        let mut library = self.store.load()?;
        let removed = library.remove(id);
        if removed.is_some() {
            self.store.save(&library)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryLibraryStore;
    use chrono::Utc;

    fn library() -> MusicLibrary {
        MusicLibrary::new(Arc::new(MemoryLibraryStore::new()))
    }

    fn track(name: &str) -> Track {
        let id = Uuid::new_v4();
        Track {
            id,
            name: name.to_string(),
            artist: "Artist".to_string(),
            filename: format!("{}.mp3", id),
            path: format!("/data/{}.mp3", id),
            mimetype: "audio/mpeg".to_string(),
            size: 10,
            date_added: Utc::now(),
        }
    }

    #[tokio::test]
    async fn test_append_preserves_insertion_order() {
        let library = library();

        library.append_all(vec![track("A"), track("B")]).await.unwrap();
        library.append_all(vec![track("C")]).await.unwrap();

        let names: Vec<String> = library
            .snapshot()
            .unwrap()
            .tracks
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(library.count().unwrap(), 3);
    }

    #[tokio::test]
    async fn test_remove_returns_the_record() {
        let library = library();
        let victim = track("B");
        let victim_id = victim.id;

        library.append_all(vec![track("A"), victim]).await.unwrap();

        let removed = library.remove(victim_id).await.unwrap().unwrap();
        assert_eq!(removed.name, "B");
        assert_eq!(library.count().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_remove_unknown_id_changes_nothing() {
        let library = library();
        library.append_all(vec![track("A")]).await.unwrap();

        let removed = library.remove(Uuid::new_v4()).await.unwrap();
        assert!(removed.is_none());
        assert_eq!(library.count().unwrap(), 1);
    }
}
