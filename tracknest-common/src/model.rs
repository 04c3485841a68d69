//! Track and library document models
//!
//! The library document is a single JSON object holding an ordered sequence
//! of track records. The whole document is rewritten on every mutation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One metadata record describing an uploaded audio file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Track {
    /// Stored file identifier (the on-disk name without its extension)
    pub id: Uuid,
    /// Display title
    pub name: String,
    /// Display artist, "Unknown Artist" when the filename carries none
    pub artist: String,
    /// On-disk name of the stored file, unique within the file store
    pub filename: String,
    /// Public URL path to the stored file ("/data/<filename>")
    pub path: String,
    /// Content type declared at upload time
    pub mimetype: String,
    /// File size in bytes
    pub size: u64,
    /// Upload timestamp
    pub date_added: DateTime<Utc>,
}

/// The full library document: an ordered sequence of track records.
/// Order is insertion order; records are appended on upload and spliced
/// out on delete, never edited in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Library {
    pub tracks: Vec<Track>,
}

impl Library {
    /// Find a track by id
    pub fn find(&self, id: Uuid) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    /// Remove and return the track with the given id, preserving the
    /// order of the remaining records
    pub fn remove(&mut self, id: Uuid) -> Option<Track> {
        let index = self.tracks.iter().position(|t| t.id == id)?;
        Some(self.tracks.remove(index))
    }
}
