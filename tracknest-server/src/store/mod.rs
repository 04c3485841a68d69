//! Library document persistence
//!
//! The store seam is a load/save pair over the whole document, so tests
//! can substitute an in-memory fake for the JSON file store.

mod json;
mod memory;

pub use json::JsonLibraryStore;
pub use memory::MemoryLibraryStore;

use tracknest_common::{Library, Result};

/// Whole-document persistence for the library.
///
/// There are no partial writes: callers load the full document, modify it
/// in memory, and save the full document back.
pub trait LibraryStore: Send + Sync {
    /// Read and parse the full library document
    fn load(&self) -> Result<Library>;

    /// Serialize and overwrite the full library document
    fn save(&self, library: &Library) -> Result<()>;
}
