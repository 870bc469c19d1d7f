use tracing::{debug, warn};

use crate::catalog::{Catalog, Track};
use crate::error::StorageError;

use super::blob::BlobStore;

/// Serializes the catalog to the blob store after every liked-flag change.
///
/// After the first storage failure the adapter goes in-memory-only for the
/// rest of the session and never touches the store again.
pub struct Persistence {
    store: Box<dyn BlobStore>,
    key: String,
    available: bool,
}

impl Persistence {
    pub fn new(store: Box<dyn BlobStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
            available: true,
        }
    }

    /// An adapter that never persists anything.
    pub fn in_memory_only(store: Box<dyn BlobStore>, key: impl Into<String>) -> Self {
        Self {
            available: false,
            ..Self::new(store, key)
        }
    }

    /// False once a read or write has failed.
    pub fn is_available(&self) -> bool {
        self.available
    }

    /// Read the persisted track list.
    ///
    /// Returns `None` when nothing usable is stored (missing key, JSON `null`
    /// or content that does not parse); the caller seeds defaults then.
    pub fn load(&mut self) -> Option<Vec<Track>> {
        if !self.available {
            return None;
        }

        let raw = match self.store.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                self.mark_unavailable(&e);
                return None;
            }
        };

        match serde_json::from_str::<Option<Vec<Track>>>(&raw) {
            Ok(tracks) => tracks,
            Err(e) => {
                warn!(key = %self.key, error = %e, "ignoring invalid persisted catalog");
                None
            }
        }
    }

    /// Overwrite the stored blob with the full catalog.
    pub fn save(&mut self, catalog: &Catalog) -> Result<(), StorageError> {
        if !self.available {
            return Ok(());
        }

        let result = serde_json::to_string(catalog.tracks())
            .map_err(StorageError::from)
            .and_then(|blob| self.store.write(&self.key, &blob));

        match result {
            Ok(()) => {
                debug!(key = %self.key, tracks = catalog.len(), "catalog saved");
                Ok(())
            }
            Err(e) => {
                self.mark_unavailable(&e);
                Err(e)
            }
        }
    }

    fn mark_unavailable(&mut self, e: &StorageError) {
        warn!(key = %self.key, error = %e, "storage unavailable, continuing in memory");
        self.available = false;
    }
}
