//! Persistence of the catalog as a single JSON blob under a fixed key.
//!
//! `BlobStore` is the key-value seam; `Persistence` is the adapter the rest
//! of the app talks to.

mod blob;
mod persistence;

pub use blob::{BlobStore, FileStore, MemoryStore};
pub use persistence::Persistence;
