//! Error types shared by the catalog, session and storage layers.
//!
//! None of these are fatal: the runtime logs them and keeps the UI
//! interactive.

use thiserror::Error;

use crate::catalog::TrackId;

/// Failures of the persisted key-value store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("no data directory could be resolved")]
    NoDataDir,
}

/// Errors raised by player operations.
#[derive(Debug, Error)]
pub enum PlayerError {
    /// An operation referenced an id that is not in the catalog.
    #[error("track {0} not found")]
    TrackNotFound(TrackId),

    /// The sink refused to start playback.
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),

    /// Reading or writing the persisted catalog failed.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[from] StorageError),

    /// Navigation was requested on an empty catalog.
    #[error("catalog is empty")]
    EmptyCatalog,
}
