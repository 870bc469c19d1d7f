//! File-backed `tracing` setup.
//!
//! The terminal belongs to the UI, so log lines go to a file. Failing to open
//! it leaves tracing without a subscriber, which silently drops events.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::LogSettings;

/// Build the filter: `RUST_LOG` wins over the configured level.
pub fn env_filter(settings: &LogSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `path`. Returns false when
/// logging stays disabled.
pub fn init(settings: &LogSettings, path: Option<&Path>) -> bool {
    let Some(path) = path else {
        return false;
    };
    if let Some(parent) = path.parent() {
        if fs::create_dir_all(parent).is_err() {
            return false;
        }
    }
    let Ok(file) = OpenOptions::new().create(true).append(true).open(path) else {
        return false;
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter(settings))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .is_ok()
}
