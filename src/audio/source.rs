//! Resolution of a track's audio reference into encoded bytes.

use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use lofty::prelude::AudioFile;
use lofty::probe::Probe;
use tracing::debug;

use crate::error::PlayerError;

/// Load the encoded audio behind `src`.
///
/// `http://` and `https://` references are fetched with a blocking client;
/// anything else (optionally prefixed with `file://`) is read from disk.
pub fn load_source(src: &str, timeout: Duration) -> Result<Arc<[u8]>, PlayerError> {
    if src.starts_with("http://") || src.starts_with("https://") {
        debug!(src, "fetching remote source");
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| PlayerError::PlaybackRejected(e.to_string()))?;
        let bytes = client
            .get(src)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.bytes())
            .map_err(|e| PlayerError::PlaybackRejected(format!("{src}: {e}")))?;
        return Ok(Arc::from(bytes.as_ref()));
    }

    let path = Path::new(src.strip_prefix("file://").unwrap_or(src));
    let bytes = std::fs::read(path)
        .map_err(|e| PlayerError::PlaybackRejected(format!("{}: {e}", path.display())))?;
    Ok(Arc::from(bytes))
}

/// Read the duration from container metadata, when it can be found.
pub(super) fn probe_duration(bytes: &Arc<[u8]>) -> Option<Duration> {
    let tagged = Probe::new(Cursor::new(bytes.clone()))
        .guess_file_type()
        .ok()?
        .read()
        .ok()?;
    let d = tagged.properties().duration();
    (!d.is_zero()).then_some(d)
}
