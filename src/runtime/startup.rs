use std::time::Duration;

use tracing::{info, warn};

use crate::app::App;
use crate::audio::{AudioSink, RodioSink, SilentSink};
use crate::catalog::Catalog;
use crate::config;
use crate::error::StorageError;
use crate::session::Session;
use crate::storage::{FileStore, MemoryStore, Persistence};

/// Open the blob store, falling back to an in-memory session when the data
/// directory is unusable.
pub fn open_persistence(settings: &config::Settings) -> Persistence {
    let key = settings.storage.key.clone();
    let opened = settings
        .storage_dir()
        .ok_or(StorageError::NoDataDir)
        .and_then(|dir| FileStore::open(dir));

    match opened {
        Ok(store) => {
            info!(dir = %store.dir().display(), "using file store");
            Persistence::new(Box::new(store), key)
        }
        Err(e) => {
            warn!(error = %e, "storage unavailable, likes will not be saved");
            Persistence::in_memory_only(Box::new(MemoryStore::new()), key)
        }
    }
}

/// Open the default output device, or a sink that rejects playback.
pub fn open_sink(settings: &config::Settings) -> Box<dyn AudioSink> {
    let timeout = Duration::from_secs(settings.audio.fetch_timeout_secs);
    match RodioSink::open(timeout, settings.audio.volume) {
        Ok(sink) => Box::new(sink),
        Err(e) => {
            warn!(error = %e, "falling back to silent output");
            Box::new(SilentSink::new(e.to_string(), settings.audio.volume))
        }
    }
}

/// Build the app with catalog, session and playback defaults applied.
pub fn build_app(settings: &config::Settings, sink: Box<dyn AudioSink>) -> App {
    let mut persistence = open_persistence(settings);
    let catalog = Catalog::load(&mut persistence);

    let mut session = Session::new(sink);
    session.set_shuffle(settings.playback.shuffle);
    session.set_repeat(settings.playback.repeat);
    session.set_volume(settings.audio.volume);

    let mut app = App::new(catalog, session, persistence);
    if !app.persistence.is_available() {
        app.status = Some("Storage unavailable, likes are kept for this session only".into());
    }
    app.sync_view();
    app
}
