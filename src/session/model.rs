//! Session state machine: `Idle`, `Paused` and `Playing`.
//!
//! Paused/position/duration are always read back from the sink. Navigation
//! recomputes the current index from catalog order on every call.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::audio::{AudioSink, SinkEvent};
use crate::catalog::{Catalog, Track, TrackId};
use crate::error::PlayerError;

/// Derived playback state.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PlaybackState {
    /// No current track.
    #[default]
    Idle,
    Paused,
    Playing,
}

/// The single process-wide playback session.
pub struct Session<S: AudioSink> {
    sink: S,
    current: Option<TrackId>,
    shuffle: bool,
    repeat: bool,
    rng: StdRng,
}

impl<S: AudioSink> Session<S> {
    pub fn new(sink: S) -> Self {
        Self::with_rng(sink, StdRng::from_os_rng())
    }

    /// Build a session with a caller-provided random source.
    pub fn with_rng(sink: S, rng: StdRng) -> Self {
        Self {
            sink,
            current: None,
            shuffle: false,
            repeat: false,
            rng,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn current(&self) -> Option<TrackId> {
        self.current
    }

    pub fn current_track<'a>(&self, catalog: &'a Catalog) -> Option<&'a Track> {
        self.current.and_then(|id| catalog.find_by_id(id).ok())
    }

    pub fn state(&self) -> PlaybackState {
        match self.current {
            None => PlaybackState::Idle,
            Some(_) if self.sink.paused() => PlaybackState::Paused,
            Some(_) => PlaybackState::Playing,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.state() == PlaybackState::Playing
    }

    pub fn shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn repeat(&self) -> bool {
        self.repeat
    }

    pub fn set_shuffle(&mut self, on: bool) {
        self.shuffle = on;
    }

    pub fn set_repeat(&mut self, on: bool) {
        self.repeat = on;
    }

    pub fn position(&self) -> Duration {
        self.sink.current_time()
    }

    pub fn duration(&self) -> Option<Duration> {
        self.sink.duration()
    }

    pub fn volume(&self) -> f32 {
        self.sink.volume()
    }

    /// Fraction of the track already played, `None` while the duration is unknown.
    pub fn progress(&self) -> Option<f64> {
        let total = self.duration()?;
        if total.is_zero() {
            return Some(0.0);
        }
        Some((self.position().as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0))
    }

    /// Select `id`: toggles when it is already current, otherwise loads and
    /// plays it.
    ///
    /// Unknown ids are a no-op reported as `TrackNotFound`. A rejected
    /// `play()` keeps the new track current and is returned to the caller.
    pub fn select(&mut self, catalog: &Catalog, id: TrackId) -> Result<(), PlayerError> {
        let track = catalog.find_by_id(id)?;
        if self.current == Some(id) {
            return self.toggle(catalog);
        }
        self.load_and_play(track)
    }

    /// Flip between paused and playing. From `Idle` this starts the first track.
    pub fn toggle(&mut self, catalog: &Catalog) -> Result<(), PlayerError> {
        if self.current.is_none() {
            let first = catalog.get(0).ok_or(PlayerError::EmptyCatalog)?;
            return self.load_and_play(first);
        }

        let result = if self.sink.paused() {
            self.sink.play()
        } else {
            self.sink.pause();
            Ok(())
        };
        debug!(state = ?self.state(), "toggled playback");
        result
    }

    pub fn skip_forward(&mut self, catalog: &Catalog) -> Result<(), PlayerError> {
        let len = catalog.len();
        if len == 0 {
            return Err(PlayerError::EmptyCatalog);
        }
        let next = if self.shuffle {
            self.rng.random_range(0..len)
        } else {
            match self.current_index(catalog) {
                Some(i) => (i + 1) % len,
                None => 0,
            }
        };
        self.play_index(catalog, next)
    }

    pub fn skip_backward(&mut self, catalog: &Catalog) -> Result<(), PlayerError> {
        let len = catalog.len();
        if len == 0 {
            return Err(PlayerError::EmptyCatalog);
        }
        // An absent current track counts as index -1.
        let prev = match self.current_index(catalog) {
            Some(i) => (i + len - 1) % len,
            None => (2 * len - 2) % len,
        };
        self.play_index(catalog, prev)
    }

    /// Jump to `ratio` of the track. Ignored until the duration is known.
    pub fn seek(&mut self, ratio: f64) {
        if ratio.is_nan() {
            return;
        }
        let Some(total) = self.sink.duration() else {
            return;
        };
        let ratio = ratio.clamp(0.0, 1.0);
        self.sink.set_current_time(total.mul_f64(ratio));
    }

    /// Move the playhead by `delta_secs`, clamped to the track bounds.
    pub fn seek_by(&mut self, delta_secs: i64) {
        let Some(total) = self.sink.duration() else {
            return;
        };
        let pos = self.sink.current_time().as_secs_f64() + delta_secs as f64;
        let pos = pos.clamp(0.0, total.as_secs_f64());
        self.sink.set_current_time(Duration::from_secs_f64(pos));
    }

    pub fn set_volume(&mut self, level: f32) {
        if level.is_nan() {
            return;
        }
        self.sink.set_volume(level.clamp(0.0, 1.0));
    }

    /// React to the loaded source reaching its end.
    pub fn on_ended(&mut self, catalog: &Catalog) -> Result<(), PlayerError> {
        if self.repeat && self.current.is_some() {
            self.sink.set_current_time(Duration::ZERO);
            return self.sink.play();
        }
        self.skip_forward(catalog)
    }

    /// Drain sink notifications, running `on_ended` for every end of track.
    ///
    /// Returns the first error raised, including a late load rejection.
    pub fn pump(&mut self, catalog: &Catalog) -> Option<PlayerError> {
        let mut first_err = None;
        for ev in self.sink.poll_events() {
            let result = match ev {
                SinkEvent::TimeUpdate => Ok(()),
                SinkEvent::Loaded => {
                    debug!(id = ?self.current, duration = ?self.sink.duration(), "source loaded");
                    Ok(())
                }
                SinkEvent::Rejected(reason) => {
                    warn!(id = ?self.current, %reason, "playback rejected");
                    Err(PlayerError::PlaybackRejected(reason))
                }
                SinkEvent::Ended => self.on_ended(catalog),
            };
            if let Err(e) = result {
                first_err.get_or_insert(e);
            }
        }
        first_err
    }

    fn current_index(&self, catalog: &Catalog) -> Option<usize> {
        self.current.and_then(|id| catalog.index_of(id))
    }

    fn play_index(&mut self, catalog: &Catalog, index: usize) -> Result<(), PlayerError> {
        let track = catalog.get(index).ok_or(PlayerError::EmptyCatalog)?;
        self.load_and_play(track)
    }

    fn load_and_play(&mut self, track: &Track) -> Result<(), PlayerError> {
        self.current = Some(track.id);
        self.sink.set_source(&track.audio);
        debug!(id = track.id, title = %track.title, "loading track");
        self.sink.play().inspect_err(|e| {
            warn!(id = track.id, error = %e, "playback rejected");
        })
    }
}
