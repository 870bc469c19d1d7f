//! `AudioSink` backed by a `rodio` mixer.
//!
//! Sources are fetched on a loader thread and decoded from memory; seeking
//! rebuilds the `rodio::Sink` and skips into the decoded stream.

use std::io::Cursor;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

use rodio::mixer::Mixer;
use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink, Source};
use tracing::{debug, warn};

use crate::error::PlayerError;

use super::source::{load_source, probe_duration};
use super::types::{AudioSink, SinkEvent};

/// Turns a track's audio reference into encoded bytes. Runs off the UI thread.
pub type Loader = Arc<dyn Fn(&str) -> Result<Arc<[u8]>, PlayerError> + Send + Sync>;

struct Loaded {
    bytes: Arc<[u8]>,
    duration: Option<Duration>,
}

pub struct RodioSink {
    mixer: Mixer,
    loader: Loader,
    sink: Option<Sink>,
    src: Option<String>,
    bytes: Option<Arc<[u8]>>,
    loading: Option<Receiver<Result<Loaded, PlayerError>>>,
    /// `play()` was called while the source was still loading.
    want_play: bool,
    duration: Option<Duration>,
    /// Position the current `Sink` started from; `get_pos` counts from here.
    offset: Duration,
    volume: f32,
    ended: bool,
    // Dropped last so sinks detach from a live mixer.
    _stream: Option<OutputStream>,
}

impl RodioSink {
    /// Open the default output device.
    pub fn open(fetch_timeout: Duration, volume: f32) -> Result<Self, PlayerError> {
        let mut stream = OutputStreamBuilder::open_default_stream()
            .map_err(|e| PlayerError::PlaybackRejected(format!("no audio output device: {e}")))?;
        // rodio prints to stderr when the stream is dropped, which garbles the TUI.
        stream.log_on_drop(false);

        let loader: Loader = Arc::new(move |src: &str| load_source(src, fetch_timeout));
        let mut sink = Self::with_mixer(stream.mixer().clone(), loader, volume);
        sink._stream = Some(stream);
        Ok(sink)
    }

    /// Play into `mixer`, loading sources through `loader`.
    pub fn with_mixer(mixer: Mixer, loader: Loader, volume: f32) -> Self {
        Self {
            mixer,
            loader,
            sink: None,
            src: None,
            bytes: None,
            loading: None,
            want_play: false,
            duration: None,
            offset: Duration::ZERO,
            volume: volume.clamp(0.0, 1.0),
            ended: false,
            _stream: None,
        }
    }

    fn spawn_load(&mut self, src: String) -> Result<(), PlayerError> {
        let (tx, rx) = mpsc::channel();
        let loader = self.loader.clone();
        thread::Builder::new()
            .name("spoty-loader".into())
            .spawn(move || {
                debug!(%src, "loading source");
                let result = loader(&src).map(|bytes| Loaded {
                    duration: probe_duration(&bytes),
                    bytes,
                });
                // Nobody listens any more once another source was set.
                let _ = tx.send(result);
            })
            .map_err(|e| PlayerError::PlaybackRejected(format!("cannot start loader: {e}")))?;
        self.loading = Some(rx);
        Ok(())
    }

    fn take_load_result(&mut self) -> Option<Result<Loaded, PlayerError>> {
        let received = match self.loading.as_ref()?.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => {
                Err(PlayerError::PlaybackRejected("loader thread exited".to_string()))
            }
        };
        self.loading = None;
        Some(received)
    }

    fn finish_load(&mut self, result: Result<Loaded, PlayerError>) -> SinkEvent {
        let want_play = std::mem::take(&mut self.want_play);
        let sink = result.and_then(|loaded| {
            self.duration = loaded.duration;
            self.bytes = Some(loaded.bytes.clone());
            self.create_sink_at(loaded.bytes, self.offset)
        });

        match sink {
            Ok(sink) => {
                if want_play {
                    sink.play();
                }
                self.sink = Some(sink);
                SinkEvent::Loaded
            }
            Err(e) => {
                warn!(src = ?self.src, error = %e, "failed to load source");
                SinkEvent::Rejected(match e {
                    PlayerError::PlaybackRejected(reason) => reason,
                    other => other.to_string(),
                })
            }
        }
    }

    /// Create a paused `Sink` for the loaded bytes starting at `start_at`.
    fn create_sink_at(&mut self, bytes: Arc<[u8]>, start_at: Duration) -> Result<Sink, PlayerError> {
        let decoder =
            Decoder::new(Cursor::new(bytes)).map_err(|e| PlayerError::PlaybackRejected(e.to_string()))?;
        if self.duration.is_none() {
            self.duration = decoder.total_duration();
        }

        let sink = Sink::connect_new(&self.mixer);
        sink.pause();
        // `skip_duration` is the seeking primitive; even Duration::ZERO is fine.
        sink.append(decoder.skip_duration(start_at));
        sink.set_volume(self.volume);
        Ok(sink)
    }

    fn drop_sink(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }
}

impl AudioSink for RodioSink {
    fn set_source(&mut self, src: &str) {
        self.drop_sink();
        self.src = Some(src.to_string());
        self.bytes = None;
        self.loading = None;
        self.want_play = false;
        self.duration = None;
        self.offset = Duration::ZERO;
        self.ended = false;
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        if self.ended {
            self.offset = Duration::ZERO;
            self.ended = false;
        }

        if let Some(s) = &self.sink {
            s.play();
            return Ok(());
        }
        if let Some(bytes) = self.bytes.clone() {
            let sink = self.create_sink_at(bytes, self.offset)?;
            sink.play();
            self.sink = Some(sink);
            return Ok(());
        }

        let src = self
            .src
            .clone()
            .ok_or_else(|| PlayerError::PlaybackRejected("no source set".to_string()))?;
        if self.loading.is_none() {
            self.spawn_load(src)?;
        }
        self.want_play = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.want_play = false;
        if let Some(s) = &self.sink {
            s.pause();
        }
    }

    fn paused(&self) -> bool {
        match &self.sink {
            Some(s) => s.is_paused(),
            None => !self.want_play,
        }
    }

    fn current_time(&self) -> Duration {
        let pos = self.offset + self.sink.as_ref().map_or(Duration::ZERO, |s| s.get_pos());
        match self.duration {
            Some(d) => pos.min(d),
            None => pos,
        }
    }

    fn set_current_time(&mut self, pos: Duration) {
        let pos = match self.duration {
            Some(d) => pos.min(d),
            None => pos,
        };
        self.offset = pos;
        self.ended = false;

        let Some(old) = self.sink.take() else {
            return;
        };
        let resume = !old.is_paused();
        old.stop();

        let Some(bytes) = self.bytes.clone() else {
            return;
        };
        match self.create_sink_at(bytes, pos) {
            Ok(s) => {
                if resume {
                    s.play();
                }
                self.sink = Some(s);
            }
            Err(e) => warn!(error = %e, "failed to seek"),
        }
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level.clamp(0.0, 1.0);
        if let Some(s) = &self.sink {
            s.set_volume(self.volume);
        }
    }

    fn poll_events(&mut self) -> Vec<SinkEvent> {
        let mut events = Vec::new();
        if let Some(result) = self.take_load_result() {
            events.push(self.finish_load(result));
        }

        let Some(s) = &self.sink else {
            return events;
        };
        if s.is_paused() {
            return events;
        }
        if !s.empty() {
            events.push(SinkEvent::TimeUpdate);
            return events;
        }

        self.offset = self.current_time();
        self.drop_sink();
        self.ended = true;
        debug!(src = ?self.src, "source ended");
        events.extend([SinkEvent::TimeUpdate, SinkEvent::Ended]);
        events
    }
}
