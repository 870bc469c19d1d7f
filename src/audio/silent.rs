use std::time::Duration;

use crate::error::PlayerError;

use super::types::{AudioSink, SinkEvent};

/// Sink used when no output device could be opened.
///
/// It keeps the volume so the UI stays consistent, and rejects every
/// attempt to play.
#[derive(Debug, Clone)]
pub struct SilentSink {
    volume: f32,
    reason: String,
}

impl SilentSink {
    pub fn new(reason: impl Into<String>, volume: f32) -> Self {
        Self {
            volume: volume.clamp(0.0, 1.0),
            reason: reason.into(),
        }
    }
}

impl AudioSink for SilentSink {
    fn set_source(&mut self, _src: &str) {}

    fn play(&mut self) -> Result<(), PlayerError> {
        Err(PlayerError::PlaybackRejected(self.reason.clone()))
    }

    fn pause(&mut self) {}

    fn paused(&self) -> bool {
        true
    }

    fn current_time(&self) -> Duration {
        Duration::ZERO
    }

    fn set_current_time(&mut self, _pos: Duration) {}

    fn duration(&self) -> Option<Duration> {
        None
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level.clamp(0.0, 1.0);
    }

    fn poll_events(&mut self) -> Vec<SinkEvent> {
        Vec::new()
    }
}
