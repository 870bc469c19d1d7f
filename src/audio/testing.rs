//! A scriptable in-memory sink for tests.

use std::time::Duration;

use crate::error::PlayerError;

use super::types::{AudioSink, SinkEvent};

#[derive(Debug, Clone)]
pub(crate) struct FakeSink {
    pub src: Option<String>,
    pub paused: bool,
    pub position: Duration,
    pub duration: Option<Duration>,
    pub volume: f32,
    /// When set, `play()` fails and the sink stays paused.
    pub reject_play: bool,
    pub loads: usize,
    pub plays: usize,
    pub pending: Vec<SinkEvent>,
}

impl FakeSink {
    pub fn new() -> Self {
        Self {
            src: None,
            paused: true,
            position: Duration::ZERO,
            duration: Some(Duration::from_secs(200)),
            volume: 1.0,
            reject_play: false,
            loads: 0,
            plays: 0,
            pending: Vec::new(),
        }
    }

    /// Simulate the source running out.
    pub fn finish(&mut self) {
        if let Some(d) = self.duration {
            self.position = d;
        }
        self.paused = true;
        self.pending.push(SinkEvent::Ended);
    }

    /// Simulate a load that fails after `play()` already returned.
    pub fn fail_load(&mut self, reason: &str) {
        self.paused = true;
        self.duration = None;
        self.pending.push(SinkEvent::Rejected(reason.to_string()));
    }
}

impl AudioSink for FakeSink {
    fn set_source(&mut self, src: &str) {
        self.src = Some(src.to_string());
        self.position = Duration::ZERO;
        self.paused = true;
        self.loads += 1;
    }

    fn play(&mut self) -> Result<(), PlayerError> {
        self.plays += 1;
        if self.reject_play {
            return Err(PlayerError::PlaybackRejected("autoplay blocked".into()));
        }
        self.paused = false;
        Ok(())
    }

    fn pause(&mut self) {
        self.paused = true;
    }

    fn paused(&self) -> bool {
        self.paused
    }

    fn current_time(&self) -> Duration {
        self.position
    }

    fn set_current_time(&mut self, pos: Duration) {
        self.position = pos;
    }

    fn duration(&self) -> Option<Duration> {
        self.duration
    }

    fn volume(&self) -> f32 {
        self.volume
    }

    fn set_volume(&mut self, level: f32) {
        self.volume = level;
    }

    fn poll_events(&mut self) -> Vec<SinkEvent> {
        std::mem::take(&mut self.pending)
    }
}
