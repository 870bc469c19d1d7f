//! The audio sink contract and the notifications it emits.

use std::time::Duration;

use crate::error::PlayerError;

/// Notifications produced by a sink, drained through [`AudioSink::poll_events`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkEvent {
    /// Playback position advanced.
    TimeUpdate,
    /// A source requested by `play()` finished loading; duration is known now.
    Loaded,
    /// A source requested by `play()` could not be loaded or decoded.
    Rejected(String),
    /// The loaded source played to its end. The sink reports paused afterwards.
    Ended,
}

/// Platform audio output primitive.
///
/// The sink is authoritative for paused state, position and duration; the
/// session never shadows them.
pub trait AudioSink {
    /// Replace the loaded source. Nothing plays until [`AudioSink::play`].
    fn set_source(&mut self, src: &str);
    /// Start or resume playback. May be rejected.
    ///
    /// Loading can finish later; the outcome then arrives as
    /// [`SinkEvent::Loaded`] or [`SinkEvent::Rejected`].
    fn play(&mut self) -> Result<(), PlayerError>;
    fn pause(&mut self);
    fn paused(&self) -> bool;
    fn current_time(&self) -> Duration;
    fn set_current_time(&mut self, pos: Duration);
    /// Total length of the source, `None` while unknown.
    fn duration(&self) -> Option<Duration>;
    fn volume(&self) -> f32;
    fn set_volume(&mut self, level: f32);
    /// Drain pending notifications.
    fn poll_events(&mut self) -> Vec<SinkEvent>;
}

impl<S: AudioSink + ?Sized> AudioSink for Box<S> {
    fn set_source(&mut self, src: &str) {
        (**self).set_source(src)
    }
    fn play(&mut self) -> Result<(), PlayerError> {
        (**self).play()
    }
    fn pause(&mut self) {
        (**self).pause()
    }
    fn paused(&self) -> bool {
        (**self).paused()
    }
    fn current_time(&self) -> Duration {
        (**self).current_time()
    }
    fn set_current_time(&mut self, pos: Duration) {
        (**self).set_current_time(pos)
    }
    fn duration(&self) -> Option<Duration> {
        (**self).duration()
    }
    fn volume(&self) -> f32 {
        (**self).volume()
    }
    fn set_volume(&mut self, level: f32) {
        (**self).set_volume(level)
    }
    fn poll_events(&mut self) -> Vec<SinkEvent> {
        (**self).poll_events()
    }
}
