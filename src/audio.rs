//! Audio output: the `AudioSink` contract the playback session drives and
//! its implementations.
//!
//! `RodioSink` plays through the default output device, `SilentSink` stands
//! in when no device is available.

mod silent;
mod sink;
mod source;
mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use silent::SilentSink;
pub use sink::RodioSink;
pub use types::*;
