//! Playback session: what is loaded, whether it plays, and how navigation
//! moves through the catalog.

mod model;

pub use model::*;
