//! Application module: exposes the app model used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and ties together the catalog, the
//! playback session, persistence and the rendered view state. Pointer
//! handling helpers live in `app::pointer`.

mod model;
mod pointer;

pub use model::*;
pub use pointer::{DragLatch, Hitboxes, ratio_in};

#[cfg(test)]
mod tests;
