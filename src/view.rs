//! View synchronization: projects session and catalog state onto the
//! rendered surfaces, emitting only the updates that change something.

mod model;
mod sync;

pub use model::*;
pub use sync::{format_clock, sync};
