//! Track catalog: the ordered collection of tracks shown on the shelves.
//!
//! The catalog is loaded from persisted storage (or seeded with defaults)
//! and supports lookup by id, liked-flag mutation and query filtering.

mod defaults;
mod model;
mod store;

pub use defaults::default_tracks;
pub use model::*;
pub use store::Catalog;

#[cfg(test)]
mod tests;
