//! Configuration loader and schema types.
//!
//! This module exposes the configuration schema used to drive runtime
//! behavior and helpers to resolve config and data locations on disk.

mod load;
mod schema;

pub use load::default_data_dir;
pub use schema::*;

#[cfg(test)]
mod tests;
