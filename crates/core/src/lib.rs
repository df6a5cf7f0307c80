//! analyzer-core
//!
//! Core library for generating, persisting and analyzing arrays of bounded
//! random integers.
//!
//! This crate defines the dataset model, the random generator, the binary file
//! codec, the classic array algorithms (selection sort, recursive binary search),
//! the analyzers that run over a reloaded dataset, and the pipeline that ties
//! them together.
//!
//! All substantive logic lives here so it is fully testable and reusable from
//! multiple frontends. The CLI only parses arguments and prints reports.

pub mod model;
pub mod generator;
pub mod codec;
pub mod algorithms;
pub mod analysis;
pub mod config;
pub mod pipeline;

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
