//! probe-core
//!
//! Core library for rule inference and round-trip validation of paired
//! hex/unknown encoding samples.
//!
//! This crate defines the data model, the normalizer, the candidate rule
//! registry, the pattern analyzer, the conversion engine, the validator,
//! report assembly, and the run ledger.
//!
//! The goal is to keep all substantive logic here so it is fully testable
//! and reusable from multiple frontends (CLI, batch jobs, etc.).

pub mod analysis;
pub mod convert;
pub mod corpus;
pub mod db;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod report;
pub mod rules;
pub mod validate;

pub use model::{ConversionResult, Direction, Entry, Outcome, Verdict};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
