//! Run ledger and output layout.
//!
//! This module wraps a small SQLite database recording validation run
//! history:
//! - which corpus was processed (name + content hash)
//! - which rule analysis selected and at what confidence
//! - per-outcome verdict counts and the overall run status
//!
//! It also defines `OutputLayout`, the computed file plan for an output
//! directory (report/summary paths, ledger path) without touching the
//! filesystem.

pub mod layout;
pub mod ledger;
pub mod models;

pub use layout::*;
pub use ledger::*;
pub use models::*;
