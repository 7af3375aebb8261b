//! Core data model for corpus entries, conversions, and verdicts.
//!
//! These are plain value types shared across the analyzer, the conversion
//! engine, and the validator. They carry no logic beyond constructors and
//! small accessors so every pipeline stage stays a pure function over them.

use serde::{Deserialize, Serialize};

/// A single corpus entry: one hex/unknown sample pair plus opaque metadata.
///
/// Immutable once loaded. The `hex` and `unknown` fields are stored raw;
/// canonicalization happens in the stages that consume them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique entry key from the input corpus.
    pub id: String,
    /// Hex representation of the byte sequence (even length, `[0-9a-fA-F]`).
    pub hex: String,
    /// The paired value in the unknown encoding.
    pub unknown: String,
    /// Auxiliary metadata carried through untouched; never used in conversion.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascii_text: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Entry {
    pub fn new(id: impl Into<String>, hex: impl Into<String>, unknown: impl Into<String>) -> Self {
        Self { id: id.into(), hex: hex.into(), unknown: unknown.into(), ascii_text: None }
    }

    /// Builder-style helper to attach metadata when constructing an entry.
    pub fn with_ascii_text(
        mut self,
        ascii_text: Option<serde_json::Map<String, serde_json::Value>>,
    ) -> Self {
        self.ascii_text = ascii_text;
        self
    }
}

/// Direction of a single conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    HexToUnknown,
    UnknownToHex,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::HexToUnknown => "hex-to-unknown",
            Direction::UnknownToHex => "unknown-to-hex",
        }
    }
}

/// Result of converting a single entry in one direction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub entry_id: String,
    pub direction: Direction,
    /// The produced value (unknown-format string or lower-case hex).
    pub value: String,
    pub success: bool,
}

/// Round-trip validation outcome for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Both directions round-trip and match the paired value exactly.
    Pass,
    /// Both directions mismatch, or conversion failed on well-formed input.
    Fail,
    /// Exactly one direction matches (asymmetric/lossy candidate).
    Partial,
    /// Entry is missing a required field or its hex is structurally invalid.
    Skipped,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Pass => "pass",
            Outcome::Fail => "fail",
            Outcome::Partial => "partial",
            Outcome::Skipped => "skipped",
        }
    }
}

/// Per-entry verdict produced by the validator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verdict {
    pub entry_id: String,
    pub outcome: Outcome,
    /// Expected value for the direction that was judged (None when skipped).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected: Option<String>,
    /// Actually produced value (None when conversion never ran).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual: Option<String>,
    /// Human-readable mismatch description; for SKIPPED entries this retains
    /// the original error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mismatch: Option<String>,
}

impl Verdict {
    pub fn skipped(entry_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            entry_id: entry_id.into(),
            outcome: Outcome::Skipped,
            expected: None,
            actual: None,
            mismatch: Some(reason.into()),
        }
    }
}
