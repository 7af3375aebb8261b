//! Conversion engine: apply one rule to one entry in one direction.
//!
//! Rule selection and rule application are strictly separated — this module
//! always uses the rule handed to it and never falls back to another
//! candidate. Failures carry the entry id so batch callers can turn them
//! into per-entry verdicts instead of aborting.

use thiserror::Error;

use crate::model::{ConversionResult, Direction, Entry};
use crate::normalize::{bytes_to_hex, hex_to_bytes, normalize_hex, normalize_unknown, FormatError};
use crate::rules::{Rule, RuleError};

/// Error type for a failed conversion of a specific entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The entry's hex side is malformed.
    #[error("Conversion failed for entry '{entry_id}': {source}")]
    BadHex {
        entry_id: String,
        #[source]
        source: FormatError,
    },

    /// The rule rejected the unknown-format value on decode.
    #[error("Conversion failed for entry '{entry_id}': {source}")]
    RuleRejected {
        entry_id: String,
        #[source]
        source: RuleError,
    },
}

impl ConversionError {
    pub fn entry_id(&self) -> &str {
        match self {
            ConversionError::BadHex { entry_id, .. } => entry_id,
            ConversionError::RuleRejected { entry_id, .. } => entry_id,
        }
    }
}

/// Convert a single entry in the given direction using the supplied rule.
pub fn convert(
    entry: &Entry,
    direction: Direction,
    rule: &Rule,
) -> Result<ConversionResult, ConversionError> {
    let value = match direction {
        Direction::HexToUnknown => {
            let hex = normalize_hex(&entry.hex)
                .map_err(|source| ConversionError::BadHex { entry_id: entry.id.clone(), source })?;
            let bytes = hex_to_bytes(&hex)
                .map_err(|source| ConversionError::BadHex { entry_id: entry.id.clone(), source })?;
            rule.encode(&bytes)
        }
        Direction::UnknownToHex => {
            let unknown = normalize_unknown(&entry.unknown);
            let bytes = rule.decode(&unknown).map_err(|source| {
                ConversionError::RuleRejected { entry_id: entry.id.clone(), source }
            })?;
            bytes_to_hex(&bytes)
        }
    };

    Ok(ConversionResult { entry_id: entry.id.clone(), direction, value, success: true })
}

/// Error type for the auxiliary hex-to-ASCII check.
#[derive(Debug, Error)]
pub enum AsciiError {
    #[error("Invalid hex input: {0}")]
    Format(#[from] FormatError),

    #[error("Decoded bytes are not valid UTF-8")]
    NotUtf8,

    #[error("Decoded text is not valid JSON: {0}")]
    NotJson(#[from] serde_json::Error),
}

/// Decode a hex string to its ASCII text, requiring the text to be valid
/// JSON. Used for the ascii-validity statistic in run summaries; plays no
/// part in rule inference.
pub fn hex_to_ascii(hex: &str) -> Result<String, AsciiError> {
    let normalized = normalize_hex(hex)?;
    let bytes = hex_to_bytes(&normalized)?;
    let text = String::from_utf8(bytes).map_err(|_| AsciiError::NotUtf8)?;
    serde_json::from_str::<serde_json::Value>(&text)?;
    Ok(text)
}

/// Strict JSON parse of already-decoded text.
pub fn parse_json_object(text: &str) -> Result<serde_json::Value, AsciiError> {
    Ok(serde_json::from_str(text)?)
}
