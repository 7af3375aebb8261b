//! Candidate transformation rules between byte sequences and the unknown
//! encoding.
//!
//! The candidate set is closed: each rule is a tagged variant carrying its
//! own parameters, with a pure `encode`/`decode` pair obeying
//! `decode(encode(b)) == b` for every byte sequence `b`. All built-in
//! candidates re-encode their payload as lower-case hex; parameterized
//! variants (mask, header) let a registry be assembled from configuration
//! without opening the set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::normalize::{bytes_to_hex, hex_to_bytes, FormatError};

/// Mask byte the original encoder XORs into every payload byte.
pub const DEFAULT_MASK: u8 = 0xd8;

/// Header the original encoder prepends to every unknown-format value.
pub const DEFAULT_HEADER: &str = "d8ab19d5c7a0f27c10fa57540506ac68";

/// Error type for rule application failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleError {
    /// The unknown-format payload is not valid hex.
    #[error("Unknown-format payload is not valid hex: {0}")]
    BadPayload(#[from] FormatError),

    /// The value does not start with the header the rule requires.
    #[error("Value does not carry the expected header for rule '{rule}'")]
    MissingHeader { rule: &'static str },
}

/// An invertible encode/decode transformation candidate.
///
/// Serialized as a tagged object (`kind` plus parameters) so registries can
/// be described in configuration files and rule choices can appear verbatim
/// in reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Rule {
    /// Unknown value is the plain hex encoding of the bytes.
    Identity,
    /// Byte order reversed, then hex encoded.
    ByteSwap,
    /// High and low nibble of each byte exchanged.
    NibbleSwap,
    /// Every byte XORed with a constant mask.
    XorMask { mask: u8 },
    /// Fixed header prepended; each payload byte XORed with `mask`, then
    /// offset by its position modulo 256.
    OffsetCipher { header: String, mask: u8 },
}

impl Rule {
    /// Stable name used in reports, run records, and CLI `--rule` lookups.
    pub fn name(&self) -> &'static str {
        match self {
            Rule::Identity => "identity",
            Rule::ByteSwap => "byte-swap",
            Rule::NibbleSwap => "nibble-swap",
            Rule::XorMask { .. } => "xor-mask",
            Rule::OffsetCipher { .. } => "offset-cipher",
        }
    }

    /// Encode bytes into the unknown-format representation.
    pub fn encode(&self, bytes: &[u8]) -> String {
        match self {
            Rule::Identity => bytes_to_hex(bytes),
            Rule::ByteSwap => {
                let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
                bytes_to_hex(&reversed)
            }
            Rule::NibbleSwap => {
                let swapped: Vec<u8> =
                    bytes.iter().map(|b| (b << 4) | (b >> 4)).collect();
                bytes_to_hex(&swapped)
            }
            Rule::XorMask { mask } => {
                let masked: Vec<u8> = bytes.iter().map(|b| b ^ mask).collect();
                bytes_to_hex(&masked)
            }
            Rule::OffsetCipher { header, mask } => {
                let mut payload = Vec::with_capacity(bytes.len());
                for (i, b) in bytes.iter().enumerate() {
                    let transformed = (b ^ mask).wrapping_add((i % 256) as u8);
                    payload.push(transformed);
                }
                format!("{header}{}", bytes_to_hex(&payload))
            }
        }
    }

    /// Decode an unknown-format representation back into bytes.
    pub fn decode(&self, unknown: &str) -> Result<Vec<u8>, RuleError> {
        match self {
            Rule::Identity => Ok(hex_to_bytes(&unknown.to_ascii_lowercase())?),
            Rule::ByteSwap => {
                let mut bytes = hex_to_bytes(&unknown.to_ascii_lowercase())?;
                bytes.reverse();
                Ok(bytes)
            }
            Rule::NibbleSwap => {
                let bytes = hex_to_bytes(&unknown.to_ascii_lowercase())?;
                Ok(bytes.iter().map(|b| (b << 4) | (b >> 4)).collect())
            }
            Rule::XorMask { mask } => {
                let bytes = hex_to_bytes(&unknown.to_ascii_lowercase())?;
                Ok(bytes.iter().map(|b| b ^ mask).collect())
            }
            Rule::OffsetCipher { header, mask } => {
                let payload_hex = unknown
                    .strip_prefix(header.as_str())
                    .ok_or(RuleError::MissingHeader { rule: "offset-cipher" })?;
                let payload = hex_to_bytes(&payload_hex.to_ascii_lowercase())?;
                let mut bytes = Vec::with_capacity(payload.len());
                for (i, b) in payload.iter().enumerate() {
                    let reversed_offset = b.wrapping_sub((i % 256) as u8);
                    bytes.push(reversed_offset ^ mask);
                }
                Ok(bytes)
            }
        }
    }
}

/// Ordered registry of candidate rules.
///
/// Declaration order matters: the analyzer breaks agreement ties in favor of
/// the earlier rule, so this keeps a `Vec` rather than a map.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Build a registry from an already-ordered rule list (e.g. from config).
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    pub fn register(&mut self, rule: Rule) -> &mut Self {
        self.rules.push(rule);
        self
    }

    /// Look up a rule by its stable name.
    pub fn get(&self, name: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.name() == name)
    }

    /// Registered rule names in declaration order, for error messages/help.
    pub fn names(&self) -> Vec<String> {
        self.rules.iter().map(|r| r.name().to_string()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Registry populated with the built-in candidate set, in tie-break order.
pub fn default_rule_registry() -> RuleRegistry {
    let mut registry = RuleRegistry::new();
    registry
        .register(Rule::Identity)
        .register(Rule::ByteSwap)
        .register(Rule::NibbleSwap)
        .register(Rule::XorMask { mask: DEFAULT_MASK })
        .register(Rule::OffsetCipher { header: DEFAULT_HEADER.to_string(), mask: DEFAULT_MASK });
    registry
}
