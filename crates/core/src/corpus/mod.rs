//! Corpus loading: the JSON input format and its conversion into `Entry`
//! values.
//!
//! The input is a mapping from entry id to an object with `hex`, `unknown`,
//! and an optional `ascii_text` JSON object. Parsing into a `BTreeMap` gives
//! a deterministic (sorted-by-id) entry order regardless of how the file
//! orders its keys, which the analyzer's determinism guarantee relies on.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::Entry;

/// One raw corpus object, exactly as it appears in the input file.
///
/// `hex` and `unknown` are required; `ascii_text` must be a JSON object when
/// present. Structural violations surface as deserialization errors before
/// any entry is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawEntry {
    pub hex: String,
    pub unknown: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascii_text: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Convert a raw id->object mapping into entries, ordered by id.
pub fn load_entries(raw: BTreeMap<String, RawEntry>) -> Vec<Entry> {
    raw.into_iter()
        .map(|(id, raw)| Entry::new(id, raw.hex, raw.unknown).with_ascii_text(raw.ascii_text))
        .collect()
}

/// Parse a corpus from a JSON string.
pub fn parse_corpus(json: &str) -> Result<Vec<Entry>> {
    let raw: BTreeMap<String, RawEntry> =
        serde_json::from_str(json).context("Failed to parse corpus JSON")?;
    Ok(load_entries(raw))
}

/// Read and parse a corpus file from disk.
pub fn read_corpus_file(path: &Path) -> Result<Vec<Entry>> {
    let body = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read corpus file at {}", path.display()))?;
    parse_corpus(&body)
        .with_context(|| format!("Failed to parse corpus file at {}", path.display()))
}
