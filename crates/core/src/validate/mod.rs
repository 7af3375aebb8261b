//! Per-entry round-trip validation.
//!
//! Each entry is judged in both directions against its paired value:
//!
//! - forward: encode the hex bytes and compare against the entry's unknown
//!   value, then decode the produced string back and compare the bytes;
//! - reverse: decode the entry's unknown value and compare the re-encoded
//!   hex against the normalized hex side.
//!
//! PASS requires both directions to match exactly; PARTIAL means exactly one
//! matched (asymmetric candidates, e.g. casing a rule accepts on decode but
//! never emits); FAIL means both mismatched or conversion failed. Entries
//! with a missing field or malformed hex are SKIPPED with the original error
//! message retained, and never abort the batch.

use crate::model::{Entry, Outcome, Verdict};
use crate::normalize::{bytes_to_hex, hex_to_bytes, normalize_hex, normalize_unknown};
use crate::rules::Rule;

/// Validate one entry against the selected rule.
pub fn validate(entry: &Entry, rule: &Rule) -> Verdict {
    if entry.hex.trim().is_empty() {
        return Verdict::skipped(&entry.id, "Missing required field 'hex'");
    }
    if entry.unknown.trim().is_empty() {
        return Verdict::skipped(&entry.id, "Missing required field 'unknown'");
    }

    let hex = match normalize_hex(&entry.hex) {
        Ok(h) => h,
        Err(err) => return Verdict::skipped(&entry.id, err.to_string()),
    };
    // Normalized hex always decodes; the empty byte string is still valid.
    let bytes = match hex_to_bytes(&hex) {
        Ok(b) => b,
        Err(err) => return Verdict::skipped(&entry.id, err.to_string()),
    };
    let unknown = normalize_unknown(&entry.unknown);

    // Forward: hex -> unknown -> hex.
    let produced = rule.encode(&bytes);
    let forward_ok = produced == unknown
        && rule.decode(&produced).map(|round| round == bytes).unwrap_or(false);

    // Reverse: unknown -> hex -> unknown.
    let (reverse_ok, reverse_err) = match rule.decode(&unknown) {
        Ok(decoded) => (bytes_to_hex(&decoded) == hex, None),
        Err(err) => (false, Some(err.to_string())),
    };

    let outcome = match (forward_ok, reverse_ok) {
        (true, true) => Outcome::Pass,
        (false, false) => Outcome::Fail,
        _ => Outcome::Partial,
    };

    let mismatch = match outcome {
        Outcome::Pass => None,
        _ => {
            let mut parts = Vec::new();
            if !forward_ok {
                parts.push(format!(
                    "hex->unknown: {}",
                    describe_mismatch(&unknown, &produced)
                ));
            }
            if !reverse_ok {
                match &reverse_err {
                    Some(err) => parts.push(format!("unknown->hex: {err}")),
                    None => {
                        // Safe: reverse_ok is false and decode succeeded.
                        let decoded = rule.decode(&unknown).unwrap_or_default();
                        parts.push(format!(
                            "unknown->hex: {}",
                            describe_mismatch(&hex, &bytes_to_hex(&decoded))
                        ));
                    }
                }
            }
            Some(parts.join("; "))
        }
    };

    Verdict {
        entry_id: entry.id.clone(),
        outcome,
        expected: Some(unknown),
        actual: Some(produced),
        mismatch,
    }
}

/// Describe where two strings diverge: first differing offset, or a length
/// difference when one is a prefix of the other.
fn describe_mismatch(expected: &str, actual: &str) -> String {
    let diverge = expected
        .bytes()
        .zip(actual.bytes())
        .position(|(e, a)| e != a);

    match diverge {
        Some(offset) => format!(
            "first difference at offset {offset} (expected '{}', got '{}')",
            expected.get(offset..offset + 1).unwrap_or("?"),
            actual.get(offset..offset + 1).unwrap_or("?"),
        ),
        None if expected.len() != actual.len() => format!(
            "length mismatch (expected {} chars, got {})",
            expected.len(),
            actual.len()
        ),
        None => "values match".to_string(),
    }
}
