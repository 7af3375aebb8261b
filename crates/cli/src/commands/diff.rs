use anyhow::{anyhow, Result};

use probe_core::normalize::{hex_to_bytes, normalize_hex, normalize_unknown};

/// Print a positional XOR diff of a hex/unknown pair.
///
/// Exploratory aid for eyeballing candidate transformations: both sides must
/// be hex-decodable for a byte-level comparison to make sense.
pub fn diff_command(hex: &str, unknown: &str, limit: usize) -> Result<()> {
    let hex_bytes = hex_to_bytes(&normalize_hex(hex)?)?;
    let unknown_norm = normalize_unknown(unknown);
    let unknown_bytes = hex_to_bytes(&unknown_norm.to_ascii_lowercase())
        .map_err(|err| anyhow!("Unknown value is not hex-decodable, cannot diff bytes: {err}"))?;

    let positions = hex_bytes.len().min(unknown_bytes.len()).min(limit);
    println!("Pattern analysis ({} positions):", positions);
    for i in 0..positions {
        let h = hex_bytes[i];
        let u = unknown_bytes[i];
        println!(
            "Position {:2}: Hex={:02x} Unknown={:02x} XOR_diff={:02x}",
            i,
            h,
            u,
            u ^ h
        );
    }
    if hex_bytes.len() != unknown_bytes.len() {
        println!(
            "Note: lengths differ ({} vs {} bytes)",
            hex_bytes.len(),
            unknown_bytes.len()
        );
    }
    Ok(())
}
