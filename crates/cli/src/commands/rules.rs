use anyhow::Result;
use serde::Serialize;

use crate::commands::{load_probe_config, resolve_registry};

#[derive(Debug, Serialize)]
pub struct RuleInfo {
    pub name: String,
    pub description: String,
}

/// List the candidate rules known to this binary (or loaded from config).
///
/// Printed in registry order, which is also the analyzer's tie-break order.
pub fn list_rules_command(config_path: Option<&str>, json: bool) -> Result<()> {
    let config = load_probe_config(config_path)?;
    let registry = resolve_registry(&config);

    let entries: Vec<RuleInfo> = registry
        .iter()
        .map(|rule| {
            let description = match rule.name() {
                "identity" => "Unknown value is the plain hex encoding of the bytes".to_string(),
                "byte-swap" => "Byte order reversed, then hex encoded".to_string(),
                "nibble-swap" => "High and low nibble of each byte exchanged".to_string(),
                "xor-mask" => "Every byte XORed with a constant mask".to_string(),
                "offset-cipher" => {
                    "Fixed header plus per-byte XOR mask and positional offset".to_string()
                }
                other => format!("Rule '{}'", other),
            };
            RuleInfo { name: rule.name().to_string(), description }
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("Rules: (none)");
        return Ok(());
    }

    println!("Rules:");
    for entry in entries {
        println!("- {}: {}", entry.name, entry.description);
    }

    Ok(())
}
