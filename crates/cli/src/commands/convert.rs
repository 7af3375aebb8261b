use anyhow::{anyhow, Result};

use probe_core::convert::convert;
use probe_core::model::{Direction, Entry};

use crate::commands::{load_probe_config, resolve_registry};

/// Parse a CLI direction string.
pub fn parse_direction(direction: &str) -> Result<Direction> {
    match direction {
        "hex-to-unknown" => Ok(Direction::HexToUnknown),
        "unknown-to-hex" => Ok(Direction::UnknownToHex),
        other => Err(anyhow!(
            "Invalid direction '{}'. Allowed: hex-to-unknown, unknown-to-hex",
            other
        )),
    }
}

/// One-off conversion of a single value using a registry rule.
pub fn convert_command(
    value: &str,
    direction: &str,
    rule_name: &str,
    config_path: Option<&str>,
) -> Result<()> {
    let direction = parse_direction(direction)?;

    let config = load_probe_config(config_path)?;
    let registry = resolve_registry(&config);
    let rule = registry
        .get(rule_name)
        .ok_or_else(|| anyhow!("Rule '{}' not found (available: {:?})", rule_name, registry.names()))?;

    let entry = match direction {
        Direction::HexToUnknown => Entry::new("cli", value, ""),
        Direction::UnknownToHex => Entry::new("cli", "", value),
    };

    let result = convert(&entry, direction, rule)?;
    println!("{}", result.value);
    Ok(())
}
