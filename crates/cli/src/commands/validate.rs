use anyhow::{anyhow, Result};

use probe_core::model::Entry;
use probe_core::validate::validate;

use crate::commands::{load_probe_config, resolve_registry};

/// Validate a single hex/unknown pair against one rule and print the verdict.
pub fn validate_command(
    hex: &str,
    unknown: &str,
    rule_name: &str,
    config_path: Option<&str>,
    json: bool,
) -> Result<()> {
    let config = load_probe_config(config_path)?;
    let registry = resolve_registry(&config);
    let rule = registry
        .get(rule_name)
        .ok_or_else(|| anyhow!("Rule '{}' not found (available: {:?})", rule_name, registry.names()))?;

    let entry = Entry::new("cli", hex, unknown);
    let verdict = validate(&entry, rule);

    if json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
        return Ok(());
    }

    println!("Outcome: {}", verdict.outcome.as_str());
    if let Some(mismatch) = &verdict.mismatch {
        println!("  {}", mismatch);
    }
    Ok(())
}
