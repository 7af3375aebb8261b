use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use probe_core::analysis::AnalysisOptions;
use probe_core::rules::{default_rule_registry, Rule, RuleRegistry};

/// Probe configuration file (YAML or JSON, chosen by extension).
///
/// Everything is optional: an empty config means the built-in registry and
/// default analysis options. A non-empty `rules` array replaces the default
/// registry wholesale, in the order given (the analyzer's tie-break order).
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ProbeConfig {
    #[serde(default)]
    pub threshold: Option<f64>,
    #[serde(default)]
    pub min_samples: Option<usize>,
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// Load a probe config from disk, or return defaults when no path is given.
pub fn load_probe_config(path: Option<&str>) -> Result<ProbeConfig> {
    let path = match path {
        Some(p) => Path::new(p).to_path_buf(),
        None => return Ok(ProbeConfig::default()),
    };

    let body = std::fs::read(&path)
        .with_context(|| format!("Failed to read probe config at {}", path.display()))?;
    let config: ProbeConfig = if path.extension().and_then(|e| e.to_str()) == Some("json") {
        serde_json::from_slice(&body).context("Failed to parse probe config JSON")?
    } else {
        serde_yaml::from_slice(&body).context("Failed to parse probe config YAML")?
    };
    Ok(config)
}

/// Build the rule registry the config describes.
pub fn resolve_registry(config: &ProbeConfig) -> RuleRegistry {
    if config.rules.is_empty() {
        default_rule_registry()
    } else {
        RuleRegistry::from_rules(config.rules.clone())
    }
}

/// Merge config-file values and CLI overrides into analysis options.
///
/// Precedence: CLI flag > config file > built-in default.
pub fn resolve_options(
    config: &ProbeConfig,
    threshold: Option<f64>,
    min_samples: Option<usize>,
) -> AnalysisOptions {
    let defaults = AnalysisOptions::default();
    AnalysisOptions {
        min_samples: min_samples.or(config.min_samples).unwrap_or(defaults.min_samples),
        confidence_threshold: threshold
            .or(config.threshold)
            .unwrap_or(defaults.confidence_threshold),
    }
}
