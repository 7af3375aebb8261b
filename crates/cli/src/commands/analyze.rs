use std::path::Path;

use anyhow::Result;

use probe_core::analysis::analyze;
use probe_core::corpus::read_corpus_file;

use crate::commands::{load_probe_config, resolve_options, resolve_registry};

/// Run rule competition only and report the table. Exits non-zero when no
/// candidate clears the threshold, so scripts can gate on selection.
pub fn analyze_command(
    input: &str,
    config_path: Option<&str>,
    threshold: Option<f64>,
    min_samples: Option<usize>,
    json: bool,
) -> Result<()> {
    let entries = read_corpus_file(Path::new(input))?;

    let config = load_probe_config(config_path)?;
    let registry = resolve_registry(&config);
    let options = resolve_options(&config, threshold, min_samples);

    let result = analyze(&entries, &registry, &options)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("Rule competition ({} usable samples):", result.total);
        for score in &result.scores {
            println!(
                "  - {:<14} {:>3}/{} agreement {:.3}",
                score.rule, score.agreeing, score.total, score.agreement
            );
        }
        match result.rule_name() {
            Some(name) => {
                println!("Selected rule: {} (confidence {:.3})", name, result.confidence)
            }
            None => println!(
                "No rule selected: best agreement {:.3} below threshold {:.3}",
                result.confidence, result.threshold
            ),
        }
    }

    // Propagate the no-rule case as a hard error after the table is printed.
    result.selected()?;
    Ok(())
}
