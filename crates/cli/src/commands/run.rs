use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use probe_core::convert::hex_to_ascii;
use probe_core::corpus::read_corpus_file;
use probe_core::db::{OutputLayout, RunLedger};
use probe_core::pipeline::ValidationRunner;

use crate::commands::{load_probe_config, resolve_options, resolve_registry};
use crate::{infer_corpus_name, sha256_file};

/// Run the full pipeline: load the corpus, infer the rule, validate every
/// entry, write report and summary files, and record the run in the ledger.
pub fn run_command(
    input: &str,
    output_dir: &str,
    config_path: Option<&str>,
    threshold: Option<f64>,
    min_samples: Option<usize>,
    skip_hash: bool,
    json: bool,
) -> Result<()> {
    let input_path = Path::new(input);
    let entries = read_corpus_file(input_path)?;

    let config = load_probe_config(config_path)?;
    let registry = resolve_registry(&config);
    let options = resolve_options(&config, threshold, min_samples);

    let layout = OutputLayout::new(output_dir);
    fs::create_dir_all(&layout.root)
        .with_context(|| format!("Failed to create output directory {}", layout.root.display()))?;

    let ledger = RunLedger::open(&layout.ledger_path)
        .with_context(|| format!("Failed to open run ledger at {}", layout.ledger_path.display()))?;

    let corpus_name = infer_corpus_name(input_path);
    let corpus_hash = if skip_hash { None } else { Some(sha256_file(input_path)?) };

    let runner = ValidationRunner::new(&registry, options).with_ledger(&ledger);
    let report = runner.run(&corpus_name, corpus_hash.as_deref(), &entries)?;

    // Auxiliary statistic carried over from the original tool: how many
    // entries' hex side decodes to valid JSON text.
    let ascii_valid = entries.iter().filter(|e| hex_to_ascii(&e.hex).is_ok()).count();

    let timestamp = Utc::now().format("%Y%m%d_%H%M%S").to_string();
    let report_path = layout.report_path(&timestamp);
    fs::write(&report_path, serde_json::to_string_pretty(&report)?)
        .with_context(|| format!("Failed to write report at {}", report_path.display()))?;

    let success_rate = if report.summary.total > 0 {
        format!("{:.2}%", report.summary.pass as f64 / report.summary.total as f64 * 100.0)
    } else {
        "0.00%".to_string()
    };
    let summary = serde_json::json!({
        "corpus": corpus_name,
        "input_file": input_path.display().to_string(),
        "corpus_hash": corpus_hash,
        "timestamp": timestamp,
        "rule": report.analysis.rule_name(),
        "confidence": report.analysis.confidence,
        "total": report.summary.total,
        "pass": report.summary.pass,
        "fail": report.summary.fail,
        "partial": report.summary.partial,
        "skipped": report.summary.skipped,
        "ascii_valid": ascii_valid,
        "success_rate": success_rate,
    });
    let summary_path = layout.summary_path(&timestamp);
    fs::write(&summary_path, serde_json::to_string_pretty(&summary)?)
        .with_context(|| format!("Failed to write summary at {}", summary_path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Validated corpus: {}", corpus_name);
    println!(
        "  Rule: {} (confidence {:.3})",
        report.analysis.rule_name().unwrap_or("-"),
        report.analysis.confidence
    );
    println!(
        "  Verdicts: {} pass, {} fail, {} partial, {} skipped ({} total)",
        report.summary.pass,
        report.summary.fail,
        report.summary.partial,
        report.summary.skipped,
        report.summary.total
    );
    println!("  Ascii-valid entries: {}", ascii_valid);
    println!("  Success rate: {}", success_rate);
    println!("  Report: {}", report_path.display());
    println!("  Summary: {}", summary_path.display());

    if !report.failures.is_empty() {
        println!("Entries needing attention:");
        for failure in &report.failures {
            match &failure.mismatch {
                Some(desc) => {
                    println!("  - {} [{}] {}", failure.entry_id, failure.outcome.as_str(), desc)
                }
                None => println!("  - {} [{}]", failure.entry_id, failure.outcome.as_str()),
            }
        }
    }

    Ok(())
}
