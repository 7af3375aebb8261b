use anyhow::{anyhow, Context, Result};

use probe_core::db::{OutputLayout, RunLedger};

/// List recorded validation runs from an output directory's ledger.
pub fn list_runs_command(output_dir: &str, corpus: Option<&str>, json: bool) -> Result<()> {
    let layout = OutputLayout::new(output_dir);
    if !layout.ledger_path.is_file() {
        return Err(anyhow!("No run ledger found at {}", layout.ledger_path.display()));
    }

    let ledger = RunLedger::open(&layout.ledger_path)
        .with_context(|| format!("Failed to open run ledger at {}", layout.ledger_path.display()))?;

    let runs = ledger.list_runs(corpus).context("Failed to list runs")?;

    if json {
        println!("{}", serde_json::to_string_pretty(&runs)?);
        return Ok(());
    }

    println!("Runs ({}):", runs.len());
    if runs.is_empty() {
        println!("  (none)");
        return Ok(());
    }

    for run in runs {
        let rule_display = run.rule.as_deref().unwrap_or("-");
        println!(
            "  - {} [{}] rule={} confidence={:.3} pass={}/{} at {}",
            run.corpus,
            run.status.as_str(),
            rule_display,
            run.confidence,
            run.pass,
            run.total,
            run.finished_at
        );
    }

    Ok(())
}
