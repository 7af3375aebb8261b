//! Batch pipeline: analyze once, validate every entry, build the report.
//!
//! Coordinator tying the stages together so frontends only hand in entries.
//! Per-entry failures are isolated into verdicts; only the absence of a
//! usable rule aborts the run.

use chrono::Utc;

use crate::analysis::{analyze, AnalysisError, AnalysisOptions};
use crate::db::{RunLedger, RunRecord, RunStatus};
use crate::model::Verdict;
use crate::report::{build_report, Report};
use crate::rules::RuleRegistry;
use crate::validate::validate;
use crate::Entry;

/// Coordinator that runs the full validation pipeline over a corpus.
pub struct ValidationRunner<'a> {
    pub registry: &'a RuleRegistry,
    pub options: AnalysisOptions,
    /// Optional run ledger; persistence is best-effort and never fails a run.
    pub ledger: Option<&'a RunLedger>,
}

impl<'a> ValidationRunner<'a> {
    pub fn new(registry: &'a RuleRegistry, options: AnalysisOptions) -> Self {
        Self { registry, options, ledger: None }
    }

    /// Builder-style helper to attach a ledger for run bookkeeping.
    pub fn with_ledger(mut self, ledger: &'a RunLedger) -> Self {
        self.ledger = Some(ledger);
        self
    }

    /// Run analysis and per-entry validation, producing the full report.
    ///
    /// `corpus_name` and `corpus_hash` only feed the ledger record.
    pub fn run(
        &self,
        corpus_name: &str,
        corpus_hash: Option<&str>,
        entries: &[Entry],
    ) -> Result<Report, AnalysisError> {
        let started_at = Utc::now().to_rfc3339();

        let analysis = match analyze(entries, self.registry, &self.options) {
            Ok(result) => result,
            Err(err) => {
                self.record(corpus_name, corpus_hash, None, 0.0, None, &started_at);
                return Err(err);
            }
        };

        let rule = match analysis.selected() {
            Ok(rule) => rule.clone(),
            Err(err) => {
                self.record(
                    corpus_name,
                    corpus_hash,
                    None,
                    analysis.confidence,
                    Some(RunStatus::NoRule),
                    &started_at,
                );
                return Err(err);
            }
        };

        let verdicts: Vec<Verdict> = entries.iter().map(|e| validate(e, &rule)).collect();
        let report = build_report(verdicts, analysis);

        if let Some(ledger) = self.ledger {
            let record = RunRecord {
                corpus: corpus_name.to_string(),
                corpus_hash: corpus_hash.map(|h| h.to_string()),
                rule: report.analysis.rule_name().map(|n| n.to_string()),
                confidence: report.analysis.confidence,
                total: report.summary.total as i64,
                pass: report.summary.pass as i64,
                fail: report.summary.fail as i64,
                partial: report.summary.partial as i64,
                skipped: report.summary.skipped as i64,
                status: RunStatus::Succeeded,
                started_at,
                finished_at: Utc::now().to_rfc3339(),
            };
            // Best-effort persistence; a ledger failure must not fail the run.
            let _ = ledger.insert_run(&record);
        }

        Ok(report)
    }

    /// Best-effort record of an aborted run.
    fn record(
        &self,
        corpus_name: &str,
        corpus_hash: Option<&str>,
        rule: Option<String>,
        confidence: f64,
        status: Option<RunStatus>,
        started_at: &str,
    ) {
        if let Some(ledger) = self.ledger {
            let record = RunRecord {
                corpus: corpus_name.to_string(),
                corpus_hash: corpus_hash.map(|h| h.to_string()),
                rule,
                confidence,
                total: 0,
                pass: 0,
                fail: 0,
                partial: 0,
                skipped: 0,
                status: status.unwrap_or(RunStatus::Failed),
                started_at: started_at.to_string(),
                finished_at: Utc::now().to_rfc3339(),
            };
            let _ = ledger.insert_run(&record);
        }
    }
}
