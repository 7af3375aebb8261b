//! Report assembly: pure aggregation of per-entry verdicts and the analysis
//! outcome. No conversion logic lives here.

use serde::{Deserialize, Serialize};

use crate::analysis::AnalysisResult;
use crate::model::{Outcome, Verdict};

/// Aggregate counts per outcome.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub total: usize,
    pub pass: usize,
    pub fail: usize,
    pub partial: usize,
    pub skipped: usize,
}

impl ReportSummary {
    pub fn count(&mut self, outcome: Outcome) {
        self.total += 1;
        match outcome {
            Outcome::Pass => self.pass += 1,
            Outcome::Fail => self.fail += 1,
            Outcome::Partial => self.partial += 1,
            Outcome::Skipped => self.skipped += 1,
        }
    }
}

/// One failing (or skipped) entry with its mismatch description, pulled out
/// of the verdict list for quick scanning.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureDetail {
    pub entry_id: String,
    pub outcome: Outcome,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mismatch: Option<String>,
}

/// Full validation report for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// The analysis outcome the verdicts were produced under, for
    /// traceability (rule name, confidence, competition table).
    pub analysis: AnalysisResult,
    pub summary: ReportSummary,
    /// Entries that did not PASS, in verdict order.
    pub failures: Vec<FailureDetail>,
    /// Every verdict, in entry order.
    pub verdicts: Vec<Verdict>,
}

/// Build a report from the collected verdicts and the analysis they ran
/// under.
pub fn build_report(verdicts: Vec<Verdict>, analysis: AnalysisResult) -> Report {
    let mut summary = ReportSummary::default();
    let mut failures = Vec::new();

    for verdict in &verdicts {
        summary.count(verdict.outcome);
        if verdict.outcome != Outcome::Pass {
            failures.push(FailureDetail {
                entry_id: verdict.entry_id.clone(),
                outcome: verdict.outcome,
                mismatch: verdict.mismatch.clone(),
            });
        }
    }

    Report { analysis, summary, failures, verdicts }
}
