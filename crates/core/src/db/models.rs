use serde::{Deserialize, Serialize};

/// Overall status of a recorded validation run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RunStatus {
    /// Analysis selected a rule and every entry received a verdict.
    Succeeded,
    /// Analysis finished below the confidence threshold; no verdicts exist.
    NoRule,
    /// The run aborted before producing a report.
    Failed,
}

impl RunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunStatus::Succeeded => "succeeded",
            RunStatus::NoRule => "no-rule",
            RunStatus::Failed => "failed",
        }
    }

    /// Decode a status string stored in SQLite.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "succeeded" => Some(RunStatus::Succeeded),
            "no-rule" => Some(RunStatus::NoRule),
            "failed" => Some(RunStatus::Failed),
            _ => None,
        }
    }
}

/// Record describing one validation run, for bookkeeping.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunRecord {
    /// Corpus name (typically the input file stem).
    pub corpus: String,
    /// SHA-256 of the corpus file, when it was computed.
    pub corpus_hash: Option<String>,
    /// Name of the rule analysis selected, if any.
    pub rule: Option<String>,
    /// Best-candidate agreement at selection time.
    pub confidence: f64,
    pub total: i64,
    pub pass: i64,
    pub fail: i64,
    pub partial: i64,
    pub skipped: i64,
    pub status: RunStatus,
    pub started_at: String,
    pub finished_at: String,
}
