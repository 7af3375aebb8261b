//! Pattern analysis: which candidate rule best explains a corpus of
//! hex/unknown sample pairs.
//!
//! Every candidate is scored independently over the full sample set (no
//! early exit on a perfect match) so the resulting confidence reflects true
//! competition among rules, and the outcome is deterministic for identical
//! input ordering.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::Entry;
use crate::normalize::{hex_to_bytes, normalize_hex, normalize_unknown};
use crate::rules::{Rule, RuleRegistry};

/// Default minimum number of usable samples required to run analysis.
pub const DEFAULT_MIN_SAMPLES: usize = 1;

/// Default agreement threshold a candidate must clear to be selected.
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.8;

/// Error type for analysis failures. Both variants abort the run before any
/// conversion begins: without a selected rule there is nothing to apply.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("Insufficient sample data: got {got} usable entries, need at least {min}")]
    InsufficientData { got: usize, min: usize },

    #[error(
        "No rule selected: best candidate agreement {confidence:.3} is below threshold {threshold:.3}"
    )]
    NoRuleSelected { confidence: f64, threshold: f64 },
}

/// Tunable knobs for the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Minimum usable sample count; below this, analysis refuses to run.
    #[serde(default = "default_min_samples")]
    pub min_samples: usize,
    /// A candidate's agreement must reach this fraction to be selected.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f64,
}

fn default_min_samples() -> usize {
    DEFAULT_MIN_SAMPLES
}

fn default_confidence_threshold() -> f64 {
    DEFAULT_CONFIDENCE_THRESHOLD
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            min_samples: DEFAULT_MIN_SAMPLES,
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
        }
    }
}

/// Agreement score for one candidate over the sample set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuleScore {
    pub rule: String,
    pub agreeing: usize,
    pub total: usize,
    pub agreement: f64,
}

/// Outcome of analyzing a corpus against the rule registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// The winning rule, or `None` if no candidate cleared the threshold.
    pub rule: Option<Rule>,
    /// Agreement fraction of the best candidate, in `[0, 1]`.
    pub confidence: f64,
    /// Samples the best candidate explained.
    pub agreeing: usize,
    /// Usable samples considered.
    pub total: usize,
    /// Threshold the selection was judged against.
    pub threshold: f64,
    /// Full competition table, in registry declaration order.
    pub scores: Vec<RuleScore>,
}

impl AnalysisResult {
    /// The selected rule, or `NoRuleSelected` when analysis ended below the
    /// threshold. Callers that need a rule to proceed go through this so the
    /// "no reliable rule found" case cannot be silently ignored.
    pub fn selected(&self) -> Result<&Rule, AnalysisError> {
        self.rule.as_ref().ok_or(AnalysisError::NoRuleSelected {
            confidence: self.confidence,
            threshold: self.threshold,
        })
    }

    /// Name of the selected rule, for reports and run records.
    pub fn rule_name(&self) -> Option<&'static str> {
        self.rule.as_ref().map(Rule::name)
    }
}

/// Analyze a corpus of entries against every candidate in the registry.
///
/// Entries whose hex does not normalize are excluded from the sample set
/// (they can never agree with any rule and are reported SKIPPED downstream);
/// `min_samples` is judged on the remainder. Ties in agreement break by
/// registry declaration order, earlier wins.
pub fn analyze(
    entries: &[Entry],
    registry: &RuleRegistry,
    options: &AnalysisOptions,
) -> Result<AnalysisResult, AnalysisError> {
    // Decode once up front; every rule scores the same prepared samples.
    let samples: Vec<(Vec<u8>, String)> = entries
        .iter()
        .filter(|e| !e.hex.trim().is_empty() && !e.unknown.trim().is_empty())
        .filter_map(|e| {
            let hex = normalize_hex(&e.hex).ok()?;
            let bytes = hex_to_bytes(&hex).ok()?;
            Some((bytes, normalize_unknown(&e.unknown)))
        })
        .collect();

    if samples.len() < options.min_samples.max(1) {
        return Err(AnalysisError::InsufficientData {
            got: samples.len(),
            min: options.min_samples.max(1),
        });
    }

    let total = samples.len();
    let mut scores = Vec::with_capacity(registry.len());
    let mut best: Option<(usize, f64, Rule)> = None;

    for rule in registry.iter() {
        let agreeing =
            samples.iter().filter(|(bytes, unknown)| rule.encode(bytes) == *unknown).count();
        let agreement = agreeing as f64 / total as f64;
        scores.push(RuleScore {
            rule: rule.name().to_string(),
            agreeing,
            total,
            agreement,
        });

        // Strict comparison keeps the earliest rule on ties.
        let is_better = match &best {
            Some((best_agreeing, _, _)) => agreeing > *best_agreeing,
            None => true,
        };
        if is_better {
            best = Some((agreeing, agreement, rule.clone()));
        }
    }

    let (agreeing, confidence, winner) = match best {
        Some(b) => b,
        None => {
            // Empty registry: nothing can be selected.
            return Ok(AnalysisResult {
                rule: None,
                confidence: 0.0,
                agreeing: 0,
                total,
                threshold: options.confidence_threshold,
                scores,
            });
        }
    };

    let rule = if confidence >= options.confidence_threshold { Some(winner) } else { None };

    Ok(AnalysisResult {
        rule,
        confidence,
        agreeing,
        total,
        threshold: options.confidence_threshold,
        scores,
    })
}
