use probe_core::analysis::{analyze, AnalysisError, AnalysisOptions};
use probe_core::rules::default_rule_registry;
use probe_core::Entry;

fn byte_swap_corpus() -> Vec<Entry> {
    vec![
        Entry::new("a", "ff00", "00ff"),
        Entry::new("b", "1234", "3412"),
        Entry::new("c", "deadbeef", "efbeadde"),
    ]
}

#[test]
fn selects_byte_swap_with_full_confidence() {
    let registry = default_rule_registry();
    let result = analyze(&byte_swap_corpus(), &registry, &AnalysisOptions::default())
        .expect("analysis");
    assert_eq!(result.rule_name(), Some("byte-swap"));
    assert_eq!(result.confidence, 1.0);
    assert_eq!(result.agreeing, 3);
    assert_eq!(result.total, 3);
}

#[test]
fn divergent_entry_drops_confidence_to_two_thirds() {
    let mut entries = byte_swap_corpus();
    entries[2] = Entry::new("c", "ff00", "0f0f");

    let registry = default_rule_registry();
    // Threshold below 2/3 so the winner is still selected.
    let options = AnalysisOptions { min_samples: 1, confidence_threshold: 0.5 };
    let result = analyze(&entries, &registry, &options).expect("analysis");
    assert_eq!(result.rule_name(), Some("byte-swap"));
    assert_eq!(result.agreeing, 2);
    assert_eq!(result.total, 3);
    assert!((result.confidence - 2.0 / 3.0).abs() < 1e-9);
}

#[test]
fn below_threshold_returns_no_rule() {
    let mut entries = byte_swap_corpus();
    entries[2] = Entry::new("c", "ff00", "0f0f");

    let registry = default_rule_registry();
    let result = analyze(&entries, &registry, &AnalysisOptions::default()).expect("analysis");
    assert!(result.rule.is_none());
    assert!((result.confidence - 2.0 / 3.0).abs() < 1e-9);

    let err = result.selected().expect_err("selection must fail below threshold");
    assert!(matches!(err, AnalysisError::NoRuleSelected { .. }));
}

#[test]
fn every_candidate_is_scored_independently() {
    let registry = default_rule_registry();
    let result = analyze(&byte_swap_corpus(), &registry, &AnalysisOptions::default())
        .expect("analysis");
    assert_eq!(result.scores.len(), registry.len());
    // Identity cannot explain a reversed pair.
    let identity = result.scores.iter().find(|s| s.rule == "identity").expect("identity score");
    assert_eq!(identity.agreeing, 0);
}

#[test]
fn ties_break_by_registry_declaration_order() {
    // Single palindromic bytes: identity, byte-swap, and nibble-swap all
    // explain these pairs perfectly; the earliest registered rule must win.
    let entries = vec![Entry::new("a", "aa", "aa"), Entry::new("b", "bb", "bb")];
    let registry = default_rule_registry();
    let result = analyze(&entries, &registry, &AnalysisOptions::default()).expect("analysis");
    assert_eq!(result.rule_name(), Some("identity"));
    assert_eq!(result.confidence, 1.0);
}

#[test]
fn analysis_is_deterministic_for_identical_input() {
    let registry = default_rule_registry();
    let options = AnalysisOptions::default();
    let first = analyze(&byte_swap_corpus(), &registry, &options).expect("first run");
    let second = analyze(&byte_swap_corpus(), &registry, &options).expect("second run");
    assert_eq!(first, second);
}

#[test]
fn adding_agreeing_samples_never_decreases_confidence() {
    let mut entries = byte_swap_corpus();
    entries[2] = Entry::new("c", "ff00", "0f0f");
    let registry = default_rule_registry();
    let options = AnalysisOptions { min_samples: 1, confidence_threshold: 0.0 };

    let before = analyze(&entries, &registry, &options).expect("before").confidence;
    entries.push(Entry::new("d", "0102", "0201"));
    let after = analyze(&entries, &registry, &options).expect("after").confidence;
    assert!(after >= before, "confidence dropped from {before} to {after}");
}

#[test]
fn empty_corpus_is_insufficient_data() {
    let registry = default_rule_registry();
    let err = analyze(&[], &registry, &AnalysisOptions::default()).expect_err("empty corpus");
    assert_eq!(err, AnalysisError::InsufficientData { got: 0, min: 1 });
}

#[test]
fn min_samples_is_judged_on_usable_entries() {
    // The malformed entry cannot feed the sample set.
    let entries = vec![Entry::new("a", "abc", "cab"), Entry::new("b", "ff00", "00ff")];
    let registry = default_rule_registry();
    let options = AnalysisOptions { min_samples: 2, confidence_threshold: 0.8 };
    let err = analyze(&entries, &registry, &options).expect_err("too few usable samples");
    assert_eq!(err, AnalysisError::InsufficientData { got: 1, min: 2 });
}

#[test]
fn malformed_entries_do_not_poison_the_denominator() {
    let mut entries = byte_swap_corpus();
    entries.push(Entry::new("d", "abc", "whatever"));
    let registry = default_rule_registry();
    let result = analyze(&entries, &registry, &AnalysisOptions::default()).expect("analysis");
    assert_eq!(result.total, 3);
    assert_eq!(result.confidence, 1.0);
}
