use hex_probe::commands::{
    analyze_command, convert_command, list_runs_command, load_probe_config, parse_direction,
    run_command,
};
use tempfile::tempdir;

#[test]
fn run_errors_when_input_missing() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("missing.json").to_string_lossy().to_string();
    let output = temp.path().join("out").to_string_lossy().to_string();
    let err = run_command(&input, &output, None, None, None, true, false).unwrap_err();
    assert!(err.to_string().contains("Failed to read corpus file"), "unexpected error: {err}");
}

#[test]
fn run_errors_when_no_rule_clears_threshold() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("corpus.json");
    std::fs::write(
        &input,
        r#"{
            "a": { "hex": "ff00", "unknown": "00ff" },
            "b": { "hex": "1234", "unknown": "9999" },
            "c": { "hex": "abcd", "unknown": "9999" }
        }"#,
    )
    .unwrap();
    let output = temp.path().join("out").to_string_lossy().to_string();

    let err = run_command(
        &input.to_string_lossy(),
        &output,
        None,
        None,
        None,
        true,
        false,
    )
    .unwrap_err();
    assert!(err.to_string().contains("No rule selected"), "unexpected error: {err}");
}

#[test]
fn analyze_errors_on_empty_corpus() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("corpus.json");
    std::fs::write(&input, "{}").unwrap();

    let err = analyze_command(&input.to_string_lossy(), None, None, None, false).unwrap_err();
    assert!(err.to_string().contains("Insufficient sample data"), "unexpected error: {err}");
}

#[test]
fn convert_rejects_unknown_rule_name() {
    let err = convert_command("ff00", "hex-to-unknown", "no-such-rule", None).unwrap_err();
    assert!(err.to_string().contains("Rule 'no-such-rule' not found"), "unexpected error: {err}");
}

#[test]
fn convert_rejects_invalid_direction() {
    let err = convert_command("ff00", "sideways", "byte-swap", None).unwrap_err();
    assert!(err.to_string().contains("Invalid direction 'sideways'"), "unexpected error: {err}");
}

#[test]
fn parse_direction_lists_allowed_values() {
    let err = parse_direction("up").unwrap_err();
    assert!(err.to_string().contains("hex-to-unknown, unknown-to-hex"));
}

#[test]
fn runs_errors_when_ledger_missing() {
    let temp = tempdir().unwrap();
    let output = temp.path().to_string_lossy().to_string();
    let err = list_runs_command(&output, None, false).unwrap_err();
    assert!(err.to_string().contains("No run ledger found"), "unexpected error: {err}");
}

#[test]
fn config_load_errors_when_file_missing() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("probe.yaml").to_string_lossy().to_string();
    let err = load_probe_config(Some(&path)).unwrap_err();
    assert!(err.to_string().contains("Failed to read probe config"), "unexpected error: {err}");
}

#[test]
fn config_load_errors_on_corrupt_yaml() {
    let temp = tempdir().unwrap();
    let path = temp.path().join("probe.yaml");
    std::fs::write(&path, "rules: [not-a-rule").unwrap();
    let err = load_probe_config(Some(&path.to_string_lossy())).unwrap_err();
    assert!(err.to_string().contains("Failed to parse probe config YAML"), "unexpected error: {err}");
}
