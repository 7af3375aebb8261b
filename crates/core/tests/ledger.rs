use probe_core::db::{LedgerError, RunLedger, RunRecord, RunStatus, CURRENT_SCHEMA_VERSION};

fn sample_record(corpus: &str, status: RunStatus) -> RunRecord {
    RunRecord {
        corpus: corpus.to_string(),
        corpus_hash: Some("cafe".to_string()),
        rule: Some("byte-swap".to_string()),
        confidence: 1.0,
        total: 3,
        pass: 3,
        fail: 0,
        partial: 0,
        skipped: 0,
        status,
        started_at: "2024-01-01T00:00:00Z".to_string(),
        finished_at: "2024-01-01T00:00:01Z".to_string(),
    }
}

#[test]
fn open_creates_schema_and_round_trips_records() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("runs.db");
    let ledger = RunLedger::open(&path).expect("open ledger");

    let id = ledger.insert_run(&sample_record("corpus-a", RunStatus::Succeeded)).expect("insert");
    assert!(id > 0);

    let runs = ledger.list_runs(None).expect("list");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0], sample_record("corpus-a", RunStatus::Succeeded));
}

#[test]
fn list_runs_filters_by_corpus() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ledger = RunLedger::open(&dir.path().join("runs.db")).expect("open ledger");

    ledger.insert_run(&sample_record("alpha", RunStatus::Succeeded)).expect("insert alpha");
    ledger.insert_run(&sample_record("beta", RunStatus::NoRule)).expect("insert beta");
    ledger.insert_run(&sample_record("alpha", RunStatus::Failed)).expect("insert alpha again");

    let alpha_runs = ledger.list_runs(Some("alpha")).expect("list alpha");
    assert_eq!(alpha_runs.len(), 2);
    assert!(alpha_runs.iter().all(|r| r.corpus == "alpha"));

    let beta_runs = ledger.list_runs(Some("beta")).expect("list beta");
    assert_eq!(beta_runs.len(), 1);
    assert_eq!(beta_runs[0].status, RunStatus::NoRule);
}

#[test]
fn reopening_an_existing_ledger_preserves_data() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("runs.db");

    {
        let ledger = RunLedger::open(&path).expect("first open");
        ledger.insert_run(&sample_record("persisted", RunStatus::Succeeded)).expect("insert");
    }

    let ledger = RunLedger::open(&path).expect("second open");
    let runs = ledger.list_runs(None).expect("list");
    assert_eq!(runs.len(), 1);
    assert_eq!(runs[0].corpus, "persisted");
}

#[test]
fn newer_schema_versions_are_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("runs.db");

    {
        let conn = rusqlite::Connection::open(&path).expect("raw open");
        conn.execute_batch(&format!("PRAGMA user_version = {};", CURRENT_SCHEMA_VERSION + 1))
            .expect("set version");
    }

    let err = RunLedger::open(&path).expect_err("must reject newer schema");
    match err {
        LedgerError::UnsupportedSchemaVersion { found, .. } => {
            assert_eq!(found, CURRENT_SCHEMA_VERSION + 1);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn nullable_columns_round_trip_as_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    let ledger = RunLedger::open(&dir.path().join("runs.db")).expect("open ledger");

    let mut record = sample_record("sparse", RunStatus::NoRule);
    record.corpus_hash = None;
    record.rule = None;
    ledger.insert_run(&record).expect("insert");

    let runs = ledger.list_runs(None).expect("list");
    assert_eq!(runs[0].corpus_hash, None);
    assert_eq!(runs[0].rule, None);
}
