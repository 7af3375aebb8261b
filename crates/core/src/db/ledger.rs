use std::path::Path;

use rusqlite::{params, Connection};
use thiserror::Error;

use crate::db::{RunRecord, RunStatus};

/// Minimum schema version we know how to handle.
///
/// `0` means "no schema yet" (fresh DB).
const MIN_SUPPORTED_SCHEMA_VERSION: i32 = 0;

/// Latest schema version this crate knows about.
pub const CURRENT_SCHEMA_VERSION: i32 = 2;

/// Error type for run-ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Underlying SQLite error.
    #[error("SQLite error: {0}")]
    Sql(#[from] rusqlite::Error),

    /// The database was created with a newer schema version than we support.
    #[error(
        "Unsupported schema version {found}; supported range is {min_supported}..={max_supported}"
    )]
    UnsupportedSchemaVersion { found: i32, min_supported: i32, max_supported: i32 },
}

/// Convenience result type for ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// SQLite-backed run ledger.
///
/// This is a thin wrapper around `rusqlite::Connection` that is responsible
/// for:
/// - Opening/creating the ledger file.
/// - Applying schema migrations.
/// - Providing small, testable helpers for recording and listing runs.
#[derive(Debug)]
pub struct RunLedger {
    conn: Connection,
}

impl RunLedger {
    /// Open (or create) a run ledger at the given path and ensure the schema
    /// exists.
    pub fn open(path: &Path) -> LedgerResult<Self> {
        let conn = Connection::open(path)?;
        apply_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Expose a reference to the underlying connection for advanced callers.
    /// For most code, prefer the higher-level helpers.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Insert a run record and return its row id.
    pub fn insert_run(&self, record: &RunRecord) -> LedgerResult<i64> {
        self.conn.execute(
            r#"
            INSERT INTO runs (corpus, corpus_hash, rule, confidence, total, pass, fail, partial, skipped, status, started_at, finished_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)
            "#,
            params![
                record.corpus,
                record.corpus_hash,
                record.rule,
                record.confidence,
                record.total,
                record.pass,
                record.fail,
                record.partial,
                record.skipped,
                record.status.as_str(),
                record.started_at,
                record.finished_at
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// List runs (ordered by id), optionally filtered by corpus name.
    pub fn list_runs(&self, corpus: Option<&str>) -> LedgerResult<Vec<RunRecord>> {
        fn map_run(row: &rusqlite::Row<'_>) -> rusqlite::Result<RunRecord> {
            Ok(RunRecord {
                corpus: row.get(0)?,
                corpus_hash: row.get(1)?,
                rule: row.get(2)?,
                confidence: row.get(3)?,
                total: row.get(4)?,
                pass: row.get(5)?,
                fail: row.get(6)?,
                partial: row.get(7)?,
                skipped: row.get(8)?,
                status: {
                    let s: String = row.get(9)?;
                    RunStatus::parse(&s).ok_or(rusqlite::Error::InvalidQuery)?
                },
                started_at: row.get(10)?,
                finished_at: row.get(11)?,
            })
        }

        let mut stmt = if corpus.is_some() {
            self.conn.prepare(
                r#"
                SELECT corpus, corpus_hash, rule, confidence, total, pass, fail, partial, skipped, status, started_at, finished_at
                FROM runs
                WHERE corpus = ?1
                ORDER BY id
                "#,
            )?
        } else {
            self.conn.prepare(
                r#"
                SELECT corpus, corpus_hash, rule, confidence, total, pass, fail, partial, skipped, status, started_at, finished_at
                FROM runs
                ORDER BY id
                "#,
            )?
        };

        let rows = if let Some(name) = corpus {
            stmt.query_map(params![name], map_run)?
        } else {
            stmt.query_map([], map_run)?
        };

        let mut out = Vec::new();
        for row in rows {
            out.push(row?);
        }
        Ok(out)
    }
}

/// Apply schema migrations to bring the database to the latest version.
///
/// We use `PRAGMA user_version` as the schema version indicator.
///
/// Version map:
/// - 0: no schema
/// - 1: initial schema (runs)
/// - 2: add corpus_hash column
fn apply_migrations(conn: &Connection) -> LedgerResult<()> {
    let mut current_version = current_schema_version(conn)?;

    // Reject DBs created with a newer schema than we support.
    if current_version > CURRENT_SCHEMA_VERSION {
        return Err(LedgerError::UnsupportedSchemaVersion {
            found: current_version,
            min_supported: MIN_SUPPORTED_SCHEMA_VERSION,
            max_supported: CURRENT_SCHEMA_VERSION,
        });
    }

    if current_version == 0 {
        // Initial schema.
        conn.execute_batch(
            r#"
            BEGIN;
            CREATE TABLE IF NOT EXISTS runs (
                id          INTEGER PRIMARY KEY AUTOINCREMENT,
                corpus      TEXT NOT NULL,
                rule        TEXT,
                confidence  REAL NOT NULL,
                total       INTEGER NOT NULL,
                pass        INTEGER NOT NULL,
                fail        INTEGER NOT NULL,
                partial     INTEGER NOT NULL,
                skipped     INTEGER NOT NULL,
                status      TEXT NOT NULL,
                started_at  TEXT NOT NULL,
                finished_at TEXT NOT NULL
            );

            PRAGMA user_version = 1;
            COMMIT;
            "#,
        )?;
        current_version = 1;
    }

    if current_version < 2 {
        let has_column = column_exists(conn, "runs", "corpus_hash")?;
        if !has_column {
            conn.execute("ALTER TABLE runs ADD COLUMN corpus_hash TEXT;", [])?;
        }
        conn.execute("PRAGMA user_version = 2;", [])?;
    }

    Ok(())
}

/// Read the SQLite schema version from `PRAGMA user_version`.
fn current_schema_version(conn: &Connection) -> LedgerResult<i32> {
    let version: i32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    Ok(version)
}

fn column_exists(conn: &Connection, table: &str, column: &str) -> LedgerResult<bool> {
    let pragma = format!("PRAGMA table_info({table});");
    let mut stmt = conn.prepare(&pragma)?;
    let rows = stmt.query_map([], |row| row.get::<_, String>(1))?;
    for name in rows {
        if name? == column {
            return Ok(true);
        }
    }
    Ok(false)
}
