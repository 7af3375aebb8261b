use std::path::{Path, PathBuf};

/// Logical layout of an output directory.
///
/// This is derived from a chosen output root. It does *not* perform any IO
/// itself; the CLI is responsible for creating directories and files based
/// on this layout.
#[derive(Debug, Clone)]
pub struct OutputLayout {
    /// Output root directory.
    pub root: PathBuf,
    /// Path to the run-ledger database file.
    pub ledger_path: PathBuf,
}

impl OutputLayout {
    /// Compute the default layout for outputs rooted at `root`.
    pub fn new(root: impl AsRef<Path>) -> Self {
        let root = root.as_ref().to_path_buf();
        let ledger_path = root.join("runs.db");
        Self { root, ledger_path }
    }

    /// Path for the detailed per-entry report of a run.
    pub fn report_path(&self, timestamp: &str) -> PathBuf {
        self.root.join(format!("report_{timestamp}.json"))
    }

    /// Path for the run summary (counts + statistics).
    pub fn summary_path(&self, timestamp: &str) -> PathBuf {
        self.root.join(format!("summary_{timestamp}.json"))
    }
}
