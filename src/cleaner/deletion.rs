//! Deletion executor: per-file removal with partial-failure isolation.
//!
//! Pipeline: candidate paths -> attempt `remove_file` on each -> record the
//! outcome -> assemble report. One bad file must never stop the rest of the
//! cleanup: a failed deletion is reported on stderr, captured as a
//! [`DeletionFailure`] record, and the loop moves on. No retries.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::core::errors::ZkcError;

/// Configuration for the deletion executor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DeletionConfig {
    /// Report matches without removing anything.
    pub dry_run: bool,
}

/// A single deletion failure record.
#[derive(Debug, Clone, Serialize)]
pub struct DeletionFailure {
    /// Path the deletion was attempted on.
    pub path: PathBuf,
    /// Full coded error message.
    pub error: String,
    /// Stable machine-parseable code (`ZKC-2001`).
    pub error_code: String,
    /// Whether a later invocation could plausibly succeed.
    pub recoverable: bool,
}

/// Summary of one cleaner invocation.
#[derive(Debug, Clone)]
pub struct CleanReport {
    /// Absolute paths successfully deleted, in deletion order. In dry-run
    /// mode: the paths that would have been deleted.
    pub deleted: Vec<PathBuf>,
    /// Per-file failures encountered along the way.
    pub failures: Vec<DeletionFailure>,
    /// Whether this was a dry run.
    pub dry_run: bool,
    /// Wall-clock time for the deletion pass.
    pub duration: Duration,
    /// When the pass finished (UTC).
    pub completed_at: DateTime<Utc>,
}

impl CleanReport {
    /// Render the human-readable summary.
    ///
    /// Matches the documented output contract exactly: either
    /// `No key files found to delete.` or a `Deleted key files:` header
    /// followed by one two-space-indented line per path. Dry runs use a
    /// distinct header so the output cannot be mistaken for real deletions.
    #[must_use]
    pub fn human_summary(&self) -> String {
        if self.deleted.is_empty() {
            return "No key files found to delete.".to_string();
        }

        let header = if self.dry_run {
            "Key files that would be deleted:"
        } else {
            "Deleted key files:"
        };
        let mut out = String::from(header);
        for path in &self.deleted {
            out.push_str("\n  ");
            out.push_str(&path.display().to_string());
        }
        out
    }
}

/// The deletion executor: takes candidate paths and removes them one by one.
pub struct DeletionExecutor {
    config: DeletionConfig,
}

impl DeletionExecutor {
    /// Create a new executor with the given config.
    #[must_use]
    pub fn new(config: DeletionConfig) -> Self {
        Self { config }
    }

    /// Attempt to delete every candidate, in the order given.
    ///
    /// A failure (permission denied, file vanished since the walk, other IO
    /// error) is written to stderr with its path and underlying message,
    /// recorded in the report, and does not interrupt the remaining
    /// candidates.
    pub fn execute(&self, candidates: Vec<PathBuf>) -> CleanReport {
        let start = Instant::now();
        let mut deleted = Vec::with_capacity(candidates.len());
        let mut failures = Vec::new();

        for path in candidates {
            if self.config.dry_run {
                deleted.push(path);
                continue;
            }

            match fs::remove_file(&path) {
                Ok(()) => deleted.push(path),
                Err(err) => {
                    let error = ZkcError::deletion(&path, err);
                    eprintln!("[ZKC-CLEANER] {error}");
                    failures.push(DeletionFailure {
                        path,
                        error: error.to_string(),
                        error_code: error.code().to_string(),
                        recoverable: error.is_retryable(),
                    });
                }
            }
        }

        CleanReport {
            deleted,
            failures,
            dry_run: self.config.dry_run,
            duration: start.elapsed(),
            completed_at: Utc::now(),
        }
    }
}
