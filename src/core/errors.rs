//! ZKC-prefixed error types with structured error codes.

#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Shared `Result` alias for the project.
pub type Result<T> = std::result::Result<T, ZkcError>;

/// Top-level error type for the key cleaner.
///
/// Two tiers: `DeletionFailed` is caught per file and recorded, never
/// propagated past the executor. Everything else is a setup failure that
/// aborts the run.
#[derive(Debug, Error)]
pub enum ZkcError {
    #[error("[ZKC-1001] invalid root directory {path}: {details}")]
    InvalidRoot { path: PathBuf, details: String },

    #[error("[ZKC-1002] target filename set is empty")]
    EmptyTargetSet,

    #[error("[ZKC-2001] failed to delete {path}: {source}")]
    DeletionFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[ZKC-2002] IO failure at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("[ZKC-2101] serialization failure in {context}: {details}")]
    Serialization {
        context: &'static str,
        details: String,
    },
}

impl ZkcError {
    /// Stable machine-parseable error code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidRoot { .. } => "ZKC-1001",
            Self::EmptyTargetSet => "ZKC-1002",
            Self::DeletionFailed { .. } => "ZKC-2001",
            Self::Io { .. } => "ZKC-2002",
            Self::Serialization { .. } => "ZKC-2101",
        }
    }

    /// Whether retrying might resolve the failure.
    ///
    /// The cleaner never retries within a run; this classifies whether a
    /// subsequent invocation could plausibly succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::DeletionFailed { .. } | Self::Io { .. })
    }

    /// Convenience constructor for IO errors with a known path.
    #[must_use]
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Convenience constructor for a per-file deletion failure.
    #[must_use]
    pub fn deletion(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::DeletionFailed {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

impl From<serde_json::Error> for ZkcError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization {
            context: "serde_json",
            details: value.to_string(),
        }
    }
}
