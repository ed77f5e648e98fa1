//! Root-path resolution.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::errors::{Result, ZkcError};

/// Resolve `root` to an absolute, canonical directory path.
///
/// The root must exist and be a directory; anything else is a setup failure
/// (`ZKC-1001`) — without a valid root no meaningful work can proceed.
pub fn resolve_root(root: &Path) -> Result<PathBuf> {
    let canonical = fs::canonicalize(root).map_err(|e| ZkcError::InvalidRoot {
        path: root.to_path_buf(),
        details: e.to_string(),
    })?;

    let meta = fs::metadata(&canonical).map_err(|e| ZkcError::InvalidRoot {
        path: canonical.clone(),
        details: e.to_string(),
    })?;
    if !meta.is_dir() {
        return Err(ZkcError::InvalidRoot {
            path: canonical,
            details: "not a directory".to_string(),
        });
    }

    Ok(canonical)
}

/// Default root when none is supplied on the command line: the parent of the
/// directory containing the running executable, i.e. the workspace root
/// relative to where the tool is installed (`<workspace>/bin/zkc` cleans
/// `<workspace>`). Falls back to the current working directory when the
/// executable path cannot be determined.
#[must_use]
pub fn default_workspace_root() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().and_then(Path::parent).map(Path::to_path_buf))
        .or_else(|| env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("."))
}
