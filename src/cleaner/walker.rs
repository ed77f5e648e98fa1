//! Candidate discovery: single-threaded recursive walk over the root.
//!
//! The walker is the "eyes" of the cleaner: it enumerates every file under
//! the root and keeps the ones whose base name is in the target set. The
//! traversal order follows `read_dir` and carries no meaning.
//!
//! Safety invariants:
//! - Symlinks are never followed (a link named like a target is not a match)
//! - Unreadable or vanished subdirectories are skipped, not fatal
//! - Only root-level failures propagate

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::core::config::TargetSet;
use crate::core::errors::{Result, ZkcError};

/// Enumerate files under `root` whose base name is in `targets`.
///
/// `root` is expected to be an absolute directory path (see
/// [`crate::core::paths::resolve_root`]); the returned candidate paths are
/// then absolute too. Subdirectories that cannot be read (permission denied,
/// removed mid-walk) are skipped with a diagnostic on stderr; a failure to
/// read the root itself is a setup error.
pub fn find_key_files(root: &Path, targets: &TargetSet) -> Result<Vec<PathBuf>> {
    let mut candidates = Vec::new();
    let mut pending: Vec<PathBuf> = vec![root.to_path_buf()];

    while let Some(dir) = pending.pop() {
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) if dir == root => return Err(ZkcError::io(&dir, err)),
            Err(err) if err.kind() == ErrorKind::NotFound => continue,
            Err(err) => {
                eprintln!("[ZKC-CLEANER] skipping unreadable {}: {err}", dir.display());
                continue;
            }
        };

        for entry_result in entries {
            let Ok(entry) = entry_result else {
                continue;
            };
            let Ok(ft) = entry.file_type() else {
                continue;
            };

            // Never follow symlinks: a link pointing at (or named like) a key
            // file is not the artifact itself.
            if ft.is_symlink() {
                continue;
            }

            if ft.is_dir() {
                pending.push(entry.path());
            } else if targets.matches(&entry.file_name()) {
                candidates.push(entry.path());
            }
        }
    }

    Ok(candidates)
}
