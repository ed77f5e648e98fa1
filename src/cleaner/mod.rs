//! Key Cleaner: enumerate, filter, delete, collect.
//!
//! One linear pass with no suspendable intermediate states: the walker
//! enumerates candidates, the deletion executor removes them, the report
//! carries exactly the set of files actually removed.

pub mod deletion;
pub mod walker;

pub use deletion::{CleanReport, DeletionConfig, DeletionExecutor, DeletionFailure};

use crate::core::config::CleanerConfig;
use crate::core::errors::{Result, ZkcError};
use crate::core::paths;

/// Run one full cleanup pass.
///
/// Resolves the root to an absolute path, enumerates every file under it
/// whose base name is in the target set, deletes each one, and returns the
/// report. Setup failures (invalid root, empty target set) abort with an
/// error; per-file deletion failures are recorded in the report and never
/// abort the pass.
pub fn clean(config: &CleanerConfig) -> Result<CleanReport> {
    // The TargetSet constructor rejects empty sets, but a deserialized
    // config can still carry one.
    if config.targets.is_empty() {
        return Err(ZkcError::EmptyTargetSet);
    }

    let root = paths::resolve_root(&config.root)?;
    let candidates = walker::find_key_files(&root, &config.targets)?;

    let executor = DeletionExecutor::new(DeletionConfig {
        dry_run: config.dry_run,
    });
    Ok(executor.execute(candidates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn touch(path: &Path) {
        fs::write(path, b"key bytes").unwrap();
    }

    fn canonical(path: &Path) -> PathBuf {
        fs::canonicalize(path).unwrap()
    }

    #[test]
    fn two_key_scenario_deletes_only_key_files() {
        let tmp = TempDir::new().unwrap();
        let build = tmp.path().join("build");
        let sub = build.join("sub");
        fs::create_dir_all(&sub).unwrap();
        touch(&build.join("proving_f10.key"));
        touch(&sub.join("verifying_f10.key"));
        touch(&build.join("readme.txt"));

        let report = clean(&CleanerConfig::for_root(tmp.path())).unwrap();

        let mut deleted = report.deleted.clone();
        deleted.sort();
        let mut expected = vec![
            canonical(&build).join("proving_f10.key"),
            canonical(&sub).join("verifying_f10.key"),
        ];
        expected.sort();
        assert_eq!(deleted, expected);

        assert!(build.join("readme.txt").exists(), "readme must be untouched");
        assert!(!build.join("proving_f10.key").exists());
        assert!(!sub.join("verifying_f10.key").exists());

        let summary = report.human_summary();
        assert!(summary.starts_with("Deleted key files:"), "{summary}");
    }

    #[test]
    fn second_run_finds_nothing() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("proving_f10.key"));

        let config = CleanerConfig::for_root(tmp.path());
        let first = clean(&config).unwrap();
        assert_eq!(first.deleted.len(), 1);

        let second = clean(&config).unwrap();
        assert!(second.deleted.is_empty());
        assert!(second.failures.is_empty());
        assert_eq!(second.human_summary(), "No key files found to delete.");
    }

    #[test]
    fn deleted_paths_are_absolute() {
        let tmp = TempDir::new().unwrap();
        touch(&tmp.path().join("verifying_f10.key"));

        let report = clean(&CleanerConfig::for_root(tmp.path())).unwrap();
        assert!(report.deleted.iter().all(|p| p.is_absolute()));
    }

    #[test]
    fn dry_run_then_real_run() {
        let tmp = TempDir::new().unwrap();
        let key = tmp.path().join("proving_f10.key");
        touch(&key);

        let config = CleanerConfig::for_root(tmp.path()).with_dry_run(true);
        let preview = clean(&config).unwrap();
        assert_eq!(preview.deleted.len(), 1);
        assert!(key.exists(), "dry run must not delete");

        let report = clean(&CleanerConfig::for_root(tmp.path())).unwrap();
        assert_eq!(report.deleted.len(), 1);
        assert!(!key.exists());
    }

    #[test]
    fn invalid_root_aborts_the_run() {
        let config = CleanerConfig::for_root("/definitely/does/not/exist");
        let err = clean(&config).unwrap_err();
        assert_eq!(err.code(), "ZKC-1001");
    }

    mod properties {
        use super::*;
        use crate::core::config::{DEFAULT_KEY_FILENAMES, TargetSet};
        use proptest::prelude::*;

        proptest! {
            // Files whose names are not exact matches are never deleted,
            // regardless of extension or depth.
            #[test]
            fn non_target_names_survive(
                names in proptest::collection::btree_set("[a-z]{1,12}\\.(key|txt|bin)", 1..8),
                nest in any::<bool>(),
            ) {
                prop_assume!(names.iter().all(|n| !DEFAULT_KEY_FILENAMES.contains(&n.as_str())));

                let tmp = TempDir::new().unwrap();
                let dir = if nest {
                    let d = tmp.path().join("build").join("sub");
                    fs::create_dir_all(&d).unwrap();
                    d
                } else {
                    tmp.path().to_path_buf()
                };
                for name in &names {
                    touch(&dir.join(name));
                }

                let report = clean(&CleanerConfig::for_root(tmp.path())).unwrap();

                prop_assert!(report.deleted.is_empty());
                for name in &names {
                    prop_assert!(dir.join(name).exists(), "{name} was deleted");
                }
            }

            // Exactly the files whose base name is in the target set are
            // deleted, wherever they sit in the tree.
            #[test]
            fn matches_are_deleted_and_only_matches(depth in 0usize..4) {
                let tmp = TempDir::new().unwrap();
                let mut dir = tmp.path().to_path_buf();
                for level in 0..depth {
                    dir = dir.join(format!("level{level}"));
                }
                fs::create_dir_all(&dir).unwrap();
                touch(&dir.join("proving_f10.key"));
                touch(&dir.join("keep.txt"));

                let targets = TargetSet::new(["proving_f10.key"]).unwrap();
                let config = CleanerConfig {
                    root: tmp.path().to_path_buf(),
                    targets,
                    dry_run: false,
                };
                let report = clean(&config).unwrap();

                prop_assert_eq!(report.deleted.len(), 1);
                prop_assert!(!dir.join("proving_f10.key").exists());
                prop_assert!(dir.join("keep.txt").exists());
            }
        }
    }
}
