//! Run configuration: root directory, target filename set, dry-run switch.

#![allow(missing_docs)]

use std::collections::BTreeSet;
use std::ffi::OsStr;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, ZkcError};

/// Key artifacts written by the Groth16 trusted-setup phase of the f10
/// auction circuit. Both are regenerated on demand by the next build, so
/// deleting them is always safe.
pub const DEFAULT_KEY_FILENAMES: [&str; 2] = ["proving_f10.key", "verifying_f10.key"];

/// Immutable set of exact base filenames the cleaner matches against.
///
/// Matching is byte-exact and case-sensitive: no globbing, no
/// extension-only matching. The set is fixed for the lifetime of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetSet(BTreeSet<String>);

impl TargetSet {
    /// Build a target set from literal filenames.
    ///
    /// An empty set is a configuration error: a cleaner with nothing to
    /// match has no meaningful work to do.
    pub fn new<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let set: BTreeSet<String> = names.into_iter().map(Into::into).collect();
        if set.is_empty() {
            return Err(ZkcError::EmptyTargetSet);
        }
        Ok(Self(set))
    }

    /// Whether `name` is a member of the set.
    ///
    /// Targets are UTF-8 literals, so a non-UTF-8 base name can never match.
    #[must_use]
    pub fn matches(&self, name: &OsStr) -> bool {
        name.to_str().is_some_and(|n| self.0.contains(n))
    }

    /// Number of target filenames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate the target filenames in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for TargetSet {
    fn default() -> Self {
        Self(DEFAULT_KEY_FILENAMES.iter().map(ToString::to_string).collect())
    }
}

/// Full configuration for one cleaner invocation.
///
/// Built once, passed by reference, never mutated during a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanerConfig {
    /// Directory subtree to scan. Resolved to an absolute path before traversal.
    pub root: PathBuf,
    /// Filenames to delete.
    pub targets: TargetSet,
    /// When true, report matches without deleting anything.
    pub dry_run: bool,
}

impl CleanerConfig {
    /// Configuration with the default key filenames for the given root.
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            targets: TargetSet::default(),
            dry_run: false,
        }
    }

    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}
