//! Convenience re-exports for library consumers.
//!
//! ```rust,no_run
//! use zk_key_cleaner::prelude::*;
//! ```

// Core
pub use crate::core::config::{CleanerConfig, DEFAULT_KEY_FILENAMES, TargetSet};
pub use crate::core::errors::{Result, ZkcError};
pub use crate::core::paths::{default_workspace_root, resolve_root};

// Cleaner
pub use crate::cleaner::walker::find_key_files;
pub use crate::cleaner::{CleanReport, DeletionConfig, DeletionExecutor, DeletionFailure, clean};
