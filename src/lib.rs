#![forbid(unsafe_code)]

//! zk_key_cleaner (zkc) — workspace janitor for generated Groth16 key
//! artifacts.
//!
//! Recursively scans a directory tree and deletes files whose names match a
//! fixed set of key filenames (`proving_f10.key`, `verifying_f10.key` by
//! default), reporting exactly what was removed. One linear pass,
//! single-threaded, nothing persisted across runs.
//!
//! # Library usage
//!
//! Use the [`prelude`] for convenient access to the most common types:
//!
//! ```rust,no_run
//! use zk_key_cleaner::prelude::*;
//!
//! let config = CleanerConfig::for_root("/workspace");
//! let report = clean(&config)?;
//! println!("{}", report.human_summary());
//! # Ok::<(), ZkcError>(())
//! ```
//!
//! Individual modules can also be imported directly:
//!
//! ```rust,no_run
//! use zk_key_cleaner::cleaner::walker::find_key_files;
//! use zk_key_cleaner::core::config::TargetSet;
//! ```

pub mod prelude;

pub mod cleaner;
pub mod core;
