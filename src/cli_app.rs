//! Top-level CLI definition and dispatch.

use std::io::IsTerminal;
use std::path::PathBuf;

use clap::Parser;
use colored::{Colorize, control};
use serde_json::json;
use thiserror::Error;

use zk_key_cleaner::cleaner::{self, CleanReport};
use zk_key_cleaner::core::config::CleanerConfig;
use zk_key_cleaner::core::errors::ZkcError;
use zk_key_cleaner::core::paths;

/// zkc — sweeps generated Groth16 key artifacts out of a build tree.
#[derive(Debug, Parser)]
#[command(
    name = "zkc",
    author,
    version,
    about = "Deletes generated proving/verifying key artifacts under a workspace root",
    long_about = None
)]
pub struct Cli {
    /// Root directory to scan. Defaults to the workspace root relative to
    /// the zkc binary: the parent of the directory containing it.
    #[arg(value_name = "ROOT")]
    root: Option<PathBuf>,
    /// Report what would be deleted without deleting anything.
    #[arg(long)]
    dry_run: bool,
    /// Emit the report as a single JSON object instead of human text.
    #[arg(long)]
    json: bool,
    /// Disable colored output.
    #[arg(long)]
    no_color: bool,
}

/// Errors surfaced to the user by the CLI layer.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Cleaner(#[from] ZkcError),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Human,
    Json,
}

fn output_mode(cli: &Cli) -> OutputMode {
    if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    }
}

/// Run one cleanup pass and render the report.
pub fn run(cli: &Cli) -> Result<(), CliError> {
    if cli.no_color || !std::io::stdout().is_terminal() {
        control::set_override(false);
    }

    let root = cli
        .root
        .clone()
        .unwrap_or_else(paths::default_workspace_root);
    let config = CleanerConfig::for_root(root).with_dry_run(cli.dry_run);
    let report = cleaner::clean(&config)?;

    match output_mode(cli) {
        OutputMode::Human => print_report(&report),
        OutputMode::Json => emit_report_json(&config, &report)?,
    }

    // Per-file failures were already logged as they occurred; the process
    // still exits 0 after a partially failed pass.
    Ok(())
}

fn print_report(report: &CleanReport) {
    println!("{}", report.human_summary());
    if report.dry_run && !report.deleted.is_empty() {
        println!("{}", "Dry run: nothing was deleted.".yellow());
    }
    if !report.failures.is_empty() {
        eprintln!(
            "{}",
            format!(
                "{} deletion(s) failed; see messages above.",
                report.failures.len()
            )
            .red()
        );
    }
}

fn emit_report_json(config: &CleanerConfig, report: &CleanReport) -> Result<(), CliError> {
    let payload = json!({
        "ts": report.completed_at.to_rfc3339(),
        "command": "clean",
        "root": config.root,
        "targets": config.targets,
        "dry_run": report.dry_run,
        "deleted": report.deleted,
        "failures": report.failures,
        "elapsed_seconds": report.duration.as_secs_f64(),
    });
    let line = serde_json::to_string(&payload).map_err(ZkcError::from)?;
    println!("{line}");
    Ok(())
}
