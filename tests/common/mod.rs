use std::path::PathBuf;
use std::process::{Command, ExitStatus};

pub struct CmdResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

fn resolve_bin_path() -> PathBuf {
    if let Ok(path) = std::env::var("CARGO_BIN_EXE_zkc") {
        return PathBuf::from(path);
    }

    let exe_name = if cfg!(windows) { "zkc.exe" } else { "zkc" };
    let fallback = std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(PathBuf::from))
        .and_then(|deps| deps.parent().map(PathBuf::from))
        .map(|debug_dir| debug_dir.join(exe_name));

    match fallback {
        Some(path) if path.exists() => path,
        _ => panic!("unable to resolve zkc binary path for integration test"),
    }
}

pub fn run_zkc(args: &[&str]) -> CmdResult {
    let bin_path = resolve_bin_path();

    let output = Command::new(&bin_path)
        .args(args)
        .env("RUST_BACKTRACE", "1")
        .output()
        .expect("execute zkc command");

    CmdResult {
        status: output.status,
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}
