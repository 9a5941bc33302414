// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! External engine invocation.

use std::path::{Path, PathBuf};
use std::process::ExitStatus;

use thiserror::Error;
use tokio::process::Command;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to launch {binary}: {source}")]
    Spawn {
        binary: PathBuf,
        source: std::io::Error,
    },
}

/// Run `binary program -d out_dir -q` and wait for it to finish.
///
/// The constructed command line is printed before launching. `-d` points the
/// engine's output at the caller-owned directory and `-q` keeps it quiet and
/// non-interactive. There is no timeout: a hung engine blocks the harness
/// until it is killed externally.
pub async fn run_program(
    binary: &Path,
    program: &Path,
    out_dir: &Path,
) -> Result<ExitStatus, RunError> {
    println!(
        "{} {} -d {} -q",
        binary.display(),
        program.display(),
        out_dir.display()
    );

    Command::new(binary)
        .arg(program)
        .arg("-d")
        .arg(out_dir)
        .arg("-q")
        .status()
        .await
        .map_err(|source| RunError::Spawn {
            binary: binary.to_path_buf(),
            source,
        })
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
