// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome aggregation, artifact persistence, and exit-code mapping.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::output;
use crate::scanner::{EntryOutcome, ScannedEntry};

/// Process exit codes of the harness.
///
/// Distinct, non-overlapping signals: the one returned value tells an engine
/// crash apart from a missing reference apart from content drift.
pub mod exit_codes {
    /// Everything matched
    pub const SUCCESS: i32 = 0;
    /// Engine invocation failed or the engine exited nonzero
    pub const RUN_FAILED: i32 = 1;
    /// A reference file had no counterpart or an unrecognized suffix
    pub const ERRORS: i32 = 2;
    /// A file pair diverged after filtering
    pub const MISMATCHES: i32 = 4;
}

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to create {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to copy {from} to {to}: {source}")]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// Aggregated outcome of one reference scan.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    errors: Vec<String>,
    mismatches: Vec<String>,
}

impl Summary {
    /// Names of entries that were missing or had an unrecognized suffix,
    /// in scan order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Names of entries whose content diverged, in scan order.
    pub fn mismatches(&self) -> &[String] {
        &self.mismatches
    }

    /// Map the aggregate outcome to a process exit code.
    ///
    /// Errors take precedence over mismatches; the codes never combine.
    pub fn exit_code(&self) -> i32 {
        if !self.errors.is_empty() {
            exit_codes::ERRORS
        } else if !self.mismatches.is_empty() {
            exit_codes::MISMATCHES
        } else {
            exit_codes::SUCCESS
        }
    }

    /// Print the non-empty name groups to stdout.
    pub fn print(&self) {
        output::print_group("Errors", &self.errors);
        output::print_group("Mismatches", &self.mismatches);
    }
}

/// Collect per-entry outcomes into a [`Summary`], persisting every diverging
/// generated file into `out_dir` under its own name.
///
/// The first differing line pair of each mismatch is printed as it is
/// recorded. `out_dir` is created on the first mismatch and not before, so a
/// clean run leaves no trace. Missing and unrecognized entries are recorded
/// but have nothing to copy.
pub fn summarize(
    entries: &[ScannedEntry],
    generated_dir: &Path,
    out_dir: &Path,
) -> Result<Summary, ReportError> {
    let mut summary = Summary::default();
    for entry in entries {
        match &entry.outcome {
            EntryOutcome::Match => {}
            EntryOutcome::Missing | EntryOutcome::Unrecognized => {
                summary.errors.push(entry.name.clone());
            }
            EntryOutcome::Mismatch(divergence) => {
                output::print_divergence(&entry.name, entry.kind.map(|k| k.label()), divergence);
                persist(&entry.name, generated_dir, out_dir)?;
                summary.mismatches.push(entry.name.clone());
            }
        }
    }
    Ok(summary)
}

fn persist(name: &str, generated_dir: &Path, out_dir: &Path) -> Result<(), ReportError> {
    std::fs::create_dir_all(out_dir).map_err(|source| ReportError::CreateDir {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let from = generated_dir.join(name);
    let to = out_dir.join(name);
    std::fs::copy(&from, &to).map_err(|source| ReportError::Copy {
        from,
        to,
        source,
    })?;
    Ok(())
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
