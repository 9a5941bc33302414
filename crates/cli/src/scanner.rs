// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Reference directory scan and per-entry classification.

use std::path::{Path, PathBuf};

use loam_compare::{compare_files, CompareError, Comparison, Divergence, FileKind};
use thiserror::Error;

/// Classification of one reference entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryOutcome {
    /// A generated counterpart exists and matches under filtering.
    Match,
    /// No generated counterpart exists.
    Missing,
    /// A counterpart exists but its significant lines diverge.
    Mismatch(Divergence),
    /// The suffix maps to no comparator.
    Unrecognized,
}

/// One scanned reference entry.
#[derive(Clone, Debug)]
pub struct ScannedEntry {
    /// File name including suffix.
    pub name: String,
    /// Recognized format, if any.
    pub kind: Option<FileKind>,
    pub outcome: EntryOutcome,
}

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("failed to read reference directory {path}: {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Compare(#[from] CompareError),
}

/// Compare every regular file under `reference_dir` against its counterpart
/// in `generated_dir`.
///
/// Entries are visited in name order so summaries are stable across
/// filesystems. Directories are skipped. Classification never aborts the
/// scan; only I/O failures do.
pub fn scan(reference_dir: &Path, generated_dir: &Path) -> Result<Vec<ScannedEntry>, ScanError> {
    let read_dir = |source| ScanError::ReadDir {
        path: reference_dir.to_path_buf(),
        source,
    };

    let mut dir_entries = std::fs::read_dir(reference_dir)
        .map_err(read_dir)?
        .collect::<Result<Vec<_>, _>>()
        .map_err(read_dir)?;
    dir_entries.sort_by_key(|entry| entry.file_name());

    let mut entries = Vec::new();
    for dir_entry in dir_entries {
        let file_type = dir_entry.file_type().map_err(read_dir)?;
        if !file_type.is_file() {
            continue;
        }

        let name = dir_entry.file_name().to_string_lossy().into_owned();
        let kind = FileKind::from_name(&name);
        let generated = generated_dir.join(&name);

        let outcome = if !generated.exists() {
            println!("{} does not exist", generated.display());
            EntryOutcome::Missing
        } else {
            match kind {
                None => EntryOutcome::Unrecognized,
                Some(kind) => match compare_files(kind, &dir_entry.path(), &generated)? {
                    Comparison::Match => EntryOutcome::Match,
                    Comparison::Mismatch(divergence) => EntryOutcome::Mismatch(divergence),
                },
            }
        };

        entries.push(ScannedEntry {
            name,
            kind,
            outcome,
        });
    }

    Ok(entries)
}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod tests;
