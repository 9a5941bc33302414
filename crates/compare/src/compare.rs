// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lock-step comparison of filtered line sequences.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::filter::LineFilter;
use crate::kind::FileKind;

/// Result of comparing one reference/generated file pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Comparison {
    /// The significant lines are identical in content and order.
    Match,
    /// The pair diverges; carries the first differing line pair.
    Mismatch(Divergence),
}

/// First point where the two filtered sequences stop agreeing.
///
/// `None` on a side means that sequence ended while the other kept going.
/// An extra or missing trailing line is a divergence, never forgiven padding:
/// truncated output must not pass.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Divergence {
    /// Significant line from the reference file, if any remained.
    pub reference: Option<String>,
    /// Significant line from the generated file, if any remained.
    pub generated: Option<String>,
}

#[derive(Debug, Error)]
pub enum CompareError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Compare two files under `kind`'s noise filter.
///
/// Both files are read as sequential line sources, filtered lazily, and
/// walked in lock-step to the length of the longer sequence. The first
/// inequality ends the comparison; later differences are never inspected.
/// Ordering is significant, so reordered lines mismatch.
pub fn compare_files(
    kind: FileKind,
    reference: &Path,
    generated: &Path,
) -> Result<Comparison, CompareError> {
    let filter = kind.filter();
    let mut reference_lines = open_lines(reference)?;
    let mut generated_lines = open_lines(generated)?;

    loop {
        let from_reference = next_significant(&mut reference_lines, &filter, reference)?;
        let from_generated = next_significant(&mut generated_lines, &filter, generated)?;
        match (from_reference, from_generated) {
            (None, None) => return Ok(Comparison::Match),
            (left, right) if left == right => continue,
            (left, right) => {
                return Ok(Comparison::Mismatch(Divergence {
                    reference: left,
                    generated: right,
                }))
            }
        }
    }
}

fn open_lines(path: &Path) -> Result<Lines<BufReader<File>>, CompareError> {
    let file = File::open(path).map_err(|source| CompareError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file).lines())
}

/// Advance to the next line the filter keeps, `None` at end of file.
fn next_significant(
    lines: &mut Lines<BufReader<File>>,
    filter: &LineFilter,
    path: &Path,
) -> Result<Option<String>, CompareError> {
    for line in lines.by_ref() {
        let line = line.map_err(|source| CompareError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        if filter.keep(&line) {
            return Ok(Some(line));
        }
    }
    Ok(None)
}

#[cfg(test)]
#[path = "compare_tests.rs"]
mod tests;
