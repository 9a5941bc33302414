// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output-file classification and per-format noise vocabularies.

use crate::filter::LineFilter;

/// Comment marker used by the setup language and structured logs.
const COMMENT: &str = ";;";

/// Structured-log header lines that record where and when a run happened.
const STRUCTURED_LOG_IGNORE: [&str; 3] = [COMMENT, "RUN:", "SIMFILE:"];

/// Leading words of run-log banner and status lines.
///
/// The engine announces file handling, timing, and its own version with a
/// fixed vocabulary; none of those lines carry simulation content.
const RUN_LOG_IGNORE: [&str; 13] = [
    "*",
    "Changing",
    "Command",
    "In",
    "Loam",
    "Looking",
    "Opening",
    "Program",
    "Resetting",
    "Storing",
    "Time",
    "Trying",
    "Using",
];

/// Recognized reference-file formats.
///
/// Classification is purely by file-name suffix; content is never inspected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    /// Simulation state snapshot, written in the program setup language.
    Checkpoint,
    /// Machine-oriented log table.
    StructuredLog,
    /// Human-oriented free-text run log.
    RunLog,
}

impl FileKind {
    /// Classify a file name, `None` for unrecognized suffixes.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.ends_with(".loam") {
            Some(Self::Checkpoint)
        } else if name.ends_with(".llf") {
            Some(Self::StructuredLog)
        } else if name.ends_with(".log") {
            Some(Self::RunLog)
        } else {
            None
        }
    }

    /// The noise filter for this format.
    pub fn filter(self) -> LineFilter {
        match self {
            Self::Checkpoint => LineFilter::new([COMMENT]),
            Self::StructuredLog => LineFilter::new(STRUCTURED_LOG_IGNORE),
            Self::RunLog => LineFilter::new(RUN_LOG_IGNORE),
        }
    }

    /// Label used in divergence diagnostics.
    pub fn label(self) -> &'static str {
        match self {
            Self::Checkpoint => "checkpoint",
            Self::StructuredLog => "structured log",
            Self::RunLog => "run log",
        }
    }
}

#[cfg(test)]
#[path = "kind_tests.rs"]
mod tests;
