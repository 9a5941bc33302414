// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text reporting and diagnostic helpers.
//!
//! Everything the harness tells the user goes through here: the labeled name
//! groups of the final summary, the first differing line pair of a mismatch,
//! and fatal error diagnostics. Writer-generic variants exist so tests can
//! capture the exact bytes.

use std::io::{self, IsTerminal, Write};

use loam_compare::Divergence;

/// Stands in for the side whose filtered sequence ended first.
const ABSENT: &str = "<absent>";

/// Print an error message to stderr.
///
/// Displays in red when stderr is a terminal, plain text otherwise.
pub fn print_error(msg: impl std::fmt::Display) {
    let is_tty = io::stderr().is_terminal();
    if is_tty {
        let _ = writeln!(io::stderr(), "\x1b[31mError: {}\x1b[0m", msg);
    } else {
        let _ = writeln!(io::stderr(), "Error: {}", msg);
    }
}

/// Print one labeled name group, e.g. `== Errors ==`; empty groups print
/// nothing.
pub fn print_group(label: &str, names: &[String]) {
    let _ = write_group(&mut io::stdout(), label, names);
}

/// Writer-generic form of [`print_group`].
pub fn write_group<W: Write>(writer: &mut W, label: &str, names: &[String]) -> io::Result<()> {
    if names.is_empty() {
        return Ok(());
    }
    writeln!(writer, "== {} ==", label)?;
    for name in names {
        writeln!(writer, "{}", name)?;
    }
    Ok(())
}

/// Print the first differing line pair of a mismatching file.
pub fn print_divergence(name: &str, kind_label: Option<&str>, divergence: &Divergence) {
    let _ = write_divergence(&mut io::stdout(), name, kind_label, divergence);
}

/// Writer-generic form of [`print_divergence`].
///
/// `-` is the reference side, `+` the generated side.
pub fn write_divergence<W: Write>(
    writer: &mut W,
    name: &str,
    kind_label: Option<&str>,
    divergence: &Divergence,
) -> io::Result<()> {
    writeln!(
        writer,
        "== Mismatch: {} ({}) ==",
        name,
        kind_label.unwrap_or("file")
    )?;
    writeln!(
        writer,
        "- {}",
        divergence.reference.as_deref().unwrap_or(ABSENT)
    )?;
    writeln!(
        writer,
        "+ {}",
        divergence.generated.as_deref().unwrap_or(ABSENT)
    )?;
    Ok(())
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
