// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use clap::Parser;

/// Regression harness for loam programs
#[derive(Parser, Clone, Debug)]
#[command(
    name = "loam-verify",
    version,
    about = "Run a loam program and compare the generated output against a reference"
)]
pub struct Cli {
    /// Name of or path to the loam binary
    #[arg(value_name = "BINARY")]
    pub binary: PathBuf,

    /// Path to the .loam program to run
    #[arg(value_name = "PROGRAM")]
    pub program: PathBuf,

    /// Directory of reference output files; every file in it is compared
    /// against the generated counterpart
    #[arg(value_name = "REFERENCE_DIR")]
    pub reference_dir: PathBuf,

    /// Directory where diverging generated files are stored for inspection
    #[arg(value_name = "OUT_DIR")]
    pub out_dir: PathBuf,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
