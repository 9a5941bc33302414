// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Harness binary entry point.

use clap::Parser;
use tempfile::TempDir;

use loam_verify::cli::Cli;
use loam_verify::output::print_error;
use loam_verify::report::{self, exit_codes};
use loam_verify::runner;
use loam_verify::scanner;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let code = match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            print_error(e);
            exit_codes::RUN_FAILED
        }
    };
    std::process::exit(code);
}

/// Drive one regression test: run the engine, scan the reference directory,
/// report.
async fn run(cli: &Cli) -> Result<i32, Box<dyn std::error::Error>> {
    // Owns the generated output for the whole test; recursively removed when
    // dropped, on every exit path.
    let generated = TempDir::new()?;

    let status = runner::run_program(&cli.binary, &cli.program, generated.path()).await?;
    if !status.success() {
        return Ok(exit_codes::RUN_FAILED);
    }

    let entries = scanner::scan(&cli.reference_dir, generated.path())?;
    let summary = report::summarize(&entries, generated.path(), &cli.out_dir)?;
    summary.print();
    Ok(summary.exit_code())
}
