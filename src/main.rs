//! # Docwiki CLI
//!
//! This is the binary entry point for the `docwiki` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Executing the appropriate command based on the parsed arguments.
//! - Reporting errors on stderr with a non-zero exit status.
//!
//! The pipeline itself lives in the `docwiki` library crate; the binary only
//! loads settings, wires up logging and prints results.

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
