//! # Full Build CLI
//!
//! This is the binary entry point for the `full-build` command-line tool.
//!
//! Its primary responsibilities are:
//! - Parsing command-line arguments using `clap`.
//! - Resolving the run configuration and driving the pipeline.
//! - Handling top-level application errors and translating them into a
//!   non-zero exit status.
//!
//! The pipeline logic itself lives in the `full_build` library crate,
//! keeping the binary a thin wrapper around the reusable functionality.

mod cli;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    cli.execute()
}
