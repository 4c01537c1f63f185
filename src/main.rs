//! TRISECT CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: parse args, run the
//! splitting pipeline, and exit with appropriate status. For programmatic
//! use, prefer the library API (`trisect::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
