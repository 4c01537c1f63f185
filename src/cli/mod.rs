//! Command Line Interface (CLI) layer for TRISECT.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) that wires user-provided options
//! to the library functionality exposed via `trisect::api`.
//!
//! If you are embedding TRISECT into another application, prefer the
//! high-level `trisect::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
