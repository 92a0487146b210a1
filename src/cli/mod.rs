//! CLI module
//!
//! Command-line interface for running the pager. Values given as flags
//! override the ones loaded from `--config`.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
