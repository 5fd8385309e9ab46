//! CLI module
//!
//! Command-line interface: one positional storage URL in, one
//! table-creation statement out.

mod commands;
mod runner;

pub use commands::Cli;
pub use runner::Runner;
