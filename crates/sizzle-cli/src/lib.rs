//! Sizzle CLI library.
//!
//! Provides argument parsing, the default pipeline-run orchestration, and
//! the doctor/lint/schema subcommands.

pub mod cli_args;
pub mod commands;
pub mod pipeline;
