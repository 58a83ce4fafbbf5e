//! Command-line interface
//!
//! Argument parsing and the handlers behind each subcommand. Chains are not
//! persisted, so every invocation builds its chain from the payloads given.

pub mod commands;
pub mod run;

pub use commands::{Command, Opt};
pub use run::{load_settings, run_command};
