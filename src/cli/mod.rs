//! CLI module
//!
//! Provides command-line interface for:
//! - engines: list configured engines
//! - properties: list one engine's property catalog
//! - diagnose: explain why a property has no value

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{diagnose, engines, execute, properties, run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_error, write_response};
