//! CLI argument definitions using clap
//!
//! Commands:
//! - pipeline-engines engines --config-dir <dir>
//! - pipeline-engines properties --config-dir <dir> --element <key>
//! - pipeline-engines diagnose --config-dir <dir> --element <key> --property <name>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Explain why engine properties have no value
#[derive(Parser, Debug)]
#[command(name = "pipeline-engines")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Emit per-access TRACE logs
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List configured engines
    Engines {
        /// Directory of engine configuration files
        #[arg(long, default_value = "./engines")]
        config_dir: PathBuf,
    },

    /// List the property catalog of one engine
    Properties {
        /// Directory of engine configuration files
        #[arg(long, default_value = "./engines")]
        config_dir: PathBuf,

        /// Data key of the engine
        #[arg(long)]
        element: String,
    },

    /// Explain why a property of an engine has no value
    Diagnose {
        /// Directory of engine configuration files
        #[arg(long, default_value = "./engines")]
        config_dir: PathBuf,

        /// Data key of the engine
        #[arg(long)]
        element: String,

        /// Property name
        #[arg(long)]
        property: String,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
