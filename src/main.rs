//! pipeline-engines CLI entry point
//!
//! Parses arguments and dispatches via `cli::run`. The JSON envelope,
//! including error envelopes, is already on stdout when `run` returns; a
//! failure is repeated on stderr and exits non-zero. All logic lives in
//! the CLI module.

use pipeline_engines::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
