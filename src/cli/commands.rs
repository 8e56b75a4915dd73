//! CLI command implementations
//!
//! Every command loads the engine registry from the configuration directory
//! and produces a report. `execute` writes exactly one JSON envelope per
//! invocation, for failures as well as successes. Nothing is processed;
//! `diagnose` reports what a read of the property would fail with when the
//! engine produced no value for it.

use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};

use crate::element::ElementData;
use crate::engine::{EngineMetadata, EngineRegistry};
use crate::observability::{Logger, Severity};

use super::args::Command;
use super::errors::CliResult;
use super::io::{write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    if cli.verbose {
        Logger::set_min_severity(Severity::Trace);
    }
    execute(cli.command, &mut io::stdout())
}

/// Run a command and write its envelope to `out`
///
/// A failed command still writes an error envelope before the error is
/// returned.
pub fn execute<W: Write>(cmd: Command, out: &mut W) -> CliResult<()> {
    match run_command(cmd) {
        Ok(data) => write_response(out, data),
        Err(e) => {
            write_error(out, e.code_str(), e.message())?;
            Err(e)
        }
    }
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<Value> {
    match cmd {
        Command::Engines { config_dir } => engines(&config_dir),
        Command::Properties {
            config_dir,
            element,
        } => properties(&config_dir, &element),
        Command::Diagnose {
            config_dir,
            element,
            property,
        } => diagnose(&config_dir, &element, &property),
    }
}

/// List configured engines
pub fn engines(config_dir: &Path) -> CliResult<Value> {
    let registry = load_registry(config_dir)?;
    Ok(engines_report(&registry))
}

/// List the property catalog of one engine
pub fn properties(config_dir: &Path, element: &str) -> CliResult<Value> {
    let registry = load_registry(config_dir)?;
    let engine = registry.require(element)?;
    Ok(properties_report(engine))
}

/// Explain why a property has no value
pub fn diagnose(config_dir: &Path, element: &str, property: &str) -> CliResult<Value> {
    let registry = load_registry(config_dir)?;
    let engine = registry.require(element)?;
    Ok(diagnosis_report(engine, property))
}

fn load_registry(config_dir: &Path) -> CliResult<EngineRegistry> {
    let mut registry = EngineRegistry::new(config_dir);
    registry.load_all()?;
    Ok(registry)
}

fn engines_report(registry: &EngineRegistry) -> Value {
    let engines: Vec<Value> = registry
        .data_keys()
        .filter_map(|key| registry.get(key))
        .map(|engine| {
            json!({
                "data_key": engine.data_key(),
                "engine_type": engine.engine_type(),
                "data_source_tier": engine.data_source_tier(),
                "kind": engine.kind(),
                "properties": engine.properties().len(),
            })
        })
        .collect();

    json!({ "engines": engines })
}

fn properties_report(engine: &EngineMetadata) -> Value {
    let properties: Vec<Value> = engine
        .properties()
        .iter()
        .map(|descriptor| {
            json!({
                "name": descriptor.name,
                "type": descriptor.data_type.type_name(),
                "datatierswherepresent": descriptor.available_tiers,
                "available": descriptor.available,
                "in_tier": descriptor.is_in_tier(engine.data_source_tier()),
                "restricted": engine.is_restricted(&descriptor.name),
            })
        })
        .collect();

    json!({
        "data_key": engine.data_key(),
        "data_source_tier": engine.data_source_tier(),
        "properties": properties,
    })
}

fn diagnosis_report(engine: &Arc<EngineMetadata>, property: &str) -> Value {
    let data = ElementData::builder(engine).build();

    match data.get(property) {
        Ok(value) => json!({
            "data_key": engine.data_key(),
            "property": property,
            "value": value,
        }),
        Err(err) => json!({
            "data_key": engine.data_key(),
            "property": property,
            "restricted": engine.is_restricted(property),
            "code": err.code(),
            "reason": err.reason(),
            "message": err.to_string(),
        }),
    }
}
