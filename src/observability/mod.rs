//! Observability
//!
//! Structured JSON logging for engine configuration and property access.
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on classification
//! 3. No background threads
//! 4. Deterministic output
//!
//! # Usage
//!
//! ```ignore
//! use pipeline_engines::observability::{log_event_with_fields, Event};
//!
//! log_event_with_fields(Event::EngineConfigured, &[("data_key", "device")]);
//! ```

mod events;
mod logger;

pub use events::Event;
pub use logger::{Logger, Severity};

/// Log a typed event with fields
pub fn log_event_with_fields(event: Event, fields: &[(&str, &str)]) {
    Logger::log(event.severity(), event.as_str(), fields);
}
