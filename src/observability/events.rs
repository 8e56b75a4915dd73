//! Observable events
//!
//! Events are explicit and typed.

use std::fmt;

use super::logger::Severity;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Engine metadata built and validated
    EngineConfigured,
    /// Engine configuration file read from disk
    EngineConfigLoaded,
    /// Engine configuration file rejected
    EngineConfigRejected,
    /// A property read resolved to a missing-property failure
    PropertyMissing,
}

impl Event {
    /// Returns the event name
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::EngineConfigured => "ENGINE_CONFIGURED",
            Event::EngineConfigLoaded => "ENGINE_CONFIG_LOADED",
            Event::EngineConfigRejected => "ENGINE_CONFIG_REJECTED",
            Event::PropertyMissing => "PROPERTY_MISSING",
        }
    }

    /// Severity the event is logged at
    pub fn severity(&self) -> Severity {
        match self {
            Event::EngineConfigured | Event::EngineConfigLoaded => Severity::Info,
            Event::EngineConfigRejected => Severity::Warn,
            // Emitted on every failed read
            Event::PropertyMissing => Severity::Trace,
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
