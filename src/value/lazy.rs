//! Property value holder
//!
//! A `LazyValue` is built once by the engine that produced it and read any
//! number of times afterwards. It either holds a value or the reason there
//! is none; reading an absent value is an error, never a default.

use std::sync::Arc;

use super::errors::{MissingValueError, ValueResult};
use crate::diagnosis::{self, DiagnosisReason};
use crate::engine::EngineMetadata;

/// Why a [`LazyValue`] is absent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoValue {
    /// Reason known when the value was produced
    Known(DiagnosisReason),
    /// Reason diagnosed from engine metadata when first asked for
    Deferred {
        property: String,
        engine: Arc<EngineMetadata>,
    },
}

impl NoValue {
    /// Resolves the reason, running diagnosis for deferred reasons.
    pub fn reason(&self) -> DiagnosisReason {
        match self {
            NoValue::Known(reason) => reason.clone(),
            NoValue::Deferred { property, engine } => diagnosis::check(property, engine),
        }
    }
}

/// A property value, or the reason it is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazyValue<T> {
    Present(T),
    Absent(NoValue),
}

impl<T> LazyValue<T> {
    pub fn present(value: T) -> Self {
        LazyValue::Present(value)
    }

    pub fn absent(reason: DiagnosisReason) -> Self {
        LazyValue::Absent(NoValue::Known(reason))
    }

    /// Absent value whose reason is diagnosed only if someone reads it.
    pub fn deferred(property: impl Into<String>, engine: &Arc<EngineMetadata>) -> Self {
        LazyValue::Absent(NoValue::Deferred {
            property: property.into(),
            engine: Arc::clone(engine),
        })
    }

    pub fn has_value(&self) -> bool {
        matches!(self, LazyValue::Present(_))
    }

    /// Returns the value.
    ///
    /// # Errors
    ///
    /// `MissingValueError::NoValue` carrying the diagnosed reason when the
    /// value is absent. Its message is exactly the reason's text.
    pub fn value(&self) -> ValueResult<&T> {
        match self {
            LazyValue::Present(value) => Ok(value),
            LazyValue::Absent(no_value) => Err(MissingValueError::NoValue(no_value.reason())),
        }
    }

    /// Consumes the holder, returning the value.
    pub fn into_value(self) -> ValueResult<T> {
        match self {
            LazyValue::Present(value) => Ok(value),
            LazyValue::Absent(no_value) => Err(MissingValueError::NoValue(no_value.reason())),
        }
    }

    /// Probes for the value without producing an error.
    pub fn as_option(&self) -> Option<&T> {
        match self {
            LazyValue::Present(value) => Some(value),
            LazyValue::Absent(_) => None,
        }
    }

    /// Reason the value is missing, `None` when present.
    pub fn reason(&self) -> Option<DiagnosisReason> {
        match self {
            LazyValue::Present(_) => None,
            LazyValue::Absent(no_value) => Some(no_value.reason()),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> LazyValue<U> {
        match self {
            LazyValue::Present(value) => LazyValue::Present(f(value)),
            LazyValue::Absent(no_value) => LazyValue::Absent(no_value),
        }
    }
}

impl<T> From<T> for LazyValue<T> {
    fn from(value: T) -> Self {
        LazyValue::Present(value)
    }
}
