//! Element data and property resolution
//!
//! Resolution order for `get(property)`:
//! 1. Restricted by the engine: fail, even if a value was stored
//! 2. Stored with a concrete value: return it
//! 3. Not stored, absent or JSON null: fail with the diagnosed reason
//!
//! The decision is made fresh on every read; nothing is cached.

use serde::de::DeserializeOwned;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use crate::diagnosis::{self, DiagnosisReason};
use crate::engine::{Engine, EngineMetadata};
use crate::observability::{log_event_with_fields, Event};
use crate::value::{LazyValue, MissingValueError, ValueResult};

/// Property values one engine produced for one unit of work.
///
/// Frozen once built. Reads never mutate it, so a finished `ElementData`
/// can be shared between threads.
#[derive(Debug, Clone)]
pub struct ElementData {
    engine: Arc<EngineMetadata>,
    values: HashMap<String, LazyValue<Value>>,
}

impl ElementData {
    /// Starts building element data for `engine`.
    pub fn builder<E: Engine + ?Sized>(engine: &E) -> ElementDataBuilder {
        ElementDataBuilder {
            engine: Arc::clone(engine.metadata()),
            values: HashMap::new(),
        }
    }

    /// Element data from values the engine already wrapped.
    pub fn new<E: Engine + ?Sized>(engine: &E, values: HashMap<String, LazyValue<Value>>) -> Self {
        Self {
            engine: Arc::clone(engine.metadata()),
            values,
        }
    }

    /// Element-data namespace, the producing engine's data key
    pub fn data_key(&self) -> &str {
        self.engine.data_key()
    }

    /// Metadata of the producing engine
    pub fn engine(&self) -> &Arc<EngineMetadata> {
        &self.engine
    }

    /// Reads a property value.
    ///
    /// # Errors
    ///
    /// `MissingValueError::PropertyNotFound` when the property is
    /// restricted or has no value. The message is the element-data prefix
    /// followed by the diagnosed reason.
    pub fn get(&self, property: &str) -> ValueResult<&Value> {
        match self.lookup(property) {
            Some(value) => Ok(value),
            None => Err(self.missing(property)),
        }
    }

    /// Reads a property value and deserializes it into `T`.
    pub fn get_as<T: DeserializeOwned>(&self, property: &str) -> ValueResult<T> {
        let value = self.get(property)?;
        serde_json::from_value(value.clone()).map_err(|e| MissingValueError::TypeMismatch {
            property: property.to_string(),
            data_key: self.data_key().to_string(),
            expected: std::any::type_name::<T>(),
            message: e.to_string(),
        })
    }

    /// Returns true if `get(property)` would succeed.
    pub fn has_value(&self, property: &str) -> bool {
        self.lookup(property).is_some()
    }

    /// Reason `get(property)` would fail, `None` if it would succeed.
    pub fn reason(&self, property: &str) -> Option<DiagnosisReason> {
        match self.lookup(property) {
            Some(_) => None,
            None => Some(diagnosis::check(property, &self.engine)),
        }
    }

    /// Stored entry for `property`, hidden when the property is restricted.
    pub fn lazy(&self, property: &str) -> Option<&LazyValue<Value>> {
        if self.engine.is_restricted(property) {
            return None;
        }
        self.values.get(property)
    }

    /// Names of stored, unrestricted properties in sorted order.
    pub fn property_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .values
            .keys()
            .map(String::as_str)
            .filter(|name| !self.engine.is_restricted(name))
            .collect();
        names.sort_unstable();
        names
    }

    fn lookup(&self, property: &str) -> Option<&Value> {
        if self.engine.is_restricted(property) {
            return None;
        }
        match self.values.get(property) {
            Some(LazyValue::Present(value)) if !value.is_null() => Some(value),
            _ => None,
        }
    }

    fn missing(&self, property: &str) -> MissingValueError {
        let reason = diagnosis::check(property, &self.engine);

        log_event_with_fields(
            Event::PropertyMissing,
            &[
                ("data_key", self.data_key()),
                ("property", property),
                ("reason", reason.code()),
            ],
        );

        MissingValueError::PropertyNotFound {
            property: property.to_string(),
            data_key: self.data_key().to_string(),
            reason,
        }
    }
}

/// Builder for [`ElementData`]
#[derive(Debug)]
pub struct ElementDataBuilder {
    engine: Arc<EngineMetadata>,
    values: HashMap<String, LazyValue<Value>>,
}

impl ElementDataBuilder {
    /// Stores a value. A later entry for the same name replaces the earlier one.
    pub fn insert(mut self, property: impl Into<String>, value: LazyValue<Value>) -> Self {
        self.values.insert(property.into(), value);
        self
    }

    pub fn present(self, property: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(property, LazyValue::present(value.into()))
    }

    pub fn absent(self, property: impl Into<String>, reason: DiagnosisReason) -> Self {
        self.insert(property, LazyValue::absent(reason))
    }

    /// Stores an absent value whose reason is diagnosed on first read.
    pub fn deferred(self, property: impl Into<String>) -> Self {
        let property = property.into();
        let value = LazyValue::deferred(property.clone(), &self.engine);
        self.insert(property, value)
    }

    pub fn build(self) -> ElementData {
        ElementData {
            engine: self.engine,
            values: self.values,
        }
    }
}
