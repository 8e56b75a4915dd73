//! Property descriptor and catalog types
//!
//! Wire form of a descriptor:
//!
//! ```json
//! { "name": "ismobile", "type": "bool",
//!   "datatierswherepresent": ["lite", "premium"], "available": true }
//! ```
//!
//! `available` defaults to `true` when omitted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::engine::{EngineError, EngineResult};

/// Data types a property value can have
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// UTF-8 string
    String,
    /// 64-bit signed integer
    Int,
    /// Boolean
    Bool,
    /// 64-bit floating point
    Float,
    /// List of values
    Array,
    /// Nested object
    Object,
    /// JavaScript snippet delivered as a string
    #[serde(rename = "javascript")]
    JavaScript,
}

impl DataType {
    /// Returns the type name for messages and listings
    pub fn type_name(&self) -> &'static str {
        match self {
            DataType::String => "string",
            DataType::Int => "int",
            DataType::Bool => "bool",
            DataType::Float => "float",
            DataType::Array => "array",
            DataType::Object => "object",
            DataType::JavaScript => "javascript",
        }
    }
}

fn default_available() -> bool {
    true
}

/// Metadata for one property an engine can populate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Property name, unique within its catalog
    pub name: String,
    /// Declared value type
    #[serde(rename = "type")]
    pub data_type: DataType,
    /// Tiers under which the property is ever populated, lowest first
    #[serde(rename = "datatierswherepresent")]
    pub available_tiers: Vec<String>,
    /// Set to false to suppress the property even when the tier matches
    #[serde(default = "default_available")]
    pub available: bool,
}

impl PropertyDescriptor {
    /// Create an available descriptor
    pub fn new<I, S>(name: impl Into<String>, data_type: DataType, tiers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            data_type,
            available_tiers: tiers.into_iter().map(Into::into).collect(),
            available: true,
        }
    }

    /// Mark the descriptor as excluded by configuration
    pub fn excluded(mut self) -> Self {
        self.available = false;
        self
    }

    /// Returns true if the property is populated under `tier`
    pub fn is_in_tier(&self, tier: &str) -> bool {
        self.available_tiers.iter().any(|t| t == tier)
    }

    /// Lowest tier the property is available with
    pub fn required_tier(&self) -> Option<&str> {
        self.available_tiers.first().map(String::as_str)
    }

    fn validate(&self) -> EngineResult<()> {
        if self.name.is_empty() {
            return Err(EngineError::empty_property_name());
        }
        if self.available_tiers.is_empty() {
            return Err(EngineError::empty_tiers(&self.name));
        }
        Ok(())
    }
}

/// Read-only mapping from property name to descriptor.
///
/// Built once while an engine is configured. There is no way to mutate a
/// catalog after construction; share it behind the engine's `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyCatalog {
    properties: BTreeMap<String, PropertyDescriptor>,
}

impl PropertyCatalog {
    /// Builds a catalog, rejecting empty names, empty tier lists and
    /// duplicate names.
    pub fn new<I>(descriptors: I) -> EngineResult<Self>
    where
        I: IntoIterator<Item = PropertyDescriptor>,
    {
        let mut properties = BTreeMap::new();
        for descriptor in descriptors {
            descriptor.validate()?;
            if properties.contains_key(&descriptor.name) {
                return Err(EngineError::duplicate_property(&descriptor.name));
            }
            properties.insert(descriptor.name.clone(), descriptor);
        }
        Ok(Self { properties })
    }

    /// An empty catalog
    pub fn empty() -> Self {
        Self::default()
    }

    /// Gets a descriptor by name.
    pub fn get(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.get(name)
    }

    /// Checks if a property exists.
    pub fn contains(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    /// Property names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.properties.keys().map(String::as_str).collect()
    }

    /// Descriptors in name order.
    pub fn iter(&self) -> impl Iterator<Item = &PropertyDescriptor> {
        self.properties.values()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}
