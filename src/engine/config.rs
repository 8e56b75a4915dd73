//! Engine configuration file structure
//!
//! ```json
//! {
//!   "data_key": "device",
//!   "engine_type": "DeviceDetectionCloudEngine",
//!   "data_source_tier": "lite",
//!   "kind": "cloud",
//!   "restricted_properties": ["ismobile"],
//!   "properties": [
//!     { "name": "ismobile", "type": "bool", "datatierswherepresent": ["lite"] }
//!   ]
//! }
//! ```

use serde::{Deserialize, Serialize};

use super::errors::{EngineError, EngineResult};
use super::metadata::{EngineKind, EngineMetadata, DEFAULT_DATA_SOURCE_TIER, DEFAULT_ENGINE_TYPE};
use crate::catalog::{PropertyCatalog, PropertyDescriptor};

/// Serialized engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Element-data namespace (required)
    pub data_key: String,

    /// Engine type name used in messages (optional, default "Engine")
    #[serde(default = "default_engine_type")]
    pub engine_type: String,

    /// Access tier of the data source (optional, default "lite")
    #[serde(default = "default_data_source_tier")]
    pub data_source_tier: String,

    /// "on_premise" or "cloud" (optional, default "on_premise")
    #[serde(default)]
    pub kind: EngineKind,

    /// Property names suppressed by configuration
    #[serde(default)]
    pub restricted_properties: Vec<String>,

    /// Property catalog
    #[serde(default)]
    pub properties: Vec<PropertyDescriptor>,
}

fn default_engine_type() -> String {
    DEFAULT_ENGINE_TYPE.to_string()
}

fn default_data_source_tier() -> String {
    DEFAULT_DATA_SOURCE_TIER.to_string()
}

impl EngineConfig {
    /// Parses a configuration from JSON text. `source` names the input in
    /// error messages.
    pub fn from_json(source: &str, json: &str) -> EngineResult<Self> {
        let config: EngineConfig = serde_json::from_str(json)
            .map_err(|e| EngineError::malformed_config(source, format!("Invalid JSON: {}", e)))?;

        if config.data_key.is_empty() {
            return Err(EngineError::malformed_config(source, "'data_key' must not be empty"));
        }

        Ok(config)
    }
}

impl EngineMetadata {
    /// Builds validated metadata from a configuration.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        let data_key = config.data_key;
        let catalog = PropertyCatalog::new(config.properties)
            .map_err(|e| e.with_data_key(&data_key))?;

        EngineMetadata::builder(data_key)
            .engine_type(config.engine_type)
            .data_source_tier(config.data_source_tier)
            .kind(config.kind)
            .catalog(catalog)
            .restrict_all(config.restricted_properties)
            .build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::EngineErrorCode;

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = EngineConfig::from_json("<test>", r#"{"data_key": "example"}"#).unwrap();

        assert_eq!(config.engine_type, "Engine");
        assert_eq!(config.data_source_tier, "lite");
        assert_eq!(config.kind, EngineKind::OnPremise);
        assert!(config.restricted_properties.is_empty());
        assert!(config.properties.is_empty());
    }

    #[test]
    fn test_full_config_to_metadata() {
        let json = r#"{
            "data_key": "device",
            "engine_type": "DeviceDetectionCloudEngine",
            "data_source_tier": "premium",
            "kind": "cloud",
            "restricted_properties": ["ismobile"],
            "properties": [
                {"name": "ismobile", "type": "bool", "datatierswherepresent": ["lite"]},
                {"name": "hardwarename", "type": "array", "datatierswherepresent": ["premium"], "available": false}
            ]
        }"#;

        let config = EngineConfig::from_json("<test>", json).unwrap();
        let metadata = EngineMetadata::from_config(config).unwrap();

        assert_eq!(metadata.data_key(), "device");
        assert_eq!(metadata.engine_type(), "DeviceDetectionCloudEngine");
        assert_eq!(metadata.data_source_tier(), "premium");
        assert!(metadata.is_cloud_backed());
        assert!(metadata.is_restricted("ismobile"));
        assert_eq!(metadata.properties().names(), vec!["hardwarename", "ismobile"]);
        assert!(!metadata.properties().get("hardwarename").unwrap().available);
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = EngineConfig::from_json("engine.json", "{not json").unwrap_err();
        assert_eq!(err.code(), EngineErrorCode::PipeMalformedEngineConfig);
        assert!(err.message().contains("engine.json"));
    }

    #[test]
    fn test_empty_data_key_rejected() {
        let err = EngineConfig::from_json("<test>", r#"{"data_key": ""}"#).unwrap_err();
        assert_eq!(err.code(), EngineErrorCode::PipeMalformedEngineConfig);
    }

    #[test]
    fn test_catalog_errors_carry_data_key() {
        let json = r#"{
            "data_key": "example",
            "properties": [
                {"name": "p", "type": "int", "datatierswherepresent": ["lite"]},
                {"name": "p", "type": "int", "datatierswherepresent": ["lite"]}
            ]
        }"#;
        let config = EngineConfig::from_json("<test>", json).unwrap();
        let err = EngineMetadata::from_config(config).unwrap_err();

        assert_eq!(err.code(), EngineErrorCode::PipeDuplicateProperty);
        assert_eq!(err.data_key(), Some("example"));
    }
}
