//! Read-only engine metadata
//!
//! Built once while an engine is configured and shared through an `Arc` by
//! every element data the engine produces. Nothing here is mutable after
//! `build()`, so any number of threads may read it without locking.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::Arc;

use super::errors::{EngineError, EngineResult};
use crate::catalog::PropertyCatalog;
use crate::observability::{log_event_with_fields, Event};

/// Tier used when none is configured
pub const DEFAULT_DATA_SOURCE_TIER: &str = "lite";

/// Engine type name used when none is configured
pub const DEFAULT_ENGINE_TYPE: &str = "Engine";

/// Where an engine's property catalog comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineKind {
    /// Catalog fixed by local configuration and data file
    #[default]
    OnPremise,
    /// Catalog constrained by a remote resource key
    Cloud,
}

/// Metadata every engine exposes to the diagnosis and element-data layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineMetadata {
    data_key: String,
    engine_type: String,
    data_source_tier: String,
    catalog: PropertyCatalog,
    kind: EngineKind,
    restricted_properties: BTreeSet<String>,
}

impl EngineMetadata {
    /// Starts building metadata for the engine populating `data_key`.
    pub fn builder(data_key: impl Into<String>) -> EngineMetadataBuilder {
        EngineMetadataBuilder {
            data_key: data_key.into(),
            engine_type: DEFAULT_ENGINE_TYPE.to_string(),
            data_source_tier: DEFAULT_DATA_SOURCE_TIER.to_string(),
            catalog: PropertyCatalog::empty(),
            kind: EngineKind::OnPremise,
            restricted_properties: BTreeSet::new(),
        }
    }

    /// Element-data namespace this engine populates
    pub fn data_key(&self) -> &str {
        &self.data_key
    }

    /// Engine type name used in diagnosis messages
    pub fn engine_type(&self) -> &str {
        &self.engine_type
    }

    /// Access tier of the data source the engine is running with
    pub fn data_source_tier(&self) -> &str {
        &self.data_source_tier
    }

    /// Property catalog
    pub fn properties(&self) -> &PropertyCatalog {
        &self.catalog
    }

    pub fn kind(&self) -> EngineKind {
        self.kind
    }

    pub fn is_cloud_backed(&self) -> bool {
        self.kind == EngineKind::Cloud
    }

    /// Properties suppressed by caller configuration
    pub fn restricted_properties(&self) -> &BTreeSet<String> {
        &self.restricted_properties
    }

    pub fn is_restricted(&self, property: &str) -> bool {
        self.restricted_properties.contains(property)
    }
}

/// Builder for [`EngineMetadata`]
#[derive(Debug, Clone)]
pub struct EngineMetadataBuilder {
    data_key: String,
    engine_type: String,
    data_source_tier: String,
    catalog: PropertyCatalog,
    kind: EngineKind,
    restricted_properties: BTreeSet<String>,
}

impl EngineMetadataBuilder {
    pub fn engine_type(mut self, engine_type: impl Into<String>) -> Self {
        self.engine_type = engine_type.into();
        self
    }

    /// Uses the unqualified Rust type name of `E` as the engine type name.
    pub fn engine_type_of<E: ?Sized>(self) -> Self {
        let engine_type = short_type_name(std::any::type_name::<E>());
        self.engine_type(engine_type)
    }

    pub fn data_source_tier(mut self, tier: impl Into<String>) -> Self {
        self.data_source_tier = tier.into();
        self
    }

    pub fn catalog(mut self, catalog: PropertyCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn kind(mut self, kind: EngineKind) -> Self {
        self.kind = kind;
        self
    }

    /// Shorthand for `kind(EngineKind::Cloud)`
    pub fn cloud(self) -> Self {
        self.kind(EngineKind::Cloud)
    }

    pub fn restrict(mut self, property: impl Into<String>) -> Self {
        self.restricted_properties.insert(property.into());
        self
    }

    pub fn restrict_all<I, S>(mut self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.restricted_properties
            .extend(properties.into_iter().map(Into::into));
        self
    }

    /// Validates and freezes the metadata.
    ///
    /// Restricted names of on-premise engines must exist in the catalog.
    /// A cloud engine's catalog depends on the resource key in use, so its
    /// restricted names are accepted as given.
    pub fn build(self) -> EngineResult<EngineMetadata> {
        if self.kind == EngineKind::OnPremise {
            if let Some(unknown) = self
                .restricted_properties
                .iter()
                .find(|name| !self.catalog.contains(name))
            {
                return Err(EngineError::unknown_restricted_property(
                    &self.data_key,
                    unknown,
                ));
            }
        }

        let property_count = self.catalog.len().to_string();
        log_event_with_fields(
            Event::EngineConfigured,
            &[
                ("data_key", self.data_key.as_str()),
                ("engine_type", self.engine_type.as_str()),
                ("tier", self.data_source_tier.as_str()),
                ("properties", property_count.as_str()),
            ],
        );

        Ok(EngineMetadata {
            data_key: self.data_key,
            engine_type: self.engine_type,
            data_source_tier: self.data_source_tier,
            catalog: self.catalog,
            kind: self.kind,
            restricted_properties: self.restricted_properties,
        })
    }

    /// Builds the metadata behind an `Arc`, ready to share.
    pub fn build_shared(self) -> EngineResult<Arc<EngineMetadata>> {
        self.build().map(Arc::new)
    }
}

fn short_type_name(full: &str) -> &str {
    let without_generics = full.split('<').next().unwrap_or(full);
    without_generics
        .rsplit("::")
        .next()
        .unwrap_or(without_generics)
}

/// A configured engine.
///
/// Engine business logic lives outside this crate; the only thing the
/// diagnosis and element-data layers need from an engine is its metadata.
pub trait Engine: Send + Sync {
    fn metadata(&self) -> &Arc<EngineMetadata>;
}

impl Engine for Arc<EngineMetadata> {
    fn metadata(&self) -> &Arc<EngineMetadata> {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DataType, PropertyDescriptor};

    fn catalog() -> PropertyCatalog {
        PropertyCatalog::new([
            PropertyDescriptor::new("integer", DataType::Int, ["lite"]),
            PropertyDescriptor::new("boolean", DataType::Bool, ["lite"]),
        ])
        .unwrap()
    }

    struct ExampleAspectEngine;

    mod nested {
        pub struct Wrapper<T>(pub T);
    }

    #[test]
    fn test_builder_defaults() {
        let metadata = EngineMetadata::builder("example").build().unwrap();
        assert_eq!(metadata.data_key(), "example");
        assert_eq!(metadata.engine_type(), DEFAULT_ENGINE_TYPE);
        assert_eq!(metadata.data_source_tier(), DEFAULT_DATA_SOURCE_TIER);
        assert_eq!(metadata.kind(), EngineKind::OnPremise);
        assert!(metadata.properties().is_empty());
        assert!(metadata.restricted_properties().is_empty());
    }

    #[test]
    fn test_restricted_property_must_be_in_catalog() {
        let err = EngineMetadata::builder("example")
            .catalog(catalog())
            .restrict("missing")
            .build()
            .unwrap_err();

        assert_eq!(err.code().code(), "PIPE_UNKNOWN_RESTRICTED_PROPERTY");
        assert_eq!(err.property(), Some("missing"));
    }

    #[test]
    fn test_cloud_engine_accepts_any_restricted_name() {
        let metadata = EngineMetadata::builder("device")
            .cloud()
            .restrict("ismobile")
            .build()
            .unwrap();

        assert!(metadata.is_cloud_backed());
        assert!(metadata.is_restricted("ismobile"));
    }

    #[test]
    fn test_restrict_all() {
        let metadata = EngineMetadata::builder("example")
            .catalog(catalog())
            .restrict_all(["integer", "boolean"])
            .build()
            .unwrap();

        assert!(metadata.is_restricted("integer"));
        assert!(metadata.is_restricted("boolean"));
    }

    #[test]
    fn test_engine_type_of_uses_short_name() {
        let metadata = EngineMetadata::builder("example")
            .engine_type_of::<ExampleAspectEngine>()
            .build()
            .unwrap();
        assert_eq!(metadata.engine_type(), "ExampleAspectEngine");

        let metadata = EngineMetadata::builder("example")
            .engine_type_of::<nested::Wrapper<ExampleAspectEngine>>()
            .build()
            .unwrap();
        assert_eq!(metadata.engine_type(), "Wrapper");
    }

    #[test]
    fn test_engine_kind_wire_form() {
        let kind: EngineKind = serde_json::from_str("\"cloud\"").unwrap();
        assert_eq!(kind, EngineKind::Cloud);
        let kind: EngineKind = serde_json::from_str("\"on_premise\"").unwrap();
        assert_eq!(kind, EngineKind::OnPremise);
    }

    #[test]
    fn test_metadata_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<EngineMetadata>();
        assert_send_sync::<Arc<EngineMetadata>>();
    }
}
