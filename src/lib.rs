//! pipeline-engines - lazy property values and missing-property diagnosis
//!
//! Engines populate element data with property values. When a property has
//! no value, reading it fails with a typed reason derived from the engine's
//! property catalog, data tier and resource key:
//!
//! ```
//! use pipeline_engines::catalog::{DataType, PropertyCatalog, PropertyDescriptor};
//! use pipeline_engines::element::ElementData;
//! use pipeline_engines::engine::EngineMetadata;
//!
//! let engine = EngineMetadata::builder("testElement")
//!     .engine_type("TestEngine")
//!     .data_source_tier("lite")
//!     .catalog(
//!         PropertyCatalog::new([PropertyDescriptor::new(
//!             "testProperty",
//!             DataType::String,
//!             ["premium"],
//!         )])
//!         .unwrap(),
//!     )
//!     .build_shared()
//!     .unwrap();
//!
//! let data = ElementData::builder(&engine).build();
//! let err = data.get("testProperty").unwrap_err();
//! assert!(err.to_string().ends_with("available with the premium license/data for the TestEngine"));
//! ```

pub mod catalog;
pub mod cli;
pub mod diagnosis;
pub mod element;
pub mod engine;
pub mod observability;
pub mod value;
