//! Engine metadata and configuration
//!
//! An engine exposes its data key, access tier, property catalog, cloud
//! capability and restricted property names. All of it is fixed once the
//! engine is configured.

mod config;
mod errors;
mod metadata;
mod registry;

pub use config::EngineConfig;
pub use errors::{EngineError, EngineErrorCode, EngineResult};
pub use metadata::{
    Engine, EngineKind, EngineMetadata, EngineMetadataBuilder, DEFAULT_DATA_SOURCE_TIER,
    DEFAULT_ENGINE_TYPE,
};
pub use registry::EngineRegistry;
