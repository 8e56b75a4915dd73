//! Engine registry for loading engine configurations from disk
//!
//! - One JSON file per engine in the configuration directory
//! - Non-JSON files are ignored
//! - Any malformed file fails the whole load
//! - Data keys are unique across the registry

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::config::EngineConfig;
use super::errors::{EngineError, EngineResult};
use super::metadata::EngineMetadata;
use crate::observability::{log_event_with_fields, Event};

/// Registry of configured engines indexed by data key.
pub struct EngineRegistry {
    config_dir: PathBuf,
    engines: BTreeMap<String, Arc<EngineMetadata>>,
}

impl EngineRegistry {
    /// Creates an empty registry reading from `config_dir`.
    pub fn new(config_dir: &Path) -> Self {
        Self {
            config_dir: config_dir.to_path_buf(),
            engines: BTreeMap::new(),
        }
    }

    /// Loads every engine configuration file in the directory.
    pub fn load_all(&mut self) -> EngineResult<()> {
        let dir = self.config_dir.display().to_string();

        let entries = fs::read_dir(&self.config_dir).map_err(|e| {
            EngineError::malformed_config(&dir, format!("Failed to read config directory: {}", e))
        })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                EngineError::malformed_config(&dir, format!("Failed to read directory entry: {}", e))
            })?;
            let path = entry.path();
            if path.extension().map_or(false, |ext| ext == "json") {
                paths.push(path);
            }
        }
        // Directory order is platform dependent
        paths.sort();

        for path in paths {
            if let Err(e) = self.load_config_file(&path) {
                let path_str = path.display().to_string();
                let error = e.to_string();
                log_event_with_fields(
                    Event::EngineConfigRejected,
                    &[("path", path_str.as_str()), ("error", error.as_str())],
                );
                return Err(e);
            }
        }

        Ok(())
    }

    fn load_config_file(&mut self, path: &Path) -> EngineResult<()> {
        let source = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| {
            EngineError::malformed_config(&source, format!("Failed to read file: {}", e))
        })?;

        let config = EngineConfig::from_json(&source, &content)?;
        let metadata = EngineMetadata::from_config(config)?;

        log_event_with_fields(
            Event::EngineConfigLoaded,
            &[("path", source.as_str()), ("data_key", metadata.data_key())],
        );

        self.register(metadata)
    }

    /// Registers engine metadata directly.
    pub fn register(&mut self, metadata: EngineMetadata) -> EngineResult<()> {
        self.register_shared(Arc::new(metadata))
    }

    /// Registers already shared engine metadata.
    pub fn register_shared(&mut self, metadata: Arc<EngineMetadata>) -> EngineResult<()> {
        if self.engines.contains_key(metadata.data_key()) {
            return Err(EngineError::duplicate_engine(metadata.data_key()));
        }
        self.engines.insert(metadata.data_key().to_string(), metadata);
        Ok(())
    }

    /// Gets an engine by data key.
    pub fn get(&self, data_key: &str) -> Option<&Arc<EngineMetadata>> {
        self.engines.get(data_key)
    }

    /// Gets an engine by data key, failing with `PIPE_UNKNOWN_ENGINE`.
    pub fn require(&self, data_key: &str) -> EngineResult<&Arc<EngineMetadata>> {
        self.get(data_key)
            .ok_or_else(|| EngineError::unknown_engine(data_key))
    }

    /// Registered data keys in sorted order.
    pub fn data_keys(&self) -> impl Iterator<Item = &str> {
        self.engines.keys().map(String::as_str)
    }

    pub fn engine_count(&self) -> usize {
        self.engines.len()
    }
}
