//! Engine configuration errors
//!
//! Error codes:
//! - PIPE_EMPTY_PROPERTY_NAME
//! - PIPE_EMPTY_TIERS
//! - PIPE_DUPLICATE_PROPERTY
//! - PIPE_UNKNOWN_RESTRICTED_PROPERTY
//! - PIPE_MALFORMED_ENGINE_CONFIG
//! - PIPE_DUPLICATE_ENGINE
//! - PIPE_UNKNOWN_ENGINE
//!
//! All of these are raised while an engine is being configured. Once an
//! engine is configured, property access never produces an `EngineError`.

use std::fmt;

/// Engine configuration error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineErrorCode {
    /// Property descriptor has an empty name
    PipeEmptyPropertyName,
    /// Property descriptor lists no access tiers
    PipeEmptyTiers,
    /// Two descriptors share a name within one catalog
    PipeDuplicateProperty,
    /// Restricted property is not in the catalog
    PipeUnknownRestrictedProperty,
    /// Engine configuration could not be read or parsed
    PipeMalformedEngineConfig,
    /// Two engines share a data key
    PipeDuplicateEngine,
    /// No engine registered for the data key
    PipeUnknownEngine,
}

impl EngineErrorCode {
    /// Returns the stable string code
    pub fn code(&self) -> &'static str {
        match self {
            EngineErrorCode::PipeEmptyPropertyName => "PIPE_EMPTY_PROPERTY_NAME",
            EngineErrorCode::PipeEmptyTiers => "PIPE_EMPTY_TIERS",
            EngineErrorCode::PipeDuplicateProperty => "PIPE_DUPLICATE_PROPERTY",
            EngineErrorCode::PipeUnknownRestrictedProperty => "PIPE_UNKNOWN_RESTRICTED_PROPERTY",
            EngineErrorCode::PipeMalformedEngineConfig => "PIPE_MALFORMED_ENGINE_CONFIG",
            EngineErrorCode::PipeDuplicateEngine => "PIPE_DUPLICATE_ENGINE",
            EngineErrorCode::PipeUnknownEngine => "PIPE_UNKNOWN_ENGINE",
        }
    }
}

impl fmt::Display for EngineErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Engine configuration error with context
#[derive(Debug)]
pub struct EngineError {
    code: EngineErrorCode,
    message: String,
    /// Data key of the engine being configured, if known
    data_key: Option<String>,
    /// Property the error refers to, if any
    property: Option<String>,
}

impl EngineError {
    fn new(code: EngineErrorCode, message: String) -> Self {
        Self {
            code,
            message,
            data_key: None,
            property: None,
        }
    }

    /// Create an empty property name error
    pub fn empty_property_name() -> Self {
        Self::new(
            EngineErrorCode::PipeEmptyPropertyName,
            "Property names must not be empty".into(),
        )
    }

    /// Create an empty tier list error
    pub fn empty_tiers(property: impl Into<String>) -> Self {
        let name = property.into();
        let mut err = Self::new(
            EngineErrorCode::PipeEmptyTiers,
            format!("Property '{}' must be present in at least one data tier", name),
        );
        err.property = Some(name);
        err
    }

    /// Create a duplicate property error
    pub fn duplicate_property(property: impl Into<String>) -> Self {
        let name = property.into();
        let mut err = Self::new(
            EngineErrorCode::PipeDuplicateProperty,
            format!("Property '{}' is declared more than once", name),
        );
        err.property = Some(name);
        err
    }

    /// Create an unknown restricted property error
    pub fn unknown_restricted_property(
        data_key: impl Into<String>,
        property: impl Into<String>,
    ) -> Self {
        let key = data_key.into();
        let name = property.into();
        Self {
            code: EngineErrorCode::PipeUnknownRestrictedProperty,
            message: format!("Restricted property '{}' is not in the engine's catalog", name),
            data_key: Some(key),
            property: Some(name),
        }
    }

    /// Create a malformed configuration error
    pub fn malformed_config(source: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(
            EngineErrorCode::PipeMalformedEngineConfig,
            format!("Malformed engine configuration '{}': {}", source.into(), reason.into()),
        )
    }

    /// Create a duplicate engine error
    pub fn duplicate_engine(data_key: impl Into<String>) -> Self {
        let key = data_key.into();
        let mut err = Self::new(
            EngineErrorCode::PipeDuplicateEngine,
            "An engine is already registered for this element".into(),
        );
        err.data_key = Some(key);
        err
    }

    /// Create an unknown engine error
    pub fn unknown_engine(data_key: impl Into<String>) -> Self {
        let key = data_key.into();
        let mut err = Self::new(
            EngineErrorCode::PipeUnknownEngine,
            "No engine is registered for this element".into(),
        );
        err.data_key = Some(key);
        err
    }

    /// Attach the data key of the engine being configured
    pub fn with_data_key(mut self, data_key: impl Into<String>) -> Self {
        self.data_key = Some(data_key.into());
        self
    }

    /// Returns the error code
    pub fn code(&self) -> EngineErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the data key if applicable
    pub fn data_key(&self) -> Option<&str> {
        self.data_key.as_deref()
    }

    /// Returns the property name if applicable
    pub fn property(&self) -> Option<&str> {
        self.property.as_deref()
    }
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)?;
        if let Some(ref key) = self.data_key {
            write!(f, " [element {}]", key)?;
        }
        Ok(())
    }
}

impl std::error::Error for EngineError {}

/// Result type for engine configuration
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_are_stable() {
        assert_eq!(EngineErrorCode::PipeEmptyTiers.code(), "PIPE_EMPTY_TIERS");
        assert_eq!(EngineErrorCode::PipeDuplicateProperty.code(), "PIPE_DUPLICATE_PROPERTY");
        assert_eq!(
            EngineErrorCode::PipeUnknownRestrictedProperty.code(),
            "PIPE_UNKNOWN_RESTRICTED_PROPERTY"
        );
        assert_eq!(EngineErrorCode::PipeUnknownEngine.code(), "PIPE_UNKNOWN_ENGINE");
    }

    #[test]
    fn test_display_includes_code_and_key() {
        let err = EngineError::unknown_restricted_property("device", "ismobile");
        let display = err.to_string();
        assert!(display.starts_with("PIPE_UNKNOWN_RESTRICTED_PROPERTY"));
        assert!(display.contains("ismobile"));
        assert!(display.contains("[element device]"));
    }

    #[test]
    fn test_display_names_element_once() {
        let err = EngineError::unknown_engine("nope");
        assert_eq!(
            err.to_string(),
            "PIPE_UNKNOWN_ENGINE: No engine is registered for this element [element nope]"
        );
        assert_eq!(err.to_string().matches("nope").count(), 1);

        let err = EngineError::duplicate_engine("device");
        assert_eq!(err.to_string().matches("device").count(), 1);
    }

    #[test]
    fn test_with_data_key() {
        let err = EngineError::duplicate_property("ismobile").with_data_key("device");
        assert_eq!(err.data_key(), Some("device"));
        assert_eq!(err.property(), Some("ismobile"));
    }
}
