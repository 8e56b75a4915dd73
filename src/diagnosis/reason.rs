//! Missing-property reasons and their messages
//!
//! The rendered text of every reason is consumed verbatim by callers and
//! must not change.

use serde::Serialize;
use std::fmt;

pub const RESOURCE_KEY_EXPLAINER: &str =
    "https://51degrees.com/documentation/_info__resourcekeys.html";

pub const RESOURCE_KEY_EXPLAINER_V41: &str =
    "https://51degrees.com/documentation/4.1/_info__resourcekeys.html";

pub const PROPERTY_EXCLUDED_MESSAGE: &str =
    "This is because the property has been excluded when configuring the engine.";

pub const UNKNOWN_MESSAGE: &str = "The reason for this is unknown. Please check that the aspect and property name are correct.";

/// Renders the prefix prepended to every element-data failure for `property` of element `data_key`.
pub fn prefix(property: &str, data_key: &str) -> String {
    format!(
        "Property '{}' not found in data for element '{}'. ",
        property, data_key
    )
}

/// Why a property has no value.
///
/// Closed set: diagnosis never produces anything else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum DiagnosisReason {
    /// The engine's data tier does not include the property
    DataUpgradeRequired {
        required_tier: String,
        engine_type: String,
    },
    /// Configuration marked the property unavailable
    PropertyExcluded,
    /// The resource key grants nothing for this engine
    ProductNotInCloudResource { engine_type: String },
    /// The resource key grants other properties of this engine
    PropertyNotInCloudResource {
        data_key: String,
        available_properties: Vec<String>,
    },
    /// Nothing more specific can be said
    Unknown,
}

impl DiagnosisReason {
    /// Stable identifier for logs and JSON output
    pub fn code(&self) -> &'static str {
        match self {
            DiagnosisReason::DataUpgradeRequired { .. } => "DATA_UPGRADE_REQUIRED",
            DiagnosisReason::PropertyExcluded => "PROPERTY_EXCLUDED",
            DiagnosisReason::ProductNotInCloudResource { .. } => "PRODUCT_NOT_IN_CLOUD_RESOURCE",
            DiagnosisReason::PropertyNotInCloudResource { .. } => "PROPERTY_NOT_IN_CLOUD_RESOURCE",
            DiagnosisReason::Unknown => "UNKNOWN",
        }
    }

    /// Rendered message, without the element-data prefix
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DiagnosisReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiagnosisReason::DataUpgradeRequired {
                required_tier,
                engine_type,
            } => write!(
                f,
                "This is because your license and/or data file does not include this property. \
                 The property is available with the {} license/data for the {}",
                required_tier, engine_type
            ),
            DiagnosisReason::PropertyExcluded => f.write_str(PROPERTY_EXCLUDED_MESSAGE),
            DiagnosisReason::ProductNotInCloudResource { engine_type } => write!(
                f,
                "This is because your resource key does not include access to any properties \
                 under '{}'. For more details on resource keys, see our explainer: {}",
                engine_type, RESOURCE_KEY_EXPLAINER
            ),
            DiagnosisReason::PropertyNotInCloudResource {
                data_key,
                available_properties,
            } => write!(
                f,
                "This is because your resource key does not include access to this property. \
                 Properties that are included for this key under '{}' are {}. For more details \
                 on resource keys, see our explainer: {}",
                data_key,
                available_properties.join(", "),
                RESOURCE_KEY_EXPLAINER_V41
            ),
            DiagnosisReason::Unknown => f.write_str(UNKNOWN_MESSAGE),
        }
    }
}
