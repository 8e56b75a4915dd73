//! Missing-property diagnosis
//!
//! Classifies why a property has no value by looking at the owning engine's
//! catalog, data tier and cloud capability. Classification never fails; it
//! is up to the caller to turn a reason into an error.

mod reason;
mod service;

pub use reason::{
    prefix, DiagnosisReason, PROPERTY_EXCLUDED_MESSAGE, RESOURCE_KEY_EXPLAINER,
    RESOURCE_KEY_EXPLAINER_V41, UNKNOWN_MESSAGE,
};
pub use service::check;
