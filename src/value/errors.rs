//! Missing value errors

use thiserror::Error;

use crate::diagnosis::DiagnosisReason;

/// Result type for property reads
pub type ValueResult<T> = Result<T, MissingValueError>;

/// Failure to read a property value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissingValueError {
    /// An absent [`LazyValue`](super::LazyValue) was read
    #[error("{0}")]
    NoValue(DiagnosisReason),

    /// Element data has no value for the property
    #[error("Property '{property}' not found in data for element '{data_key}'. {reason}")]
    PropertyNotFound {
        property: String,
        data_key: String,
        reason: DiagnosisReason,
    },

    /// Stored value does not have the requested type
    #[error("Property '{property}' in data for element '{data_key}' is not a valid {expected}: {message}")]
    TypeMismatch {
        property: String,
        data_key: String,
        expected: &'static str,
        message: String,
    },
}

impl MissingValueError {
    /// Reason the value is missing, if it is missing
    pub fn reason(&self) -> Option<&DiagnosisReason> {
        match self {
            MissingValueError::NoValue(reason) => Some(reason),
            MissingValueError::PropertyNotFound { reason, .. } => Some(reason),
            MissingValueError::TypeMismatch { .. } => None,
        }
    }

    /// Stable code for JSON output
    pub fn code(&self) -> &'static str {
        match self {
            MissingValueError::NoValue(reason) => reason.code(),
            MissingValueError::PropertyNotFound { reason, .. } => reason.code(),
            MissingValueError::TypeMismatch { .. } => "TYPE_MISMATCH",
        }
    }
}
