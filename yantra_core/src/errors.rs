//! # Error Types
//!
//! Structured error types for yantra_core. Every error names the offending
//! input and why it was rejected, so an interactive caller can prompt for a
//! corrected value and a programmatic caller can branch on [`CalcError::error_code`].
//!
//! ## Example
//!
//! ```rust
//! use yantra_core::errors::{CalcError, CalcResult};
//!
//! fn validate_base_size(base_size_m: f64) -> CalcResult<()> {
//!     if base_size_m <= 0.0 {
//!         return Err(CalcError::invalid_base_size(
//!             base_size_m.to_string(),
//!             "Base size must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_base_size(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for yantra_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for dimension calculations.
///
/// A failed request never yields a partial instrument set: validation runs
/// before any formula is evaluated.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Latitude is non-finite, outside (-90°, 90°), or exactly 0° where the
    /// gnomon base would be unbounded
    #[error("Invalid latitude: {value} - {reason}")]
    InvalidLatitude { value: String, reason: String },

    /// Base size is zero, negative or non-finite
    #[error("Invalid base size: {value} - {reason}")]
    InvalidBaseSize { value: String, reason: String },

    /// Any other input value is invalid
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// No location preset matches the query
    #[error("Location not found: {query}")]
    LocationNotFound { query: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidLatitude error
    pub fn invalid_latitude(value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidLatitude {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidBaseSize error
    pub fn invalid_base_size(value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidBaseSize {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a LocationNotFound error
    pub fn location_not_found(query: impl Into<String>) -> Self {
        CalcError::LocationNotFound {
            query: query.into(),
        }
    }

    /// Check whether the caller can recover by correcting its inputs.
    ///
    /// Calculations are deterministic, so retrying the same request never helps.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, CalcError::SerializationError { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidLatitude { .. } => "INVALID_LATITUDE",
            CalcError::InvalidBaseSize { .. } => "INVALID_BASE_SIZE",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::LocationNotFound { .. } => "LOCATION_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_latitude("90", "Latitude must be strictly between 0° and 90° in magnitude");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidLatitude\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_base_size("0", "zero").error_code(), "INVALID_BASE_SIZE");
        assert_eq!(CalcError::location_not_found("Atlantis").error_code(), "LOCATION_NOT_FOUND");
        assert_eq!(CalcError::invalid_input("longitude_deg", "NaN", "not finite").error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_error_display() {
        let error = CalcError::invalid_base_size("-2", "Base size must be positive");
        assert_eq!(error.to_string(), "Invalid base size: -2 - Base size must be positive");
    }

    #[test]
    fn test_serde_json_error_conversion() {
        let err = serde_json::from_str::<f64>("not a number").unwrap_err();
        let calc_err: CalcError = err.into();
        assert_eq!(calc_err.error_code(), "SERIALIZATION_ERROR");
        assert!(!calc_err.is_recoverable());
    }
}
