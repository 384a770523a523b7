//! # Error Types
//!
//! Structured error types for mech_core. The transformation engine itself never
//! fails on numeric input (degenerate cases are resolved locally), so these
//! errors only come from the boundary: building states from untyped data,
//! parsing unit symbols, validating material constants and loading settings.
//!
//! ## Example
//!
//! ```rust
//! use mech_core::errors::{MechError, MechResult};
//!
//! fn validate_poisson(nu: f64) -> MechResult<()> {
//!     if !(-1.0..0.5).contains(&nu) {
//!         return Err(MechError::invalid_input(
//!             "poisson",
//!             nu.to_string(),
//!             "Poisson's ratio must lie in (-1, 0.5)",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_poisson(0.3).is_ok());
//! assert_eq!(validate_poisson(0.7).unwrap_err().error_code(), "INVALID_INPUT");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mech_core operations
pub type MechResult<T> = Result<T, MechError>;

/// Structured error type for mech_core operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum MechError {
    /// An input value is invalid (out of range, non-physical, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A state vector did not have exactly three components
    #[error("Invalid state vector: expected 3 components (X, Y, XY), found {found}")]
    ComponentCount { found: usize },

    /// A unit symbol could not be recognized
    #[error("Unknown unit: '{symbol}'")]
    UnknownUnit { symbol: String },

    /// A principal case code could not be recognized
    #[error("Unknown principal case: '{code}'")]
    UnknownCase { code: String },

    /// File I/O error (settings files)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl MechError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        MechError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(symbol: impl Into<String>) -> Self {
        MechError::UnknownUnit {
            symbol: symbol.into(),
        }
    }

    /// Create an UnknownCase error
    pub fn unknown_case(code: impl Into<String>) -> Self {
        MechError::UnknownCase { code: code.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        MechError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            MechError::InvalidInput { .. } => "INVALID_INPUT",
            MechError::ComponentCount { .. } => "COMPONENT_COUNT",
            MechError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            MechError::UnknownCase { .. } => "UNKNOWN_CASE",
            MechError::FileError { .. } => "FILE_ERROR",
            MechError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for MechError {
    fn from(err: serde_json::Error) -> Self {
        MechError::SerializationError {
            reason: err.to_string(),
        }
    }
}
