//! # Error Types
//!
//! Structured error types for ltb_core. Every failure the engine can report
//! is a variant here, so a front end can present each kind with its own
//! actionable message instead of a generic failure.
//!
//! ## Example
//!
//! ```rust
//! use ltb_core::errors::{CalcError, CalcResult};
//!
//! fn validate_fy(fy_ksi: f64) -> CalcResult<()> {
//!     if fy_ksi <= 0.0 {
//!         return Err(CalcError::invalid_material(
//!             "fy_ksi",
//!             fy_ksi.to_string(),
//!             "Yield strength must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert_eq!(validate_fy(0.0).unwrap_err().error_code(), "INVALID_MATERIAL");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for ltb_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for table, derivation and calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Table text is not well-formed tabular data
    #[error("Parse error at line {line}: {reason}")]
    ParseError { line: usize, reason: String },

    /// Requested designation does not exist in the table
    #[error("Shape not found: {designation}")]
    NotFound { designation: String },

    /// One or more of d, bf, tf, tw is absent on the selected shape
    #[error("Missing required section dimensions for {shape}: {}", .fields.join(", "))]
    MissingDimension { shape: String, fields: Vec<String> },

    /// E or Fy is non-positive or unparseable
    #[error("Invalid material property '{field}': {value} - {reason}")]
    InvalidMaterial {
        field: String,
        value: String,
        reason: String,
    },

    /// An input value is invalid (out of range, non-finite, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Steel grade not found in the catalog
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// Calculation produced a non-finite result
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// File I/O error
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

impl CalcError {
    /// Create a ParseError
    pub fn parse_error(line: usize, reason: impl Into<String>) -> Self {
        CalcError::ParseError {
            line,
            reason: reason.into(),
        }
    }

    /// Create a NotFound error
    pub fn not_found(designation: impl Into<String>) -> Self {
        CalcError::NotFound {
            designation: designation.into(),
        }
    }

    /// Create a MissingDimension error
    pub fn missing_dimension<I, S>(shape: impl Into<String>, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CalcError::MissingDimension {
            shape: shape.into(),
            fields: fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Create an InvalidMaterial error
    pub fn invalid_material(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidMaterial {
            field: field.into(),
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

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::ParseError { .. } => "PARSE_ERROR",
            CalcError::NotFound { .. } => "NOT_FOUND",
            CalcError::MissingDimension { .. } => "MISSING_DIMENSION",
            CalcError::InvalidMaterial { .. } => "INVALID_MATERIAL",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::missing_dimension("W14x22", ["d", "tf"]);
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"MissingDimension\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_missing_dimension_message() {
        let error = CalcError::missing_dimension("W14x22", ["bf", "tw"]);
        assert_eq!(
            error.to_string(),
            "Missing required section dimensions for W14x22: bf, tw"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::parse_error(1, "empty").error_code(), "PARSE_ERROR");
        assert_eq!(CalcError::not_found("W99x1").error_code(), "NOT_FOUND");
        assert_eq!(
            CalcError::invalid_material("fy_ksi", "0", "must be positive").error_code(),
            "INVALID_MATERIAL"
        );
        assert_eq!(CalcError::material_not_found("A1011").error_code(), "MATERIAL_NOT_FOUND");
    }

    #[test]
    fn test_from_serde_json_error() {
        let err = serde_json::from_str::<f64>("not json").unwrap_err();
        let calc: CalcError = err.into();
        assert_eq!(calc.error_code(), "SERIALIZATION_ERROR");
    }
}
