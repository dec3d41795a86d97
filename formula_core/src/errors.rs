//! # Error Types
//!
//! Structured error types for formula_core. Every rejected calculation is
//! reported through [`CalcError`]; nothing in the engine panics on bad input.
//! Each variant carries enough context for a front end to point the user at
//! the offending field.
//!
//! ## Example
//!
//! ```rust
//! use formula_core::errors::{CalcError, CalcResult};
//!
//! fn validate_radius(radius: f64) -> CalcResult<()> {
//!     if radius <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "radius".to_string(),
//!             value: radius.to_string(),
//!             reason: "Radius must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_radius(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for formula_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A value is missing, non-numeric, or outside the formula's domain
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Logarithm base is not positive or equals 1
    #[error("Invalid logarithm base: {value} - base must be positive and not equal to 1")]
    InvalidBase { value: String },

    /// A divisor entered by the user is zero
    #[error("Division by zero in '{field}': {reason}")]
    DivisionByZero { field: String, reason: String },

    /// Data set cannot produce a result (too few points, zero variance)
    #[error("Degenerate input: {reason}")]
    DegenerateInput { reason: String },

    /// Fewer known quantities than the method needs
    #[error("Insufficient input: need at least {required} of [{fields}], got {provided}")]
    InsufficientInput {
        required: usize,
        provided: usize,
        fields: String,
    },

    /// Unit symbol is not registered for the quantity
    #[error("Unknown unit '{unit}' for {quantity}")]
    UnknownUnit { quantity: String, unit: String },

    /// Calculation method slug is not registered
    #[error("Unknown calculation method: {method}")]
    UnknownMethod { method: String },

    /// Computed value is non-finite or violates a physical invariant
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an InvalidBase error
    pub fn invalid_base(value: impl Into<String>) -> Self {
        CalcError::InvalidBase { value: value.into() }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(field: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create a DegenerateInput error
    pub fn degenerate(reason: impl Into<String>) -> Self {
        CalcError::DegenerateInput { reason: reason.into() }
    }

    /// Create an InsufficientInput error
    pub fn insufficient(required: usize, provided: usize, fields: &[&str]) -> Self {
        CalcError::InsufficientInput {
            required,
            provided,
            fields: fields.join(", "),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(quantity: impl Into<String>, unit: impl Into<String>) -> Self {
        CalcError::UnknownUnit {
            quantity: quantity.into(),
            unit: unit.into(),
        }
    }

    /// Create an UnknownMethod error
    pub fn unknown_method(method: impl Into<String>) -> Self {
        CalcError::UnknownMethod { method: method.into() }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Name of the input field the error points at, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            CalcError::InvalidInput { field, .. } | CalcError::DivisionByZero { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::InvalidBase { .. } => "INVALID_BASE",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::DegenerateInput { .. } => "DEGENERATE_INPUT",
            CalcError::InsufficientInput { .. } => "INSUFFICIENT_INPUT",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::UnknownMethod { .. } => "UNKNOWN_METHOD",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("radius", "-5", "Radius must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::invalid_base("1").error_code(), "INVALID_BASE");
        assert_eq!(CalcError::unknown_unit("Length", "furlong").error_code(), "UNKNOWN_UNIT");
        assert_eq!(CalcError::degenerate("all x equal").error_code(), "DEGENERATE_INPUT");
    }

    #[test]
    fn test_insufficient_message() {
        let err = CalcError::insufficient(2, 1, &["density", "mass", "radius"]);
        assert_eq!(
            err.to_string(),
            "Insufficient input: need at least 2 of [density, mass, radius], got 1"
        );
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(CalcError::division_by_zero("true_value", "zero").field(), Some("true_value"));
        assert_eq!(CalcError::invalid_base("0").field(), None);
    }
}
