//! # Error Types
//!
//! Structured error types for math_core. Every computation returns a
//! `CalcResult`; errors are tagged values that the caller renders, never
//! panics that cross the crate boundary. Each error is locally recoverable:
//! the same call can be retried with corrected input.
//!
//! ## Example
//!
//! ```rust
//! use math_core::errors::{CalcError, CalcResult};
//!
//! fn validate_precision(precision: usize) -> CalcResult<()> {
//!     if precision < 2 {
//!         return Err(CalcError::invalid_input(
//!             "precision",
//!             precision.to_string(),
//!             "Precision must be at least 2",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for math_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong, enabling
/// programmatic handling by the presentation layer without string matching.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is unparsable, missing, or out of range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Zero divisor or zero denominator where a division is required
    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    /// The operation is undefined over the given domain
    /// (e.g. real square root of a negative number)
    #[error("Domain error in {operation}: {reason}")]
    DomainError { operation: String, reason: String },

    /// The result is non-finite under IEEE-754 double semantics
    #[error("Overflow in {operation}: result is too large to represent")]
    Overflow { operation: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a DivisionByZero error
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        CalcError::DivisionByZero {
            context: context.into(),
        }
    }

    /// Create a DomainError
    pub fn domain_error(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::DomainError {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// Create an Overflow error
    pub fn overflow(operation: impl Into<String>) -> Self {
        CalcError::Overflow {
            operation: operation.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::DivisionByZero { .. } => "DIVISION_BY_ZERO",
            CalcError::DomainError { .. } => "DOMAIN_ERROR",
            CalcError::Overflow { .. } => "OVERFLOW",
        }
    }
}
