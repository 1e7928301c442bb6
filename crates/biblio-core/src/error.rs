//! # Error Types
//!
//! Validation error types for biblio-core.
//!
//! ## Where Errors Fit
//! The catalog model itself defines **no** failure modes: absent lookups are
//! silent no-ops, rating scores are unvalidated, and average-of-empty defaults
//! to 0.0. The only errors in this crate come from the opt-in
//! [`validation`](crate::validation) layer, which callers run *before*
//! constructing values when they want stricter input rules.
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field name, offending value)
//! 3. Errors are enum variants, never String

use thiserror::Error;

/// Input validation errors.
///
/// Produced only by the [`validation`](crate::validation) functions; no
/// constructor in this crate returns these.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., a date that does not parse).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = ValidationError::Required {
            field: "title".to_string(),
        };
        assert_eq!(err.to_string(), "title is required");

        let err = ValidationError::OutOfRange {
            field: "score".to_string(),
            min: 1,
            max: 5,
        };
        assert_eq!(err.to_string(), "score must be between 1 and 5");

        let err = ValidationError::MustBePositive {
            field: "year".to_string(),
        };
        assert_eq!(err.to_string(), "year must be positive");
    }
}
