//! # Validation Module
//!
//! Opt-in input validation for biblio-core.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Caller (optional)                                             │
//! │  ├── THIS MODULE: run validate_* before constructing                    │
//! │  └── Reject bad input early with a typed error                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Constructors (always)                                         │
//! │  └── Accept whatever they are given - the baseline model is             │
//! │      deliberately permissive (unvalidated scores, date strings)         │
//! │                                                                         │
//! │  The baseline stays permissive so the documented silent/no-op/default   │
//! │  behavior holds; these checks are a hardening layer, never wired into   │
//! │  the constructors themselves.                                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use biblio_core::validation::{validate_score, validate_title};
//!
//! // Validate before constructing a Rating
//! assert!(validate_score(4).is_ok());
//! assert!(validate_score(11).is_err());
//!
//! assert!(validate_title("Foundation").is_ok());
//! assert!(validate_title("   ").is_err());
//! ```

use chrono::NaiveDate;

use crate::error::{ValidationError, ValidationResult};

/// Expected date shape for birth and publication dates.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lowest score a rating is expected to carry.
pub const MIN_SCORE: i32 = 1;
/// Highest score a rating is expected to carry.
pub const MAX_SCORE: i32 = 5;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item title.
///
/// ## Rules
/// - Must not be empty after trimming
pub fn validate_title(title: &str) -> ValidationResult<()> {
    if title.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "title".to_string(),
        });
    }
    Ok(())
}

/// Validates a date string against the `YYYY-MM-DD` shape.
///
/// Stored dates remain plain strings; this only checks that the input would
/// parse as a real calendar date.
pub fn validate_date(date: &str) -> ValidationResult<()> {
    if let Err(e) = NaiveDate::parse_from_str(date, DATE_FORMAT) {
        return Err(ValidationError::InvalidFormat {
            field: "date".to_string(),
            reason: e.to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a publication year.
///
/// ## Rules
/// - Must be positive
pub fn validate_year(year: i32) -> ValidationResult<()> {
    if year <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "year".to_string(),
        });
    }
    Ok(())
}

/// Validates a rating score against the expected 1-5 range.
///
/// The [`Rating`](crate::Rating) constructor does NOT call this; permissive
/// scores are the documented baseline.
pub fn validate_score(score: i32) -> ValidationResult<()> {
    if !(MIN_SCORE..=MAX_SCORE).contains(&score) {
        return Err(ValidationError::OutOfRange {
            field: "score".to_string(),
            min: MIN_SCORE as i64,
            max: MAX_SCORE as i64,
        });
    }
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_title() {
        assert!(validate_title("Foundation").is_ok());
        assert!(validate_title("").is_err());
        assert!(validate_title("   ").is_err());
    }

    #[test]
    fn test_validate_date() {
        assert!(validate_date("1920-01-02").is_ok());
        assert!(validate_date("2024-03-01").is_ok());
        assert!(validate_date("not-a-date").is_err());
        // A well-shaped but impossible date must still fail
        assert!(validate_date("2024-13-40").is_err());
    }

    #[test]
    fn test_validate_year() {
        assert!(validate_year(1951).is_ok());
        assert!(validate_year(0).is_err());
        assert!(validate_year(-5).is_err());
    }

    #[test]
    fn test_validate_score() {
        for score in MIN_SCORE..=MAX_SCORE {
            assert!(validate_score(score).is_ok());
        }
        assert!(validate_score(0).is_err());
        assert!(validate_score(6).is_err());
        assert!(validate_score(-3).is_err());
    }

    #[test]
    fn test_validators_are_not_wired_into_constructors() {
        // The baseline stays permissive even though the validator rejects
        use crate::Rating;
        assert!(validate_score(11).is_err());
        assert_eq!(Rating::new("bot", 11).score(), 11);
    }
}
