//! # Author
//!
//! Immutable value holder for a person's name and birth date.
//!
//! Authors are shared: several books can reference the same author through an
//! `Arc<Author>`, so there is no ownership transfer when a second book is
//! written by the same person.

use serde::{Deserialize, Serialize};

/// A book author.
///
/// ## Immutability
/// All fields are private and set once at construction. There are no setters;
/// external code reads through the accessors and cannot mutate the value.
///
/// ## Birth Date
/// Stored as a plain string in "YYYY-MM-DD" shape. The constructor does not
/// validate it; callers that care can run
/// [`validation::validate_date`](crate::validation::validate_date) first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    first_name: String,
    last_name: String,
    birth_date: String,
}

impl Author {
    /// Creates an author.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        birth_date: impl Into<String>,
    ) -> Self {
        Author {
            first_name: first_name.into(),
            last_name: last_name.into(),
            birth_date: birth_date.into(),
        }
    }

    /// First name as given at construction.
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Last name as given at construction.
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// Birth date string as given at construction (not validated).
    pub fn birth_date(&self) -> &str {
        &self.birth_date
    }

    /// Full name: `"{first} {last}"`.
    ///
    /// Pure, no side effects.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
