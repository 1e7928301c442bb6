//! # Readers
//!
//! Reader categories and their fixed borrowing limits.
//!
//! Readers are independent of the catalog graph: nothing links a reader to a
//! library, department, or item, and no borrowing state is tracked anywhere in
//! this model. The limit is a pure property of the category.

use serde::{Deserialize, Serialize};

/// Borrowing limit for a student.
pub const STUDENT_MAX_ITEMS: u32 = 10;
/// Borrowing limit for a worker.
pub const WORKER_MAX_ITEMS: u32 = 7;
/// Borrowing limit for a guest.
pub const GUEST_MAX_ITEMS: u32 = 3;

/// The category a reader belongs to.
///
/// A closed set; the borrowing limit is a constant per category, independent
/// of any instance state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReaderCategory {
    Student,
    Worker,
    Guest,
}

impl ReaderCategory {
    /// Maximum number of items a reader of this category may borrow.
    pub const fn max_items_allowed(self) -> u32 {
        match self {
            ReaderCategory::Student => STUDENT_MAX_ITEMS,
            ReaderCategory::Worker => WORKER_MAX_ITEMS,
            ReaderCategory::Guest => GUEST_MAX_ITEMS,
        }
    }
}

/// A library reader: a name plus a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reader {
    name: String,
    category: ReaderCategory,
}

impl Reader {
    /// Creates a reader.
    pub fn new(name: impl Into<String>, category: ReaderCategory) -> Self {
        Reader {
            name: name.into(),
            category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> ReaderCategory {
        self.category
    }

    /// The category's fixed borrowing limit.
    pub fn max_items_allowed(&self) -> u32 {
        self.category.max_items_allowed()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_limits_are_fixed() {
        assert_eq!(ReaderCategory::Student.max_items_allowed(), 10);
        assert_eq!(ReaderCategory::Worker.max_items_allowed(), 7);
        assert_eq!(ReaderCategory::Guest.max_items_allowed(), 3);
    }

    #[test]
    fn test_limit_is_independent_of_instance_state() {
        let andrii = Reader::new("Andrii", ReaderCategory::Student);
        let marta = Reader::new("Marta", ReaderCategory::Guest);

        assert_eq!(andrii.max_items_allowed(), 10);
        assert_eq!(marta.max_items_allowed(), 3);
        // Same category, different name: same limit
        assert_eq!(
            Reader::new("Someone Else", ReaderCategory::Guest).max_items_allowed(),
            marta.max_items_allowed()
        );
    }
}
