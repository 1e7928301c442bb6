//! # Rating
//!
//! A single user-submitted score/comment attached to a book.
//!
//! ## Permissiveness Is Intentional
//! Scores are expected to be 1-5 but the constructor accepts any integer,
//! including negative ones. An out-of-range score skews the book's average
//! rating accordingly. Callers that want the 1-5 rule enforced run
//! [`validation::validate_score`](crate::validation::validate_score) before
//! constructing the rating.

use serde::{Deserialize, Serialize};

/// A user's score (and optional comment) for a book.
///
/// Immutable after construction; lives as long as the rating list of the book
/// it is appended to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rating {
    user: String,
    score: i32,
    comment: String,
}

impl Rating {
    /// Creates a rating with an empty comment.
    pub fn new(user: impl Into<String>, score: i32) -> Self {
        Rating {
            user: user.into(),
            score,
            comment: String::new(),
        }
    }

    /// Creates a rating with a comment.
    pub fn with_comment(user: impl Into<String>, score: i32, comment: impl Into<String>) -> Self {
        Rating {
            user: user.into(),
            score,
            comment: comment.into(),
        }
    }

    /// Identifier of the user who submitted the rating.
    pub fn user(&self) -> &str {
        &self.user
    }

    /// The score, unvalidated (expected range 1-5).
    pub fn score(&self) -> i32 {
        self.score
    }

    /// The comment; empty string when none was given.
    pub fn comment(&self) -> &str {
        &self.comment
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_defaults_to_empty_comment() {
        let rating = Rating::new("ivan", 5);
        assert_eq!(rating.user(), "ivan");
        assert_eq!(rating.score(), 5);
        assert_eq!(rating.comment(), "");
    }

    #[test]
    fn test_with_comment() {
        let rating = Rating::with_comment("olha", 4, "Interesting.");
        assert_eq!(rating.comment(), "Interesting.");
    }

    #[test]
    fn test_out_of_range_scores_are_accepted() {
        // Intentional permissiveness: no range check at construction
        assert_eq!(Rating::new("bot", 11).score(), 11);
        assert_eq!(Rating::new("bot", -3).score(), -3);
    }
}
