//! # biblio-core: Pure Catalog Model for Biblio
//!
//! This crate is the **heart** of Biblio. It contains the entire library
//! catalog object model as plain types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Biblio Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    apps/console (driver)                        │   │
//! │  │        builds a sample catalog ──► prints descriptions          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ biblio-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   item    │  │  catalog  │  │  reader   │  │ validation│   │   │
//! │  │   │   Book    │  │ Department│  │  Student  │  │   rules   │   │   │
//! │  │   │   EBook   │  │  Library  │  │  Worker   │  │  checks   │   │   │
//! │  │   │   Dvd ... │  │           │  │  Guest    │  │           │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`author`] - Author value type, shared between books
//! - [`rating`] - A single user-submitted score/comment
//! - [`item`] - Catalog entries (Book, EBook, Dvd, AudioBook, Magazine)
//! - [`catalog`] - Aggregation (Department, Library)
//! - [`reader`] - Reader categories and borrowing limits
//! - [`error`] - Validation error types
//! - [`validation`] - Opt-in input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Database, network, file system access is FORBIDDEN here
//! 3. **Total Operations**: Absent lookups are silent no-ops, never errors;
//!    validation is a separate opt-in layer, constructors accept what they are given
//! 4. **Closed Polymorphism**: Item and reader variants are closed enums,
//!    not trait-object hierarchies
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use biblio_core::{Author, Book, Department, Library, Rating};
//!
//! let asimov = Arc::new(Author::new("Isaac", "Asimov", "1920-01-02"));
//!
//! let mut book = Book::new("Foundation", 1951, Arc::clone(&asimov));
//! book.add_rating(Rating::with_comment("Ivan", 5, "A masterpiece!"));
//! book.add_rating(Rating::with_comment("Olha", 4, "Interesting."));
//! assert_eq!(book.average_rating(), 4.5);
//!
//! let mut fiction = Department::new("Fiction");
//! fiction.add_item(book);
//!
//! let mut library = Library::new("Central Library", "12 Science St", 1950);
//! library.add_department(fiction);
//!
//! let lines = library.list_all_items();
//! assert_eq!(lines[0], "Department: Fiction");
//! assert!(lines[1].contains("Rating: 4.5"));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod author;
pub mod catalog;
pub mod error;
pub mod item;
pub mod rating;
pub mod reader;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use biblio_core::Book` instead of
// `use biblio_core::item::Book`

pub use author::Author;
pub use catalog::{Department, Library};
pub use error::{ValidationError, ValidationResult};
pub use item::{AudioBook, Book, Dvd, EBook, LibraryItem, Magazine};
pub use rating::Rating;
pub use reader::{Reader, ReaderCategory};
