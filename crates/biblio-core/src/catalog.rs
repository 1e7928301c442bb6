//! # Catalog Aggregation
//!
//! Departments group items; a library groups departments.
//!
//! ## Aggregation Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Catalog Aggregation                                 │
//! │                                                                         │
//! │  Caller Action            Operation               State Change          │
//! │  ─────────────            ─────────               ────────────          │
//! │                                                                         │
//! │  Shelve an item ─────────► add_item() ──────────► items.push(item)      │
//! │                                                                         │
//! │  Pull a title ───────────► remove_item() ───────► retain(!= title)      │
//! │                                                                         │
//! │  Open a department ──────► add_department() ────► insert or overwrite   │
//! │                                                                         │
//! │  Close a department ─────► remove_department() ─► drop entry (no-op     │
//! │                                                   when absent)          │
//! │                                                                         │
//! │  Print the catalog ──────► list_all_items() ────► (read only)           │
//! │                                                                         │
//! │  NOTE: Every absent-lookup is a silent no-op. The model defines no      │
//! │        error conditions; all operations are total on well-typed input.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::item::LibraryItem;

// =============================================================================
// Department
// =============================================================================

/// A named grouping of catalog items within a library.
///
/// ## Invariants
/// - Items keep insertion order
/// - Duplicate titles are allowed (no dedup on add)
/// - `name` is the external key a [`Library`] files the department under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Department {
    name: String,
    items: Vec<LibraryItem>,
}

impl Department {
    /// Creates an empty department.
    pub fn new(name: impl Into<String>) -> Self {
        Department {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// The department's name (the key a library stores it under).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The items in insertion order.
    pub fn items(&self) -> &[LibraryItem] {
        &self.items
    }

    /// Number of items currently shelved.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// True when the department holds no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item.
    ///
    /// No duplicate detection and no capacity limit; two items with the same
    /// title simply coexist.
    pub fn add_item(&mut self, item: impl Into<LibraryItem>) {
        self.items.push(item.into());
    }

    /// Removes **every** item whose title equals `title` exactly.
    ///
    /// ## Bulk Semantics
    /// This is deliberately a bulk removal: with two items both titled "X",
    /// `remove_item("X")` empties both out. A title with no match is a silent
    /// no-op, never an error.
    pub fn remove_item(&mut self, title: &str) {
        self.items.retain(|item| item.title() != title);
    }

    /// Descriptions of all items, insertion order, as a fresh list per call.
    pub fn list_items(&self) -> Vec<String> {
        self.items.iter().map(LibraryItem::describe).collect()
    }
}

// =============================================================================
// Library
// =============================================================================

/// A named collection of departments, keyed by department name.
///
/// ## Keyed Storage With Insertion Order
/// Departments live in a `Vec` and are looked up by name, which keeps the
/// iteration order equal to insertion order without pulling in an ordered-map
/// dependency. Adding a department whose name is already present **silently
/// overwrites** the stored one in place - the old department's contents are
/// discarded with no warning and the slot keeps its original position. This
/// is intentional, not an oversight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Library {
    name: String,
    address: String,
    founded_year: i32,
    departments: Vec<Department>,
}

impl Library {
    /// Creates a library with no departments.
    pub fn new(name: impl Into<String>, address: impl Into<String>, founded_year: i32) -> Self {
        Library {
            name: name.into(),
            address: address.into(),
            founded_year,
            departments: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn founded_year(&self) -> i32 {
        self.founded_year
    }

    /// Looks a department up by name.
    pub fn department(&self, name: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.name() == name)
    }

    /// Number of departments.
    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    /// Inserts a department, or overwrites the one already filed under the
    /// same name.
    ///
    /// Overwriting replaces the stored department entirely; whatever it held
    /// is gone. The slot keeps its original insertion position.
    pub fn add_department(&mut self, department: Department) {
        if let Some(slot) = self
            .departments
            .iter_mut()
            .find(|d| d.name() == department.name())
        {
            *slot = department;
            return;
        }
        self.departments.push(department);
    }

    /// Removes the department with the given name; silent no-op when absent.
    pub fn remove_department(&mut self, name: &str) {
        self.departments.retain(|d| d.name() != name);
    }

    /// The whole catalog as printable lines.
    ///
    /// For each department in insertion order: one `Department: {name}` header
    /// followed by that department's item descriptions, flattened into a
    /// single fresh list.
    pub fn list_all_items(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for department in &self.departments {
            lines.push(format!("Department: {}", department.name()));
            lines.extend(department.list_items());
        }
        lines
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::author::Author;
    use crate::item::{AudioBook, Book, Dvd, Magazine};
    use crate::rating::Rating;

    fn test_book(title: &str) -> Book {
        let author = Arc::new(Author::new("Isaac", "Asimov", "1920-01-02"));
        Book::new(title, 1951, author)
    }

    #[test]
    fn test_department_add_and_list_preserves_order() {
        let mut department = Department::new("Fiction");
        department.add_item(test_book("Foundation"));
        department.add_item(Dvd::new("Interstellar", 2014, "MP4"));
        department.add_item(AudioBook::new("Foundation (audio)", 2020, 600));

        let lines = department.list_items();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Book: 'Foundation'"));
        assert!(lines[1].starts_with("DVD: 'Interstellar'"));
        assert!(lines[2].starts_with("AudioBook: 'Foundation (audio)'"));
    }

    #[test]
    fn test_department_allows_duplicate_titles() {
        let mut department = Department::new("Fiction");
        department.add_item(test_book("X"));
        department.add_item(test_book("X"));
        assert_eq!(department.item_count(), 2);
    }

    #[test]
    fn test_remove_item_removes_all_matches() {
        // Bulk semantics: both copies of "X" must go
        let mut department = Department::new("Fiction");
        department.add_item(test_book("X"));
        department.add_item(test_book("X"));

        department.remove_item("X");
        assert!(department.is_empty());
    }

    #[test]
    fn test_remove_item_is_exact_match_only() {
        let mut department = Department::new("Fiction");
        department.add_item(test_book("Foundation"));
        department.add_item(test_book("Foundation and Empire"));

        department.remove_item("Foundation");
        assert_eq!(department.item_count(), 1);
        assert_eq!(department.items()[0].title(), "Foundation and Empire");
    }

    #[test]
    fn test_remove_absent_title_is_a_noop() {
        let mut department = Department::new("Fiction");
        department.add_item(test_book("Foundation"));

        department.remove_item("No Such Title");
        assert_eq!(department.item_count(), 1);
    }

    #[test]
    fn test_list_items_returns_a_fresh_list() {
        let mut department = Department::new("Fiction");
        department.add_item(test_book("Foundation"));

        let before = department.list_items();
        department.add_item(test_book("Foundation and Empire"));
        let after = department.list_items();

        assert_eq!(before.len(), 1);
        assert_eq!(after.len(), 2);
    }

    #[test]
    fn test_library_headers_follow_insertion_order() {
        let mut fiction = Department::new("Fiction");
        fiction.add_item(test_book("Foundation"));

        let mut media = Department::new("Media");
        media.add_item(Dvd::new("Interstellar", 2014, "MP4"));
        media.add_item(Magazine::new("Sci Digest", 2024, 5, "2024-03-01"));

        let mut library = Library::new("Central Library", "12 Science St", 1950);
        library.add_department(fiction);
        library.add_department(media);

        let lines = library.list_all_items();
        assert_eq!(lines[0], "Department: Fiction");
        assert!(lines[1].starts_with("Book: 'Foundation'"));
        assert_eq!(lines[2], "Department: Media");
        assert!(lines[3].starts_with("DVD: 'Interstellar'"));
        assert!(lines[4].starts_with("Magazine: 'Sci Digest'"));
    }

    #[test]
    fn test_add_department_overwrites_by_name() {
        let mut first = Department::new("A");
        first.add_item(test_book("Book1"));

        let mut second = Department::new("A");
        second.add_item(test_book("Book2"));

        let mut library = Library::new("Central Library", "12 Science St", 1950);
        library.add_department(first);
        library.add_department(second);

        assert_eq!(library.department_count(), 1);
        let lines = library.list_all_items();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Book2"));
        assert!(!lines.iter().any(|l| l.contains("Book1")));
    }

    #[test]
    fn test_overwrite_keeps_original_position() {
        let mut library = Library::new("Central Library", "12 Science St", 1950);
        library.add_department(Department::new("A"));
        library.add_department(Department::new("B"));
        library.add_department(Department::new("A"));

        let lines = library.list_all_items();
        assert_eq!(lines, vec!["Department: A", "Department: B"]);
    }

    #[test]
    fn test_remove_department_and_absent_noop() {
        let mut library = Library::new("Central Library", "12 Science St", 1950);
        library.add_department(Department::new("Fiction"));

        library.remove_department("No Such Department");
        assert_eq!(library.department_count(), 1);

        library.remove_department("Fiction");
        assert_eq!(library.department_count(), 0);
        assert!(library.list_all_items().is_empty());
    }

    #[test]
    fn test_end_to_end_rated_catalog() {
        let mut book = test_book("Foundation");
        book.add_rating(Rating::with_comment("Ivan", 5, "A masterpiece!"));
        book.add_rating(Rating::with_comment("Olha", 4, "Interesting."));

        let mut fiction = Department::new("Fiction");
        fiction.add_item(book);

        let mut library = Library::new("Central Library", "12 Science St", 1950);
        library.add_department(fiction);

        let lines = library.list_all_items();
        assert_eq!(lines[0], "Department: Fiction");
        assert_eq!(
            lines[1],
            "Book: 'Foundation', 1951, Author: Isaac Asimov, Rating: 4.5"
        );
    }

    #[test]
    fn test_serde_round_trip() {
        let mut fiction = Department::new("Fiction");
        let mut book = test_book("Foundation");
        book.add_rating(Rating::new("Ivan", 5));
        fiction.add_item(book);

        let mut library = Library::new("Central Library", "12 Science St", 1950);
        library.add_department(fiction);

        let json = serde_json::to_string(&library).unwrap();
        let restored: Library = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, library);
        assert_eq!(restored.list_all_items(), library.list_all_items());
    }
}
