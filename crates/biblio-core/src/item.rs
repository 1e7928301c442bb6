//! # Catalog Items
//!
//! All catalog entry types and the closed [`LibraryItem`] enum that unifies
//! them for storage in a department.
//!
//! ## Item Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          LibraryItem                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │      Book       │   │      Dvd        │   │    AudioBook    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  title, year    │   │  title, year    │   │  title, year    │       │
//! │  │  author (Arc)   │   │  video_format   │   │  duration_min   │       │
//! │  │  ratings (Vec)  │   │                 │   │                 │       │
//! │  └────────┬────────┘   └─────────────────┘   └─────────────────┘       │
//! │           │ has-a                                                      │
//! │  ┌────────▼────────┐   ┌─────────────────┐                             │
//! │  │     EBook       │   │    Magazine     │                             │
//! │  │  ─────────────  │   │  ─────────────  │                             │
//! │  │  book (Book)    │   │  title, year    │                             │
//! │  │  file_format    │   │  issue_number   │                             │
//! │  │  file_size_mb   │   │  pub. date      │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Notes
//! - **Closed set, not trait objects**: the variants are fixed, so the
//!   polymorphic `describe()` lives on a plain enum with a match. No `dyn`.
//! - **Composition over inheritance**: `EBook` *holds* a `Book` and delegates
//!   to it, then appends its own suffix to the description.
//! - **Ratings only where they belong**: `add_rating` exists on `Book` and
//!   `EBook` only. A `Dvd` cannot be rated - that is a compile error, not a
//!   runtime rejection.
//! - **Immutability**: title and year are set at construction; no setters
//!   exist anywhere. The rating list is the only mutable sub-state and it
//!   grows monotonically via append.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::author::Author;
use crate::rating::Rating;

// =============================================================================
// Book
// =============================================================================

/// A printed book with an author and an append-only rating list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    title: String,
    year: i32,
    author: Arc<Author>,
    ratings: Vec<Rating>,
}

impl Book {
    /// Creates a book with no ratings.
    ///
    /// The author is shared: pass `Arc::clone` of the same author to give
    /// several books to one person.
    pub fn new(title: impl Into<String>, year: i32, author: Arc<Author>) -> Self {
        Book {
            title: title.into(),
            year,
            author,
            ratings: Vec::new(),
        }
    }

    /// Title as given at construction.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Publication year as given at construction.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The shared author reference.
    pub fn author(&self) -> &Arc<Author> {
        &self.author
    }

    /// Ratings in the order they were appended.
    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// Appends a rating.
    ///
    /// The score is taken as-is; see [`Rating`] for the permissiveness rules.
    pub fn add_rating(&mut self, rating: Rating) {
        self.ratings.push(rating);
    }

    /// Arithmetic mean of all rating scores, `0.0` when there are none.
    ///
    /// Recomputed fresh on every call - nothing is cached, so the value is
    /// never stale after `add_rating`.
    pub fn average_rating(&self) -> f64 {
        if self.ratings.is_empty() {
            return 0.0;
        }
        let sum: i32 = self.ratings.iter().map(|r| r.score()).sum();
        f64::from(sum) / self.ratings.len() as f64
    }

    /// Human-readable description.
    ///
    /// The average rating is always rendered to one decimal place, so a book
    /// without ratings shows `Rating: 0.0`.
    pub fn describe(&self) -> String {
        format!(
            "Book: '{}', {}, Author: {}, Rating: {:.1}",
            self.title,
            self.year,
            self.author.full_name(),
            self.average_rating()
        )
    }
}

// =============================================================================
// EBook
// =============================================================================

/// An electronic book: a [`Book`] plus file format and size.
///
/// ## Composition, Not Inheritance
/// `EBook` holds a `Book` value and delegates the rating operations to it.
/// Its description is the book's description with a format/size suffix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EBook {
    book: Book,
    file_format: String,
    file_size_mb: f64,
}

impl EBook {
    /// Creates an e-book with no ratings.
    pub fn new(
        title: impl Into<String>,
        year: i32,
        author: Arc<Author>,
        file_format: impl Into<String>,
        file_size_mb: f64,
    ) -> Self {
        EBook {
            book: Book::new(title, year, author),
            file_format: file_format.into(),
            file_size_mb,
        }
    }

    /// The book-shaped part (title, year, author, ratings).
    pub fn book(&self) -> &Book {
        &self.book
    }

    /// File format, e.g. "PDF" or "EPUB".
    pub fn file_format(&self) -> &str {
        &self.file_format
    }

    /// File size in megabytes.
    pub fn file_size_mb(&self) -> f64 {
        self.file_size_mb
    }

    /// Appends a rating to the inner book.
    pub fn add_rating(&mut self, rating: Rating) {
        self.book.add_rating(rating);
    }

    /// Average rating of the inner book.
    pub fn average_rating(&self) -> f64 {
        self.book.average_rating()
    }

    /// The inner book's description plus an `[E-book: ...]` suffix.
    ///
    /// The file size is printed as-is with no forced decimal width, unlike the
    /// rating which is always one decimal. The asymmetry is deliberate; see
    /// the errata note in DESIGN.md.
    pub fn describe(&self) -> String {
        format!(
            "{} [E-book: {}, {}MB]",
            self.book.describe(),
            self.file_format,
            self.file_size_mb
        )
    }
}

// =============================================================================
// Dvd
// =============================================================================

/// A DVD. No rating capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dvd {
    title: String,
    year: i32,
    video_format: String,
}

impl Dvd {
    /// Creates a DVD.
    pub fn new(title: impl Into<String>, year: i32, video_format: impl Into<String>) -> Self {
        Dvd {
            title: title.into(),
            year,
            video_format: video_format.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Video format, e.g. "MP4".
    pub fn video_format(&self) -> &str {
        &self.video_format
    }

    pub fn describe(&self) -> String {
        format!(
            "DVD: '{}', {}, Format: {}",
            self.title, self.year, self.video_format
        )
    }
}

// =============================================================================
// AudioBook
// =============================================================================

/// An audiobook with a duration. No rating capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioBook {
    title: String,
    year: i32,
    duration_minutes: u32,
}

impl AudioBook {
    /// Creates an audiobook.
    pub fn new(title: impl Into<String>, year: i32, duration_minutes: u32) -> Self {
        AudioBook {
            title: title.into(),
            year,
            duration_minutes,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Duration in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.duration_minutes
    }

    pub fn describe(&self) -> String {
        format!(
            "AudioBook: '{}', {}, Duration: {} min.",
            self.title, self.year, self.duration_minutes
        )
    }
}

// =============================================================================
// Magazine
// =============================================================================

/// A magazine issue. No rating capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Magazine {
    title: String,
    year: i32,
    issue_number: u32,
    publication_date: String,
}

impl Magazine {
    /// Creates a magazine issue.
    ///
    /// The publication date is a plain string ("YYYY-MM-DD" shape), not
    /// validated at construction.
    pub fn new(
        title: impl Into<String>,
        year: i32,
        issue_number: u32,
        publication_date: impl Into<String>,
    ) -> Self {
        Magazine {
            title: title.into(),
            year,
            issue_number,
            publication_date: publication_date.into(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn issue_number(&self) -> u32 {
        self.issue_number
    }

    pub fn publication_date(&self) -> &str {
        &self.publication_date
    }

    /// Description with issue number and date.
    ///
    /// ## Asymmetry
    /// Unlike every other variant, the base `year` field does NOT appear in a
    /// magazine's description - only the issue number and publication date do.
    /// The asymmetric template is preserved on purpose; do not "fix" it.
    pub fn describe(&self) -> String {
        format!(
            "Magazine: '{}', Issue #{}, Date: {}",
            self.title, self.issue_number, self.publication_date
        )
    }
}

// =============================================================================
// LibraryItem - the closed polymorphic set
// =============================================================================

/// Any catalog entry a department can hold.
///
/// The set of variants is closed, so polymorphic dispatch is a plain `match`.
/// `From` impls let callers pass concrete items straight to
/// [`Department::add_item`](crate::catalog::Department::add_item).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LibraryItem {
    Book(Book),
    EBook(EBook),
    Dvd(Dvd),
    AudioBook(AudioBook),
    Magazine(Magazine),
}

impl LibraryItem {
    /// The item's title, whatever the variant.
    pub fn title(&self) -> &str {
        match self {
            LibraryItem::Book(book) => book.title(),
            LibraryItem::EBook(ebook) => ebook.book().title(),
            LibraryItem::Dvd(dvd) => dvd.title(),
            LibraryItem::AudioBook(audiobook) => audiobook.title(),
            LibraryItem::Magazine(magazine) => magazine.title(),
        }
    }

    /// The item's year, whatever the variant.
    ///
    /// Present on every variant even though [`Magazine`] leaves it out of its
    /// description.
    pub fn year(&self) -> i32 {
        match self {
            LibraryItem::Book(book) => book.year(),
            LibraryItem::EBook(ebook) => ebook.book().year(),
            LibraryItem::Dvd(dvd) => dvd.year(),
            LibraryItem::AudioBook(audiobook) => audiobook.year(),
            LibraryItem::Magazine(magazine) => magazine.year(),
        }
    }

    /// The variant's human-readable description.
    pub fn describe(&self) -> String {
        match self {
            LibraryItem::Book(book) => book.describe(),
            LibraryItem::EBook(ebook) => ebook.describe(),
            LibraryItem::Dvd(dvd) => dvd.describe(),
            LibraryItem::AudioBook(audiobook) => audiobook.describe(),
            LibraryItem::Magazine(magazine) => magazine.describe(),
        }
    }
}

impl From<Book> for LibraryItem {
    fn from(book: Book) -> Self {
        LibraryItem::Book(book)
    }
}

impl From<EBook> for LibraryItem {
    fn from(ebook: EBook) -> Self {
        LibraryItem::EBook(ebook)
    }
}

impl From<Dvd> for LibraryItem {
    fn from(dvd: Dvd) -> Self {
        LibraryItem::Dvd(dvd)
    }
}

impl From<AudioBook> for LibraryItem {
    fn from(audiobook: AudioBook) -> Self {
        LibraryItem::AudioBook(audiobook)
    }
}

impl From<Magazine> for LibraryItem {
    fn from(magazine: Magazine) -> Self {
        LibraryItem::Magazine(magazine)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
