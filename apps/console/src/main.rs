//! # Biblio Console Driver
//!
//! Builds a small sample catalog with biblio-core and prints it.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Construct authors, items, departments, library
//! 3. Attach ratings
//! 4. Print the catalog and two reader limits
//!
//! ## Usage
//! ```bash
//! cargo run -p biblio-console
//!
//! # With debug logging
//! RUST_LOG=debug cargo run -p biblio-console
//! ```
//!
//! Catalog lines go to stdout on purpose: they are the program's output, not
//! diagnostics. Tracing only covers the startup steps.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use biblio_core::{
    AudioBook, Author, Book, Department, Dvd, EBook, Library, Magazine, Rating, Reader,
    ReaderCategory,
};

fn main() {
    init_tracing();

    info!("Building sample catalog");
    let library = build_sample_library();
    info!(
        departments = library.department_count(),
        "Sample catalog ready"
    );

    println!("\n--- Library catalog ---");
    for line in library.list_all_items() {
        println!("{line}");
    }

    let student = Reader::new("Andrii", ReaderCategory::Student);
    let guest = Reader::new("Marta", ReaderCategory::Guest);
    println!(
        "\nStudent {} may borrow up to {} items.",
        student.name(),
        student.max_items_allowed()
    );
    println!(
        "Guest {} may borrow up to {} items.",
        guest.name(),
        guest.max_items_allowed()
    );
}

/// The sample catalog: two departments, five items, one rated book.
fn build_sample_library() -> Library {
    let asimov = Arc::new(Author::new("Isaac", "Asimov", "1920-01-02"));
    let orwell = Arc::new(Author::new("George", "Orwell", "1903-06-25"));

    let mut foundation = Book::new("Foundation", 1951, Arc::clone(&asimov));
    foundation.add_rating(Rating::with_comment("Ivan", 5, "A masterpiece!"));
    foundation.add_rating(Rating::with_comment("Olha", 4, "Interesting."));

    let ebook = EBook::new("1984", 1949, Arc::clone(&orwell), "PDF", 2.4);

    let mut fiction = Department::new("Fiction");
    fiction.add_item(foundation);
    fiction.add_item(ebook);
    fiction.add_item(AudioBook::new("Foundation (audio)", 2020, 600));

    let mut media = Department::new("Media");
    media.add_item(Dvd::new("Interstellar", 2014, "MP4"));
    media.add_item(Magazine::new("Sci Digest", 2024, 5, "2024-03-01"));

    let mut library = Library::new("Central Library", "12 Science St", 1950);
    library.add_department(fiction);
    library.add_department(media);
    library
}

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,biblio=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_library_shape() {
        let library = build_sample_library();
        let lines = library.list_all_items();

        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "Department: Fiction");
        assert!(lines[1].contains("Rating: 4.5"));
        assert!(lines[2].contains("[E-book: PDF, 2.4MB]"));
        assert_eq!(lines[4], "Department: Media");
    }
}
