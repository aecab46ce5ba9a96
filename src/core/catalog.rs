//! # Catalog
//!
//! Where the featured list comes from. By default the four built-in records;
//! optionally a JSON file with the same shape, so the view can be fed
//! from elsewhere without changing.
//!
//! ```json
//! [
//!   { "id": 1, "title": "Clean Code", "author": "Robert C. Martin",
//!     "price": 34.99, "rating": 4.9, "review_count": 892,
//!     "category": "Programming", "format": "eBook",
//!     "cover_color": "green", "badge": "New" }
//! ]
//! ```

use log::{debug, info, warn};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::book::{BookId, BookSummary, CoverColor, Format, MAX_RATING, Price};

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    DuplicateId(BookId),
    RatingOutOfRange { id: BookId, rating: f32 },
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate book id {id}"),
            CatalogError::RatingOutOfRange { id, rating } => {
                write!(f, "book {id} has rating {rating}, expected 0-{MAX_RATING}")
            }
        }
    }
}

impl std::error::Error for CatalogError {}

// ============================================================================
// Built-in list
// ============================================================================

/// The four records shown when no catalog file is configured.
pub fn featured_books() -> Vec<BookSummary> {
    vec![
        BookSummary {
            id: 1,
            title: "The Psychology of Programming".to_string(),
            author: "Gerald M. Weinberg".to_string(),
            price: Price::from_cents(2999),
            original_price: Some(Price::from_cents(3999)),
            rating: 4.8,
            review_count: 124,
            category: "Programming".to_string(),
            format: Format::Paperback,
            cover_color: CoverColor::Blue,
            badge: Some("Bestseller".to_string()),
        },
        BookSummary {
            id: 2,
            title: "Clean Code".to_string(),
            author: "Robert C. Martin".to_string(),
            price: Price::from_cents(3499),
            original_price: None,
            rating: 4.9,
            review_count: 892,
            category: "Programming".to_string(),
            format: Format::EBook,
            cover_color: CoverColor::Green,
            badge: Some("New".to_string()),
        },
        BookSummary {
            id: 3,
            title: "Atomic Habits".to_string(),
            author: "James Clear".to_string(),
            price: Price::from_cents(2499),
            original_price: None,
            rating: 4.7,
            review_count: 1256,
            category: "Self-Help".to_string(),
            format: Format::Hardcover,
            cover_color: CoverColor::Purple,
            badge: Some("Popular".to_string()),
        },
        BookSummary {
            id: 4,
            title: "The Art of War".to_string(),
            author: "Sun Tzu".to_string(),
            price: Price::from_cents(1999),
            original_price: None,
            rating: 4.6,
            review_count: 567,
            category: "Philosophy".to_string(),
            format: Format::Paperback,
            cover_color: CoverColor::Red,
            badge: None,
        },
    ]
}

// ============================================================================
// Loading
// ============================================================================

/// Load and validate a catalog from a JSON file.
pub fn load_catalog(path: &Path) -> Result<Vec<BookSummary>, CatalogError> {
    let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
    let books = parse_catalog(&contents)?;
    info!("Loaded {} books from {}", books.len(), path.display());
    Ok(books)
}

/// Parse and validate a catalog from a JSON string.
pub fn parse_catalog(contents: &str) -> Result<Vec<BookSummary>, CatalogError> {
    let books: Vec<BookSummary> = serde_json::from_str(contents).map_err(CatalogError::Parse)?;
    validate(&books)?;
    debug!("Catalog ids: {:?}", books.iter().map(|b| b.id).collect::<Vec<_>>());
    Ok(books)
}

fn validate(books: &[BookSummary]) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for book in books {
        if !seen.insert(book.id) {
            return Err(CatalogError::DuplicateId(book.id));
        }
        if !(0.0..=MAX_RATING).contains(&book.rating) {
            return Err(CatalogError::RatingOutOfRange {
                id: book.id,
                rating: book.rating,
            });
        }
        // Shown as a discount, but a catalog may get it wrong; not fatal.
        if let Some(original) = book.original_price
            && original <= book.price
        {
            warn!(
                "Book {} has original price {} not above price {}",
                book.id, original, book.price
            );
        }
    }
    Ok(())
}
