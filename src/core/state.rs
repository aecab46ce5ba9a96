//! # Application State
//!
//! State of one featured-books view. Domain data only; presentation state
//! (scroll offsets, layout caches, animation clocks) lives in the `tui` module.
//!
//! ```text
//! App
//! ├── books: Vec<BookSummary>     // injected list, never mutated
//! ├── hovered_book: Option<BookId> // card whose overlay is visible
//! └── status_message: String      // title bar text
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.

use crate::core::book::{BookId, BookSummary};

pub struct App {
    pub books: Vec<BookSummary>,
    /// None until the pointer enters a card; never shared between instances.
    pub hovered_book: Option<BookId>,
    pub status_message: String,
}

impl App {
    pub fn new(books: Vec<BookSummary>) -> Self {
        Self {
            books,
            hovered_book: None,
            status_message: String::new(),
        }
    }

    pub fn book(&self, id: BookId) -> Option<&BookSummary> {
        self.books.iter().find(|b| b.id == id)
    }

    pub fn position(&self, id: BookId) -> Option<usize> {
        self.books.iter().position(|b| b.id == id)
    }

    /// Whether the hover overlay of card `id` is shown.
    pub fn overlay_visible(&self, id: BookId) -> bool {
        self.hovered_book == Some(id)
    }
}
