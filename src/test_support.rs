//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;

use crate::core::catalog::featured_books;
use crate::core::state::App;

/// Creates a test App over the built-in featured list.
pub fn test_app() -> App {
    App::new(featured_books())
}

/// Rows of `area` in `buffer` as plain strings, one per line.
pub fn buffer_lines(buffer: &Buffer, area: Rect) -> Vec<String> {
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Whole buffer as one string, rows joined by newlines.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer_lines(buffer, buffer.area).join("\n")
}
