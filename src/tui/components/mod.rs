//! # TUI Components
//!
//! This module contains all UI components for the featured books screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: current route and status
//! - `SectionHeader`: heading above the grid
//! - `BookCard`: one book, drawn as a ratatui `Widget` into the grid's scroll view
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that keep presentation state between frames and emit events:
//! - `CardGrid` / `GridState`: responsive layout, scrolling, hover hit testing
//! - `ViewAllButton`: the single navigation control
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as props, not by reaching into global
//! state. The hovered book id comes from core `App` state and is passed
//! down; components never own it.
//!
//! ```rust,ignore
//! CardGrid::new(&app.books, app.hovered_book, &mut tui.grid).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs            (this file)
//! ├── title_bar.rs      (Top status bar)
//! ├── section_header.rs (Heading)
//! ├── book_card.rs      (Single card widget)
//! ├── card_grid.rs      (Scrollable grid of cards)
//! └── view_all.rs       (Navigation button)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod book_card;
pub mod card_grid;
pub mod section_header;
pub mod view_all;
pub use book_card::BookCard;
pub use card_grid::{CardGrid, GridEvent, GridState};
pub use section_header::SectionHeader;
pub use view_all::{ViewAllButton, ViewAllEvent};
