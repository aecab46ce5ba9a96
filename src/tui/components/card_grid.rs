//! # Card Grid Component
//!
//! Lays the featured books out as a responsive grid inside a scroll view.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `GridState` lives in `TuiState` (scroll offset, last layout, reveal count)
//! - `CardGrid` is created each frame with borrowed books and state
//!
//! The layout computed during render is cached on `GridState` so mouse
//! events can be hit-tested against exactly what is on screen.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Position, Rect, Size};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::book::{BookId, BookSummary};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::book_card::{BookCard, CARD_HEIGHT};
use crate::tui::event::TuiEvent;

/// Horizontal space between cards.
pub const COLUMN_GAP: u16 = 2;
/// Vertical space between card rows.
pub const ROW_GAP: u16 = 1;
/// Viewport width at which the grid goes to two columns.
pub const SM_MIN_WIDTH: u16 = 64;
/// Viewport width at which the grid goes to four columns.
pub const LG_MIN_WIDTH: u16 = 120;

const EMPTY_MESSAGE: &str = "No featured books right now.";

/// Persistent state for the grid.
#[derive(Default)]
pub struct GridState {
    pub scroll_state: ScrollViewState,
    /// Screen area the grid was last drawn into.
    pub viewport: Rect,
    /// Card rectangles in content coordinates, in list order.
    pub card_rects: Vec<Rect>,
    pub content_height: u16,
    /// How many cards (from the front) are currently shown.
    pub revealed: usize,
    /// Last screen cell the pointer was seen at.
    pub pointer: Option<Position>,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_offset = self.content_height.saturating_sub(self.viewport.height);
        let current = self.scroll_state.offset();
        if current.y > max_offset {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_offset,
            });
        }
    }
}

/// Events emitted by the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridEvent {
    /// The pointer is now over the card at this list index, or over no card.
    Hover(Option<usize>),
}

impl EventHandler for GridState {
    type Event = GridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GridEvent> {
        match event {
            TuiEvent::MouseMove(column, row) => {
                self.pointer = Some(Position::new(*column, *row));
                Some(GridEvent::Hover(self.card_under_pointer()))
            }
            TuiEvent::WheelUp(column, row) => {
                self.pointer = Some(Position::new(*column, *row));
                self.scroll_state.scroll_up();
                self.rehover()
            }
            TuiEvent::WheelDown(column, row) => {
                self.pointer = Some(Position::new(*column, *row));
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                self.rehover()
            }
            TuiEvent::ScrollUp => {
                self.scroll_state.scroll_up();
                self.rehover()
            }
            TuiEvent::ScrollDown => {
                self.scroll_state.scroll_down();
                self.clamp_scroll();
                self.rehover()
            }
            TuiEvent::ScrollPageUp => {
                self.scroll_state.scroll_page_up();
                self.rehover()
            }
            TuiEvent::ScrollPageDown => {
                self.scroll_state.scroll_page_down();
                self.clamp_scroll();
                self.rehover()
            }
            _ => None,
        }
    }
}

/// Transient render wrapper for the grid.
pub struct CardGrid<'a> {
    books: &'a [BookSummary],
    hovered: Option<BookId>,
    state: &'a mut GridState,
}

impl<'a> CardGrid<'a> {
    pub fn new(books: &'a [BookSummary], hovered: Option<BookId>, state: &'a mut GridState) -> Self {
        Self {
            books,
            hovered,
            state,
        }
    }
}

impl Component for CardGrid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.state.viewport = area;

        if self.books.is_empty() {
            self.state.card_rects.clear();
            self.state.content_height = 0;
            let empty = Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center);
            frame.render_widget(empty, area);
            return;
        }

        let columns = column_count(area.width);
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar safe area
        let (card_rects, content_height) = grid_layout(columns, content_width, self.books.len());
        self.state.content_height = content_height;
        self.state.clamp_scroll();

        let mut scroll_view = ScrollView::new(Size::new(content_width, content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for (book, rect) in self
            .books
            .iter()
            .zip(&card_rects)
            .take(self.state.revealed)
        {
            let hovered = self.hovered == Some(book.id);
            scroll_view.render_widget(BookCard::new(book, hovered), *rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
        self.state.card_rects = card_rects;
    }
}

/// Columns for a viewport width: 1, 2 or 4.
pub fn column_count(width: u16) -> u16 {
    if width >= LG_MIN_WIDTH {
        4
    } else if width >= SM_MIN_WIDTH {
        2
    } else {
        1
    }
}

/// Card rectangles (content coordinates, row-major) and total content height.
///
/// Content coordinates are `u16`, so cards whose rows would start past
/// `u16::MAX` are not placed: the result may hold fewer than `count` rects.
pub fn grid_layout(columns: u16, width: u16, count: usize) -> (Vec<Rect>, u16) {
    let columns = usize::from(columns.max(1));
    let card_width = width.saturating_sub(COLUMN_GAP * (columns as u16 - 1)) / columns as u16;
    let row_stride = usize::from(CARD_HEIGHT + ROW_GAP);
    let max_rows = (usize::from(u16::MAX) - usize::from(CARD_HEIGHT)) / row_stride + 1;
    let rows = count.div_ceil(columns).min(max_rows);
    let placed = count.min(rows * columns);
    if placed < count {
        debug!("Grid holds {} of {} cards", placed, count);
    }

    let rects = (0..placed)
        .map(|index| {
            let column = (index % columns) as u16;
            let row = index / columns;
            Rect::new(
                column * card_width.saturating_add(COLUMN_GAP),
                (row * row_stride) as u16,
                card_width,
                CARD_HEIGHT,
            )
        })
        .collect();

    let height = if rows == 0 {
        0
    } else {
        (rows * row_stride - usize::from(ROW_GAP)) as u16
    };
    (rects, height)
}

/// Hit test: which card (list index), if any, is under a screen cell.
pub fn hit_test_card(
    column: u16,
    row: u16,
    viewport: Rect,
    scroll_offset_y: u16,
    card_rects: &[Rect],
) -> Option<usize> {
    if !viewport.contains(Position::new(column, row)) {
        return None;
    }
    let content = Position::new(
        column - viewport.x,
        (row - viewport.y).saturating_add(scroll_offset_y),
    );
    card_rects.iter().position(|rect| rect.contains(content))
}

/// Number of cards shown `elapsed_ms` after start when each waits `stagger_ms`
/// longer than the previous one. The first card is shown immediately.
pub fn revealed_count(elapsed_ms: u128, stagger_ms: u64, total: usize) -> usize {
    if stagger_ms == 0 {
        return total;
    }
    let shown = elapsed_ms / u128::from(stagger_ms) + 1;
    usize::try_from(shown).unwrap_or(usize::MAX).min(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::featured_books;
    use crate::test_support::buffer_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw_grid(
        width: u16,
        height: u16,
        books: &[BookSummary],
        hovered: Option<BookId>,
        state: &mut GridState,
    ) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                CardGrid::new(books, hovered, state).render(f, area);
            })
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn revealed_state(count: usize) -> GridState {
        GridState {
            revealed: count,
            ..GridState::new()
        }
    }

    #[test]
    fn test_column_breakpoints() {
        assert_eq!(column_count(40), 1);
        assert_eq!(column_count(SM_MIN_WIDTH - 1), 1);
        assert_eq!(column_count(SM_MIN_WIDTH), 2);
        assert_eq!(column_count(LG_MIN_WIDTH - 1), 2);
        assert_eq!(column_count(LG_MIN_WIDTH), 4);
        assert_eq!(column_count(200), 4);
    }

    #[test]
    fn test_grid_layout_four_columns() {
        let (rects, height) = grid_layout(4, 119, 4);
        assert_eq!(rects.len(), 4);
        assert_eq!(height, CARD_HEIGHT);
        assert!(rects.iter().all(|r| r.y == 0 && r.height == CARD_HEIGHT));
        assert_eq!(rects[1].x, rects[0].right() + COLUMN_GAP);
        assert!(rects[3].right() <= 119);
    }

    #[test]
    fn test_grid_layout_two_columns_wraps() {
        let (rects, height) = grid_layout(2, 80, 4);
        assert_eq!(rects[2].x, 0);
        assert_eq!(rects[2].y, CARD_HEIGHT + ROW_GAP);
        assert_eq!(height, 2 * CARD_HEIGHT + ROW_GAP);
    }

    #[test]
    fn test_grid_layout_empty() {
        let (rects, height) = grid_layout(4, 120, 0);
        assert!(rects.is_empty());
        assert_eq!(height, 0);
    }

    #[test]
    fn test_grid_layout_caps_huge_list() {
        let (rects, height) = grid_layout(1, 39, 5_000);
        assert!(!rects.is_empty() && rects.len() < 5_000);
        let last = rects[rects.len() - 1];
        assert!(last.bottom() <= height);
        assert!(rects.windows(2).all(|pair| pair[1].y > pair[0].y));

        let (four_wide, _) = grid_layout(4, 119, 20_000);
        assert_eq!(four_wide.len() % 4, 0);
        assert!(four_wide.len() < 20_000);
    }

    #[test]
    fn test_hit_test_card() {
        let viewport = Rect::new(0, 5, 120, 20);
        let (rects, _) = grid_layout(4, 119, 4);

        // Inside the second card
        let x = rects[1].x + 2;
        assert_eq!(hit_test_card(x, 6, viewport, 0, &rects), Some(1));
        // In the gap between cards
        let gap_x = rects[0].right();
        assert_eq!(hit_test_card(gap_x, 6, viewport, 0, &rects), None);
        // Above the viewport
        assert_eq!(hit_test_card(x, 4, viewport, 0, &rects), None);
    }

    #[test]
    fn test_hit_test_accounts_for_scroll() {
        let viewport = Rect::new(0, 0, 40, 10);
        let (rects, _) = grid_layout(1, 39, 4);
        // Scrolled so the second card's top row is at the top of the viewport
        let offset = CARD_HEIGHT + ROW_GAP;
        assert_eq!(hit_test_card(3, 0, viewport, offset, &rects), Some(1));
        assert_eq!(hit_test_card(3, 0, viewport, 0, &rects), Some(0));
    }

    #[test]
    fn test_revealed_count() {
        assert_eq!(revealed_count(0, 150, 4), 1);
        assert_eq!(revealed_count(149, 150, 4), 1);
        assert_eq!(revealed_count(150, 150, 4), 2);
        assert_eq!(revealed_count(450, 150, 4), 4);
        assert_eq!(revealed_count(10_000, 150, 4), 4);
        assert_eq!(revealed_count(0, 0, 4), 4);
        assert_eq!(revealed_count(500, 150, 0), 0);
    }

    #[test]
    fn test_renders_four_cards() {
        let books = featured_books();
        let mut state = revealed_state(books.len());
        let text = draw_grid(120, CARD_HEIGHT, &books, None, &mut state);

        assert_eq!(state.card_rects.len(), 4);
        for book in &books {
            assert!(text.contains(&format!("by {}", book.author)));
        }
    }

    #[test]
    fn test_hover_overlay_only_on_hovered_card() {
        let books = featured_books();
        let mut state = revealed_state(books.len());
        let text = draw_grid(120, CARD_HEIGHT, &books, Some(2), &mut state);
        assert_eq!(text.matches("View").count(), 1);
        assert_eq!(text.matches("Save").count(), 1);

        // The overlay row sits inside card 2's rectangle
        let rect = state.card_rects[1];
        let buffer_row = text.lines().nth((1 + 7 / 2) as usize).unwrap();
        let overlay_col = buffer_row.chars().position(|c| c == '◉').unwrap() as u16;
        assert!(overlay_col >= rect.x && overlay_col < rect.right());

        let idle = draw_grid(120, CARD_HEIGHT, &books, None, &mut state);
        assert!(!idle.contains("View"));
    }

    #[test]
    fn test_unrevealed_cards_are_not_drawn() {
        let books = featured_books();
        let mut state = revealed_state(2);
        let text = draw_grid(120, CARD_HEIGHT, &books, None, &mut state);
        assert!(text.contains("by Gerald M. Weinberg"));
        assert!(text.contains("by Robert C. Martin"));
        assert!(!text.contains("by James Clear"));
        assert!(!text.contains("by Sun Tzu"));
    }

    #[test]
    fn test_mouse_move_emits_hover() {
        let books = featured_books();
        let mut state = revealed_state(books.len());
        draw_grid(120, CARD_HEIGHT, &books, None, &mut state);

        let target = state.card_rects[2];
        let event = TuiEvent::MouseMove(target.x + 1, target.y + 1);
        assert_eq!(state.handle_event(&event), Some(GridEvent::Hover(Some(2))));
    }

    #[test]
    fn test_mouse_over_unrevealed_card_is_no_hover() {
        let books = featured_books();
        let mut state = revealed_state(1);
        draw_grid(120, CARD_HEIGHT, &books, None, &mut state);

        let target = state.card_rects[3];
        let event = TuiEvent::MouseMove(target.x + 1, target.y + 1);
        assert_eq!(state.handle_event(&event), Some(GridEvent::Hover(None)));
    }

    #[test]
    fn test_scroll_rehovers_only_with_known_pointer() {
        let books = featured_books();
        let mut state = revealed_state(books.len());
        draw_grid(40, CARD_HEIGHT + 2, &books, None, &mut state);
        assert_eq!(state.handle_event(&TuiEvent::ScrollDown), None);

        // Pointer on the top row: over card 1 until the offset reaches the gap
        state.handle_event(&TuiEvent::MouseMove(3, 0));
        assert_eq!(
            state.handle_event(&TuiEvent::ScrollUp),
            Some(GridEvent::Hover(Some(0)))
        );
        for _ in 0..CARD_HEIGHT - 1 {
            state.handle_event(&TuiEvent::ScrollDown);
        }
        assert_eq!(
            state.handle_event(&TuiEvent::ScrollDown),
            Some(GridEvent::Hover(None))
        );
    }

    #[test]
    fn test_scroll_is_clamped() {
        let books = featured_books();
        let mut state = revealed_state(books.len());
        // One column, four cards, viewport shows a bit more than one card
        draw_grid(40, CARD_HEIGHT + 2, &books, None, &mut state);
        for _ in 0..200 {
            state.handle_event(&TuiEvent::ScrollDown);
        }
        let max = state.content_height - state.viewport.height;
        assert_eq!(state.scroll_state.offset().y, max);
    }

    #[test]
    fn test_empty_catalog_message() {
        let mut state = revealed_state(0);
        let text = draw_grid(80, 10, &[], None, &mut state);
        assert!(text.contains(EMPTY_MESSAGE));
        assert!(state.card_rects.is_empty());
    }
}
