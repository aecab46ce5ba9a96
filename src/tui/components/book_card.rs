//! # Book Card
//!
//! One cell of the featured grid.
//!
//! ```text
//! ┌──────────────────────────┐
//! │ Bestseller               │  ┐
//! │                          │  │
//! │    The Psychology of     │  │ cover (record color)
//! │       Programming        │  │ hover: ◉ View  ♥ Save
//! │    Gerald M. Weinberg    │  │
//! │                          │  │
//! │                          │  ┘
//! │ Programming    Paperback │  ┐
//! │ The Psychology of Progr… │  │
//! │ by Gerald M. Weinberg    │  │ details
//! │ ★★★★☆ 4.8 (124)          │  │
//! │ $29.99 $39.99    [+ Add] │  ┘
//! └──────────────────────────┘
//! ```
//!
//! A transient widget: built each frame from a borrowed record and the
//! hover flag, which the parent grid reads from core state.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::book::{BookSummary, CoverColor, STAR_COUNT};

pub const COVER_HEIGHT: u16 = 7;
pub const DETAILS_HEIGHT: u16 = 5;
/// Cover + details + top and bottom border.
pub const CARD_HEIGHT: u16 = COVER_HEIGHT + DETAILS_HEIGHT + 2;

/// Title lines on the cover before ellipsizing.
const COVER_TITLE_LINES: usize = 2;

pub const FILLED_STAR: &str = "★";
pub const EMPTY_STAR: &str = "☆";
pub const QUICK_VIEW_LABEL: &str = " ◉ View ";
pub const WISHLIST_LABEL: &str = " ♥ Save ";
pub const ADD_LABEL: &str = "[+ Add]";

#[derive(Clone, Copy)]
pub struct BookCard<'a> {
    pub book: &'a BookSummary,
    /// Whether the hover overlay is shown
    pub hovered: bool,
}

impl<'a> BookCard<'a> {
    pub fn new(book: &'a BookSummary, hovered: bool) -> Self {
        Self { book, hovered }
    }

    fn render_cover(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(cover_color(self.book.cover_color)));

        let text_width = area.width.saturating_sub(2);
        let title_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
        let mut lines: Vec<Line> = wrap_clamped(&self.book.title, text_width as usize, COVER_TITLE_LINES)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, title_style)))
            .collect();
        lines.push(Line::from(Span::styled(
            truncate(&self.book.author, text_width as usize),
            Style::default().fg(Color::White),
        )));

        let height = (lines.len() as u16).min(area.height);
        let text_area = Rect::new(
            area.x + 1,
            area.y + (area.height - height) / 2,
            text_width,
            height,
        );
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .render(text_area, buf);

        if let Some(badge) = &self.book.badge {
            let label = truncate(&format!(" {badge} "), text_width as usize);
            buf.set_string(
                area.x + 1,
                area.y,
                label,
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::White)
                    .add_modifier(Modifier::BOLD),
            );
        }
    }

    /// Dim the cover and lay the quick-view/wishlist buttons across its middle.
    fn render_overlay(&self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().add_modifier(Modifier::DIM));

        let row = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
        for x in row.left()..row.right() {
            buf[(x, row.y)].set_symbol(" ");
        }
        buf.set_style(row, Style::default().bg(Color::Black));

        let button = Style::default()
            .fg(Color::Black)
            .bg(Color::Gray)
            .remove_modifier(Modifier::DIM);
        Line::from(vec![
            Span::styled(QUICK_VIEW_LABEL, button),
            Span::raw(" "),
            Span::styled(WISHLIST_LABEL, button),
        ])
        .centered()
        .render(row, buf);
    }

    fn render_details(&self, area: Rect, buf: &mut Buffer) {
        let area = Rect::new(area.x + 1, area.y, area.width.saturating_sub(2), area.height);
        let width = area.width as usize;
        let muted = Style::default().fg(Color::DarkGray);
        let rows: [Rect; DETAILS_HEIGHT as usize] =
            Layout::vertical([Constraint::Length(1); DETAILS_HEIGHT as usize]).areas(area);

        // Category chip left, format right
        Line::from(Span::styled(self.book.format.label(), muted))
            .right_aligned()
            .render(rows[0], buf);
        Line::from(Span::styled(
            truncate(&format!(" {} ", self.book.category), width),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        ))
        .render(rows[0], buf);

        Line::from(Span::styled(
            truncate(&self.book.title, width),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ))
        .render(rows[1], buf);

        Line::from(Span::styled(
            truncate(&format!("by {}", self.book.author), width),
            Style::default().fg(Color::Gray),
        ))
        .render(rows[2], buf);

        Line::from(rating_spans(self.book)).render(rows[3], buf);

        Line::from(Span::styled(ADD_LABEL, Style::default().fg(Color::Black).bg(Color::Cyan)))
            .right_aligned()
            .render(rows[4], buf);
        Line::from(price_spans(self.book)).render(rows[4], buf);
    }
}

impl Widget for BookCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_style = if self.hovered {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered().border_style(border_style);
        let inner = block.inner(area);
        block.render(area, buf);

        let [cover_area, details_area] = Layout::vertical([
            Constraint::Length(COVER_HEIGHT),
            Constraint::Length(DETAILS_HEIGHT),
        ])
        .areas(inner);

        self.render_cover(cover_area, buf);
        if self.hovered {
            self.render_overlay(cover_area, buf);
        }
        self.render_details(details_area, buf);
    }
}

/// Five stars (`filled_stars()` of them filled), then `rating (reviews)`.
pub fn rating_spans(book: &BookSummary) -> Vec<Span<'static>> {
    let filled = book.filled_stars();
    vec![
        Span::styled(FILLED_STAR.repeat(filled), Style::default().fg(Color::Yellow)),
        Span::styled(
            EMPTY_STAR.repeat(STAR_COUNT - filled),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!(" {} ({})", book.rating, book.review_count),
            Style::default().fg(Color::DarkGray),
        ),
    ]
}

/// Current price, plus the crossed-out original when there is one.
pub fn price_spans(book: &BookSummary) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(
        format!("${}", book.price),
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    )];
    if let Some(original) = book.original_price {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("${original}"),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT),
        ));
    }
    spans
}

pub fn cover_color(color: CoverColor) -> Color {
    match color {
        CoverColor::Blue => Color::Blue,
        CoverColor::Green => Color::Green,
        CoverColor::Purple => Color::Magenta,
        CoverColor::Red => Color::Red,
        CoverColor::Yellow => Color::Yellow,
        CoverColor::Cyan => Color::Cyan,
        CoverColor::Magenta => Color::LightMagenta,
        CoverColor::Gray => Color::DarkGray,
    }
}

/// Cut `text` to `max_width` display columns, ending in "…" when cut.
pub fn truncate(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Word-wrap to `width`, keeping at most `max_lines` and ellipsizing the last.
fn wrap_clamped(text: &str, width: usize, max_lines: usize) -> Vec<String> {
    if width == 0 || max_lines == 0 {
        return Vec::new();
    }
    let wrapped = textwrap::wrap(text, width);
    let mut lines: Vec<String> = wrapped
        .iter()
        .take(max_lines)
        .map(|line| line.to_string())
        .collect();
    if wrapped.len() > max_lines
        && let Some(last) = lines.last_mut()
    {
        *last = truncate(&format!("{} {}", last, wrapped[max_lines]), width);
    }
    lines
}
