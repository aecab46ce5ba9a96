//! # Section Header
//!
//! Centered heading above the grid: an outlined "Featured Collection" tag,
//! the section title and a one-line pitch.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::component::Component;

pub const EYEBROW: &str = "Featured Collection";
pub const HEADING: &str = "Trending Books This Week";
pub const SUBTITLE: &str = "Discover the most popular books our readers are loving right now";

pub struct SectionHeader;

impl SectionHeader {
    /// Rows used: tag, heading, subtitle, spacer.
    pub const HEIGHT: u16 = 4;
}

impl Component for SectionHeader {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(
                format!("( {EYEBROW} )"),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                HEADING,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::DarkGray))),
        ];

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
    }
}
