//! # TitleBar Component
//!
//! Top status bar: the current route and, when set, a status message.
//!
//! Stateless: both props come from outside. The location from the
//! navigator, the status from core `App` state.
//!
//! 1. **Status message**: `"Folio | /books | Navigated to /books"`
//! 2. **Default**: `"Folio | /"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

pub struct TitleBar {
    /// Path of the current route (e.g., "/")
    pub location: String,
    /// Status message (e.g., "Navigated to /books")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(location: String, status_message: String) -> Self {
        Self {
            location,
            status_message,
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Folio", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::styled(self.location.clone(), Style::default().fg(Color::Cyan)),
        ];
        if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
