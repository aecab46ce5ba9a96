//! # View All Button
//!
//! Centered outline button under the grid. Clicking it (or pressing Enter)
//! asks for the full book list; where that leads is up to the navigator.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Paragraph};

use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;

pub const LABEL: &str = "View All Books";
/// Horizontal padding inside the border, per side.
const PADDING: u16 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAllEvent {
    Activate,
}

/// Persistent state: where the button was last drawn, and whether the
/// pointer is over it.
#[derive(Default)]
pub struct ViewAllButton {
    pub area: Rect,
    pub hovered: bool,
}

impl ViewAllButton {
    /// Border + label + border.
    pub const HEIGHT: u16 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// The button's rectangle, centered horizontally in `area`.
    pub fn button_rect(area: Rect) -> Rect {
        let width = LABEL.len() as u16 + 2 * PADDING + 2;
        let [button] = Layout::horizontal([Constraint::Length(width)])
            .flex(Flex::Center)
            .areas(area);
        Rect {
            height: area.height.min(Self::HEIGHT),
            ..button
        }
    }

    fn contains(&self, column: u16, row: u16) -> bool {
        self.area.contains(Position::new(column, row))
    }
}

impl Component for ViewAllButton {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        self.area = Self::button_rect(area);

        let style = if self.hovered {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let button = Paragraph::new(LABEL)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::bordered().border_style(style));

        frame.render_widget(button, self.area);
    }
}

impl EventHandler for ViewAllButton {
    type Event = ViewAllEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ViewAllEvent> {
        match event {
            TuiEvent::MouseMove(column, row)
            | TuiEvent::WheelUp(column, row)
            | TuiEvent::WheelDown(column, row) => {
                self.hovered = self.contains(*column, *row);
                None
            }
            TuiEvent::MouseClick(column, row) if self.contains(*column, *row) => {
                Some(ViewAllEvent::Activate)
            }
            TuiEvent::Submit => Some(ViewAllEvent::Activate),
            _ => None,
        }
    }
}
