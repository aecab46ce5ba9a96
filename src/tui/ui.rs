use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardGrid, SectionHeader, TitleBar, ViewAllButton};

/// Split the screen into title bar, section header, grid and view-all rows.
pub fn screen_layout(area: Rect) -> [Rect; 4] {
    use Constraint::{Length, Min};
    Layout::vertical([
        Length(1),
        Length(SectionHeader::HEIGHT),
        Min(0),
        Length(ViewAllButton::HEIGHT),
    ])
    .areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, location: &str) {
    let [title_area, header_area, grid_area, view_all_area] = screen_layout(frame.area());

    TitleBar::new(location.to_string(), app.status_message.clone()).render(frame, title_area);
    SectionHeader.render(frame, header_area);
    CardGrid::new(&app.books, app.hovered_book, &mut tui.grid).render(frame, grid_area);
    tui.view_all.render(frame, view_all_area);
}
