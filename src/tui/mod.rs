//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the featured
//! books screen, and translates mouse and keyboard input into
//! `core::action::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Revealing** (cards still fading in): draws every ~80ms so each card
//!   appears on its stagger tick.
//! - **Idle**: sleeps up to 500ms, only redraws on events or terminal resize.
//!
//! ## Hover
//!
//! Mouse moves are hit-tested against the layout cached by the last draw.
//! A change of card under the pointer becomes `PointerLeave(old)` followed by
//! `PointerEnter(new)`, so core state never sees a hover it didn't ask for.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::action::{Action, Effect, pointer_transition, update};
use crate::core::book::BookSummary;
use crate::core::config::ResolvedConfig;
use crate::core::navigation::{History, Navigator};
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::card_grid::revealed_count;
use crate::tui::components::{GridEvent, GridState, ViewAllButton, ViewAllEvent};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Frame interval while cards are still being revealed.
const ANIMATION_TICK: Duration = Duration::from_millis(80);
/// Longest wait for input when nothing is animating.
const IDLE_TICK: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core state)
pub struct TuiState {
    pub grid: GridState,
    pub view_all: ViewAllButton,
    started: Instant,
    reveal_stagger_ms: u64,
}

impl TuiState {
    pub fn new(reveal_stagger_ms: u64) -> Self {
        Self {
            grid: GridState::new(),
            view_all: ViewAllButton::new(),
            started: Instant::now(),
            reveal_stagger_ms,
        }
    }

    /// Update how many cards are shown. Returns true while some are still hidden.
    pub fn advance_reveal(&mut self, total: usize) -> bool {
        let elapsed = self.started.elapsed().as_millis();
        self.grid.revealed = revealed_count(elapsed, self.reveal_stagger_ms, total);
        self.grid.revealed < total
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse capture)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

pub fn run(config: &ResolvedConfig, books: Vec<BookSummary>) -> std::io::Result<()> {
    let mut app = App::new(books);
    let mut navigator = History::new();
    let mut tui = TuiState::new(config.reveal_stagger_ms);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    let mut needs_redraw = true; // Force first frame

    loop {
        let animating = tui.advance_reveal(app.books.len());
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let location = navigator.current().path();
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, location))?;
            needs_redraw = false;
        }

        let timeout = if animating { ANIMATION_TICK } else { IDLE_TICK };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            for action in dispatch(&app, &mut tui, &event) {
                debug!("Dispatching {:?}", action);
                match update(&mut app, action) {
                    Effect::Quit => should_quit = true,
                    Effect::Navigate(route) => {
                        navigator.navigate(route);
                        app.status_message = format!("Navigated to {}", route.path());
                    }
                    Effect::None => {}
                }
            }
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Route one terminal event through the components and collect the core
/// actions it produces.
fn dispatch(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Vec<Action> {
    match event {
        TuiEvent::Quit => vec![Action::Quit],
        TuiEvent::HoverNext => vec![Action::HoverNext(tui.grid.revealed)],
        TuiEvent::HoverPrev => vec![Action::HoverPrev(tui.grid.revealed)],
        // Resize just needs a redraw (already flagged by the caller)
        TuiEvent::Resize => Vec::new(),
        _ => {
            let mut actions = Vec::new();
            if let Some(GridEvent::Hover(index)) = tui.grid.handle_event(event) {
                let target = index.and_then(|i| app.books.get(i)).map(|book| book.id);
                actions.extend(pointer_transition(app.hovered_book, target));
            }
            if let Some(ViewAllEvent::Activate) = tui.view_all.handle_event(event) {
                if app.books.is_empty() {
                    warn!("View all requested with an empty featured list");
                }
                actions.push(Action::ViewAll);
            }
            actions
        }
    }
}
