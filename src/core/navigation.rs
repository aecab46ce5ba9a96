//! # Navigation
//!
//! The featured view links to exactly one place: the full book list. Moving
//! there is someone else's job; the view only asks a [`Navigator`] to go.

use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Books,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Books => "/books",
        }
    }
}

/// Destination of the "View All Books" control.
pub const VIEW_ALL_ROUTE: Route = Route::Books;

/// Routing collaborator consumed by the view.
pub trait Navigator {
    fn navigate(&mut self, route: Route);
    fn current(&self) -> Route;
}

/// In-process navigator for the terminal: remembers where we have been.
pub struct History {
    visited: Vec<Route>,
}

impl History {
    pub fn new() -> Self {
        Self {
            visited: vec![Route::Home],
        }
    }

    pub fn visited(&self) -> &[Route] {
        &self.visited
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for History {
    fn navigate(&mut self, route: Route) {
        if self.current() == route {
            debug!("Already at {}", route.path());
            return;
        }
        info!("Navigating to {}", route.path());
        self.visited.push(route);
    }

    fn current(&self) -> Route {
        self.visited.last().copied().unwrap_or(Route::Home)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths() {
        assert_eq!(Route::Home.path(), "/");
        assert_eq!(Route::Books.path(), "/books");
        assert_eq!(VIEW_ALL_ROUTE.path(), "/books");
    }

    #[test]
    fn test_history_starts_at_home() {
        let history = History::new();
        assert_eq!(history.current(), Route::Home);
        assert_eq!(history.visited(), &[Route::Home]);
    }

    #[test]
    fn test_history_skips_repeat_navigation() {
        let mut history = History::new();
        history.navigate(Route::Books);
        history.navigate(Route::Books);
        assert_eq!(history.current(), Route::Books);
        assert_eq!(history.visited(), &[Route::Home, Route::Books]);
    }
}
