//! # Actions
//!
//! Everything that can happen in the featured view becomes an `Action`.
//! Pointer enters card 2? That's `Action::PointerEnter(2)`.
//! User clicks "View All Books"? That's `Action::ViewAll`.
//!
//! The `update()` function takes the current state and an action,
//! mutates the state, and returns an `Effect` for the adapter to carry out.
//! No I/O here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::debug;

use crate::core::book::BookId;
use crate::core::navigation::{Route, VIEW_ALL_ROUTE};
use crate::core::state::App;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    PointerEnter(BookId),
    PointerLeave(BookId),
    /// Keyboard hover: move to the next of the first `n` cards, wrapping.
    /// `n` is how many cards are on screen; the rest can't be hovered yet.
    HoverNext(usize),
    /// Keyboard hover: move to the previous of the first `n` cards, wrapping.
    HoverPrev(usize),
    ViewAll,
    Quit,
}

/// What the adapter must do after an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Navigate(Route),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::PointerEnter(id) => {
            if app.book(id).is_some() {
                debug!("Hover enter: {}", id);
                app.hovered_book = Some(id);
            } else {
                debug!("Ignoring hover on unknown book {}", id);
            }
            Effect::None
        }
        Action::PointerLeave(id) => {
            if app.hovered_book == Some(id) {
                debug!("Hover leave: {}", id);
                app.hovered_book = None;
            } else {
                debug!(
                    "Ignoring stale leave for {} (hovered: {:?})",
                    id, app.hovered_book
                );
            }
            Effect::None
        }
        Action::HoverNext(shown) => {
            step_hover(app, shown, 1);
            Effect::None
        }
        Action::HoverPrev(shown) => {
            step_hover(app, shown, -1);
            Effect::None
        }
        Action::ViewAll => Effect::Navigate(VIEW_ALL_ROUTE),
        Action::Quit => Effect::Quit,
    }
}

/// Translate "the pointer is now over `target`" into leave/enter actions.
///
/// Returns nothing when the hovered card did not change.
pub fn pointer_transition(current: Option<BookId>, target: Option<BookId>) -> Vec<Action> {
    if current == target {
        return Vec::new();
    }
    current
        .map(Action::PointerLeave)
        .into_iter()
        .chain(target.map(Action::PointerEnter))
        .collect()
}

fn step_hover(app: &mut App, shown: usize, step: isize) {
    let len = app.books.len().min(shown);
    if len == 0 {
        return;
    }
    let current = app
        .hovered_book
        .and_then(|id| app.position(id))
        .filter(|&pos| pos < len);
    let next = match current {
        Some(pos) => (pos as isize + step).rem_euclid(len as isize) as usize,
        None if step > 0 => 0,
        None => len - 1,
    };
    let target = Some(app.books[next].id);
    for action in pointer_transition(app.hovered_book, target) {
        update(app, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::state::App;
    use crate::test_support::test_app;

    #[test]
    fn test_pointer_enter_sets_hover() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::PointerEnter(2)), Effect::None);
        assert_eq!(app.hovered_book, Some(2));
        assert!(app.overlay_visible(2));
        for id in [1, 3, 4] {
            assert!(!app.overlay_visible(id));
        }
    }

    #[test]
    fn test_pointer_leave_clears_hover() {
        let mut app = test_app();
        update(&mut app, Action::PointerEnter(2));
        update(&mut app, Action::PointerLeave(2));
        assert!(app.hovered_book.is_none());
        assert!(app.books.iter().all(|b| !app.overlay_visible(b.id)));
    }

    #[test]
    fn test_stale_leave_keeps_current_hover() {
        let mut app = test_app();
        update(&mut app, Action::PointerEnter(1));
        update(&mut app, Action::PointerEnter(3));
        // Leave for card 1 arrives late
        update(&mut app, Action::PointerLeave(1));
        assert_eq!(app.hovered_book, Some(3));
    }

    #[test]
    fn test_enter_unknown_id_is_ignored() {
        let mut app = test_app();
        update(&mut app, Action::PointerEnter(42));
        assert!(app.hovered_book.is_none());
    }

    #[test]
    fn test_view_all_always_targets_books() {
        let mut app = test_app();
        assert_eq!(
            update(&mut app, Action::ViewAll),
            Effect::Navigate(Route::Books)
        );

        let mut empty = App::new(Vec::new());
        assert_eq!(
            update(&mut empty, Action::ViewAll),
            Effect::Navigate(Route::Books)
        );
    }

    #[test]
    fn test_quit_effect() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }

    #[test]
    fn test_pointer_transition() {
        assert!(pointer_transition(None, None).is_empty());
        assert!(pointer_transition(Some(2), Some(2)).is_empty());
        assert_eq!(
            pointer_transition(None, Some(2)),
            vec![Action::PointerEnter(2)]
        );
        assert_eq!(
            pointer_transition(Some(2), None),
            vec![Action::PointerLeave(2)]
        );
        assert_eq!(
            pointer_transition(Some(1), Some(4)),
            vec![Action::PointerLeave(1), Action::PointerEnter(4)]
        );
    }

    #[test]
    fn test_hover_next_wraps() {
        let mut app = test_app();
        update(&mut app, Action::HoverNext(4));
        assert_eq!(app.hovered_book, Some(1));
        for _ in 0..3 {
            update(&mut app, Action::HoverNext(4));
        }
        assert_eq!(app.hovered_book, Some(4));
        update(&mut app, Action::HoverNext(4));
        assert_eq!(app.hovered_book, Some(1));
    }

    #[test]
    fn test_hover_prev_from_idle_starts_at_last() {
        let mut app = test_app();
        update(&mut app, Action::HoverPrev(4));
        assert_eq!(app.hovered_book, Some(4));
        update(&mut app, Action::HoverPrev(4));
        assert_eq!(app.hovered_book, Some(3));
    }

    #[test]
    fn test_hover_keys_skip_unrevealed_cards() {
        let mut app = test_app();
        update(&mut app, Action::HoverNext(2));
        update(&mut app, Action::HoverNext(2));
        assert_eq!(app.hovered_book, Some(2));
        update(&mut app, Action::HoverNext(2));
        assert_eq!(app.hovered_book, Some(1));
        update(&mut app, Action::HoverPrev(2));
        assert_eq!(app.hovered_book, Some(2));
        assert_eq!(update(&mut app, Action::HoverNext(0)), Effect::None);
        assert_eq!(app.hovered_book, Some(2));
    }

    #[test]
    fn test_hover_keys_on_empty_list() {
        let mut app = App::new(Vec::new());
        update(&mut app, Action::HoverNext(4));
        update(&mut app, Action::HoverPrev(4));
        assert!(app.hovered_book.is_none());
    }
}
