//! Mapping from terminal events to domain input.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use crate::types::Tap;

/// Map a mouse event to a pointer tap, if it is one.
///
/// Only a left-button press counts; drags, releases and scrolls are not
/// taps.
pub fn tap_from_mouse(ev: MouseEvent) -> Option<Tap> {
    match ev.kind {
        MouseEventKind::Down(MouseButton::Left) => Some(Tap {
            x: ev.column,
            y: ev.row,
        }),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::empty(),
        }
    }

    #[test]
    fn test_left_button_down_is_a_tap() {
        let ev = mouse(MouseEventKind::Down(MouseButton::Left), 12, 7);
        assert_eq!(tap_from_mouse(ev), Some(Tap { x: 12, y: 7 }));
    }

    #[test]
    fn test_other_mouse_events_are_ignored() {
        assert_eq!(
            tap_from_mouse(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            None
        );
        assert_eq!(
            tap_from_mouse(mouse(MouseEventKind::Up(MouseButton::Left), 1, 1)),
            None
        );
        assert_eq!(
            tap_from_mouse(mouse(MouseEventKind::Moved, 1, 1)),
            None
        );
        assert_eq!(
            tap_from_mouse(mouse(MouseEventKind::Drag(MouseButton::Left), 1, 1)),
            None
        );
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('Q'))));
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
    }

    #[test]
    fn test_non_quit_keys() {
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Enter)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char(' '))));
    }
}
