//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // Refresh
    Refresh,
    PullStart { row: u16 },
    PullMove { row: u16 },
    PullRelease { row: u16 },

    // Load button
    LoadList,

    // List scrolling
    ScrollUp,
    ScrollDown,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Char('r') | KeyCode::F(5) => Some(UiEvent::Refresh),
        KeyCode::Char('l') | KeyCode::Enter => Some(UiEvent::LoadList),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::ScrollUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::ScrollDown),
        _ => None,
    }
}

/// Convert a mouse event to a UiEvent.
///
/// A left press on the button loads; a left press on the list starts a pull.
/// Drag and release are forwarded wherever they happen so a pull that leaves
/// the list still completes.
pub fn mouse_to_ui_event(
    mouse: MouseEvent,
    list_area: Rect,
    button_area: Rect,
    show_help: bool,
) -> Option<UiEvent> {
    let pos = Position::new(mouse.column, mouse.row);

    if show_help {
        return match mouse.kind {
            MouseEventKind::Down(_) => Some(UiEvent::CloseHelp),
            _ => None,
        };
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) if button_area.contains(pos) => {
            Some(UiEvent::LoadList)
        }
        MouseEventKind::Down(MouseButton::Left) if list_area.contains(pos) => {
            Some(UiEvent::PullStart { row: mouse.row })
        }
        MouseEventKind::Drag(MouseButton::Left) => Some(UiEvent::PullMove { row: mouse.row }),
        MouseEventKind::Up(MouseButton::Left) => Some(UiEvent::PullRelease { row: mouse.row }),
        MouseEventKind::ScrollUp => Some(UiEvent::ScrollUp),
        MouseEventKind::ScrollDown => Some(UiEvent::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_key_bindings() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('r')), false), Some(UiEvent::Refresh));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('l')), false), Some(UiEvent::LoadList));
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), false), Some(UiEvent::LoadList));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), false), Some(UiEvent::Quit));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('x')), false), None);
    }

    #[test]
    fn test_any_key_closes_help_except_ctrl_c() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('r')), true), Some(UiEvent::CloseHelp));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(ctrl_c, true), Some(UiEvent::Quit));
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut key = press(KeyCode::Char('r'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_ui_event(key, false), None);
    }

    #[test]
    fn test_mouse_press_targets() {
        let list = Rect::new(0, 1, 40, 10);
        let button = Rect::new(0, 12, 40, 3);

        let on_button = mouse(MouseEventKind::Down(MouseButton::Left), 5, 13);
        assert_eq!(mouse_to_ui_event(on_button, list, button, false), Some(UiEvent::LoadList));

        let on_list = mouse(MouseEventKind::Down(MouseButton::Left), 5, 2);
        assert_eq!(
            mouse_to_ui_event(on_list, list, button, false),
            Some(UiEvent::PullStart { row: 2 })
        );

        let outside = mouse(MouseEventKind::Down(MouseButton::Left), 5, 0);
        assert_eq!(mouse_to_ui_event(outside, list, button, false), None);
    }

    #[test]
    fn test_drag_and_release_anywhere() {
        let list = Rect::new(0, 1, 40, 10);
        let button = Rect::new(0, 12, 40, 3);

        let drag = mouse(MouseEventKind::Drag(MouseButton::Left), 5, 20);
        assert_eq!(
            mouse_to_ui_event(drag, list, button, false),
            Some(UiEvent::PullMove { row: 20 })
        );
        let up = mouse(MouseEventKind::Up(MouseButton::Left), 5, 20);
        assert_eq!(
            mouse_to_ui_event(up, list, button, false),
            Some(UiEvent::PullRelease { row: 20 })
        );
    }
}
