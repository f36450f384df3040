//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UiEvent {
    // Request list
    NavigateUp,
    NavigateDown,

    // Response panel
    ScrollUp,
    ScrollDown,

    SendRequest,

    /// Terminal was resized to (width, height)
    Resize(u16, u16),

    // System
    Quit,
}

/// Convert a key event to a UiEvent. On the load-error screen only quit keys map.
pub fn key_to_ui_event(key: KeyEvent, load_failed: bool) -> Option<UiEvent> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(UiEvent::Quit),
            _ => None,
        };
    }

    if load_failed {
        return match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::NavigateUp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::NavigateDown),
        KeyCode::Enter => Some(UiEvent::SendRequest),
        KeyCode::PageUp => Some(UiEvent::ScrollUp),
        KeyCode::PageDown => Some(UiEvent::ScrollDown),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Up), false), Some(UiEvent::NavigateUp));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('k')), false), Some(UiEvent::NavigateUp));
        assert_eq!(key_to_ui_event(press(KeyCode::Down), false), Some(UiEvent::NavigateDown));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('j')), false), Some(UiEvent::NavigateDown));
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), false), Some(UiEvent::SendRequest));
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), false), Some(UiEvent::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(ctrl_c, false), Some(UiEvent::Quit));
        assert_eq!(key_to_ui_event(ctrl_c, true), Some(UiEvent::Quit));
    }

    #[test]
    fn test_error_screen_only_maps_quit() {
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), true), None);
        assert_eq!(key_to_ui_event(press(KeyCode::Down), true), None);
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), true), Some(UiEvent::Quit));
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_ui_event(key, false), None);
    }
}
