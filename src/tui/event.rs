use crossterm::event::{
    self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};
use log::warn;

/// TUI-specific input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TuiEvent {
    // Quitting
    Quit,      // Esc or q
    ForceQuit, // Ctrl+C

    // Bound keys
    ArrowRight,
    ArrowLeft,
    Space,
    Home,
    Enter,
    Tab,

    // Left mouse button, (column, row)
    MouseDown(u16, u16),
    MouseUp(u16, u16),

    Resize,
}

/// Poll for an event with timeout
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    match event::poll(timeout) {
        Ok(true) => {}
        Ok(false) => return None,
        Err(e) => {
            warn!("Event poll failed: {}", e);
            return None;
        }
    }
    match event::read() {
        Ok(event) => translate(event),
        Err(e) => {
            warn!("Event read failed: {}", e);
            None
        }
    }
}

/// Poll for an event without blocking (returns immediately)
pub fn poll_event_immediate() -> Option<TuiEvent> {
    poll_event_timeout(std::time::Duration::ZERO)
}

/// Map a raw crossterm event to the handful of inputs the storybook cares about.
pub fn translate(event: Event) -> Option<TuiEvent> {
    match event {
        Event::Key(key_event) => {
            if !matches!(key_event.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                return None;
            }
            log::debug!(
                "Key event: {:?} with modifiers {:?}",
                key_event.code,
                key_event.modifiers
            );
            match (key_event.modifiers, key_event.code) {
                (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::ForceQuit),
                (_, KeyCode::Esc) | (_, KeyCode::Char('q')) => Some(TuiEvent::Quit),
                (_, KeyCode::Right) => Some(TuiEvent::ArrowRight),
                (_, KeyCode::Left) => Some(TuiEvent::ArrowLeft),
                (_, KeyCode::Char(' ')) => Some(TuiEvent::Space),
                (_, KeyCode::Home) => Some(TuiEvent::Home),
                (_, KeyCode::Enter) => Some(TuiEvent::Enter),
                (_, KeyCode::Tab) => Some(TuiEvent::Tab),
                _ => None,
            }
        }
        Event::Mouse(mouse_event) => match mouse_event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                Some(TuiEvent::MouseDown(mouse_event.column, mouse_event.row))
            }
            MouseEventKind::Up(MouseButton::Left) => {
                Some(TuiEvent::MouseUp(mouse_event.column, mouse_event.row))
            }
            _ => None,
        },
        Event::Resize(_, _) => Some(TuiEvent::Resize),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseEvent};

    fn key(code: KeyCode, modifiers: KeyModifiers) -> Event {
        Event::Key(KeyEvent::new(code, modifiers))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_bound_keys_translate() {
        let cases = [
            (KeyCode::Right, TuiEvent::ArrowRight),
            (KeyCode::Left, TuiEvent::ArrowLeft),
            (KeyCode::Char(' '), TuiEvent::Space),
            (KeyCode::Home, TuiEvent::Home),
            (KeyCode::Enter, TuiEvent::Enter),
            (KeyCode::Tab, TuiEvent::Tab),
            (KeyCode::Esc, TuiEvent::Quit),
            (KeyCode::Char('q'), TuiEvent::Quit),
        ];
        for (code, expected) in cases {
            assert_eq!(translate(key(code, KeyModifiers::NONE)), Some(expected));
        }
    }

    #[test]
    fn test_ctrl_c_force_quits() {
        assert_eq!(
            translate(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(TuiEvent::ForceQuit)
        );
    }

    #[test]
    fn test_unbound_keys_are_dropped() {
        assert_eq!(translate(key(KeyCode::Char('x'), KeyModifiers::NONE)), None);
        assert_eq!(translate(key(KeyCode::Up, KeyModifiers::NONE)), None);
    }

    #[test]
    fn test_key_release_is_dropped() {
        let release = KeyEvent::new_with_kind_and_state(
            KeyCode::Right,
            KeyModifiers::NONE,
            KeyEventKind::Release,
            KeyEventState::NONE,
        );
        assert_eq!(translate(Event::Key(release)), None);
    }

    #[test]
    fn test_left_mouse_button_translates() {
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Left), 3, 4)),
            Some(TuiEvent::MouseDown(3, 4))
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Up(MouseButton::Left), 5, 6)),
            Some(TuiEvent::MouseUp(5, 6))
        );
        assert_eq!(
            translate(mouse(MouseEventKind::Down(MouseButton::Right), 3, 4)),
            None
        );
        assert_eq!(translate(mouse(MouseEventKind::Moved, 1, 1)), None);
    }
}
