//! Logical input events
//!
//! The simulation never talks to an input device. Whatever collects raw
//! keyboard and pointer events translates them into these and hands the
//! driver one batch per tick.

use serde::{Deserialize, Serialize};

/// A key, independent of any windowing or terminal backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyCode {
    Char(char),
    Up,
    Down,
    Left,
    Right,
}

impl KeyCode {
    /// True if this is the given letter, ignoring case
    pub fn is_char(self, c: char) -> bool {
        matches!(self, KeyCode::Char(k) if k.eq_ignore_ascii_case(&c))
    }
}

/// One input event delivered to a game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    KeyDown { key: KeyCode },
    KeyUp { key: KeyCode },
    PointerDown { x: f32, y: f32 },
    Quit,
}

impl InputEvent {
    pub fn key_down(key: KeyCode) -> Self {
        InputEvent::KeyDown { key }
    }

    pub fn key_up(key: KeyCode) -> Self {
        InputEvent::KeyUp { key }
    }

    pub fn pointer_down(x: f32, y: f32) -> Self {
        InputEvent::PointerDown { x, y }
    }
}

/// Check if a batch asks the process to stop
pub fn should_quit(events: &[InputEvent]) -> bool {
    events.iter().any(|e| matches!(e, InputEvent::Quit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_char_ignores_case() {
        assert!(KeyCode::Char('P').is_char('p'));
        assert!(KeyCode::Char('r').is_char('R'));
        assert!(!KeyCode::Up.is_char('u'));
    }

    #[test]
    fn test_should_quit() {
        assert!(!should_quit(&[InputEvent::key_down(KeyCode::Up)]));
        assert!(should_quit(&[
            InputEvent::key_down(KeyCode::Up),
            InputEvent::Quit
        ]));
    }

    #[test]
    fn test_event_json_shape() {
        let json = r#"[{"type":"key_down","key":{"char":"w"}},
                       {"type":"key_up","key":"up"},
                       {"type":"pointer_down","x":250.0,"y":40.0},
                       {"type":"quit"}]"#;
        let events: Vec<InputEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(
            events,
            vec![
                InputEvent::key_down(KeyCode::Char('w')),
                InputEvent::key_up(KeyCode::Up),
                InputEvent::pointer_down(250.0, 40.0),
                InputEvent::Quit,
            ]
        );
    }
}
