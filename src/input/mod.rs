//! # Input Module
//!
//! Keyboard events and mouse sampling for the walkthrough programs.

pub mod mouse;

pub use mouse::*;

use macroquad::prelude::*;

/// An input event delivered to [`crate::App::event`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// The window close button was pressed
    Quit,
    /// A key went down this frame
    KeyDown(KeyCode),
    /// A key was released this frame
    KeyUp(KeyCode),
}

impl InputEvent {
    /// Returns true for key-down events.
    pub fn is_key_down(&self) -> bool {
        matches!(self, InputEvent::KeyDown(_))
    }
}

/// Input handler collecting per-frame events from macroquad.
///
/// Closing the window is routed through the event queue instead of ending
/// the process, so every program gets to run its quit step.
pub struct InputHandler {
    _private: (),
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

impl InputHandler {
    /// Creates a new input handler and takes over window-close handling.
    pub fn new() -> Self {
        prevent_quit();
        Self { _private: () }
    }

    /// Returns this frame's events: a close request first, then key downs,
    /// then key ups.
    pub fn poll(&self) -> Vec<InputEvent> {
        frame_events(is_quit_requested(), get_keys_pressed(), get_keys_released())
    }
}

/// Orders one frame's raw input: a close request first, then key downs,
/// then key ups.
pub fn frame_events(
    quit_requested: bool,
    pressed: impl IntoIterator<Item = KeyCode>,
    released: impl IntoIterator<Item = KeyCode>,
) -> Vec<InputEvent> {
    let mut events = Vec::new();

    if quit_requested {
        events.push(InputEvent::Quit);
    }

    events.extend(pressed.into_iter().map(InputEvent::KeyDown));
    events.extend(released.into_iter().map(InputEvent::KeyUp));

    events
}

/// Renders a key the way its keycode prints as a character.
///
/// Letters come out lowercase, digits and punctuation as themselves, and
/// anything without a printable form by name.
///
/// # Examples
///
/// ```
/// use macroquad::prelude::KeyCode;
/// use primer::key_label;
///
/// assert_eq!(key_label(KeyCode::A), "a");
/// assert_eq!(key_label(KeyCode::Key7), "7");
/// assert_eq!(key_label(KeyCode::Escape), "Escape");
/// ```
pub fn key_label(key: KeyCode) -> String {
    let printable = match key {
        KeyCode::Space => Some(' '),
        KeyCode::Apostrophe => Some('\''),
        KeyCode::Comma => Some(','),
        KeyCode::Minus => Some('-'),
        KeyCode::Period => Some('.'),
        KeyCode::Slash => Some('/'),
        KeyCode::Semicolon => Some(';'),
        KeyCode::Equal => Some('='),
        KeyCode::LeftBracket => Some('['),
        KeyCode::Backslash => Some('\\'),
        KeyCode::RightBracket => Some(']'),
        KeyCode::GraveAccent => Some('`'),
        _ => None,
    };

    if let Some(c) = printable {
        return c.to_string();
    }

    let name = format!("{:?}", key);

    // Letter keys are named "A".."Z", digit keys "Key0".."Key9".
    if name.len() == 1 {
        return name.to_lowercase();
    }
    if let Some(digit) = name.strip_prefix("Key") {
        if digit.len() == 1 && digit.chars().all(|c| c.is_ascii_digit()) {
            return digit.to_string();
        }
    }

    name
}
