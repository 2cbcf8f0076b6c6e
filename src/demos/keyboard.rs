//! # Keyboard Input
//!
//! Logs every key press and release.

use crate::app::{App, AppContext, AppResult};
use crate::config;
use crate::input::{key_label, InputEvent};
use crate::rendering::color_from_bytes;
use crate::PrimerResult;
use macroquad::prelude::{clear_background, Color};
use tracing::info;

/// Echoes keyboard events to the log.
pub struct KeyboardDemo {
    clear_color: Color,
    /// Presses seen so far
    pub presses: usize,
    /// Releases seen so far
    pub releases: usize,
}

impl KeyboardDemo {
    /// Creates the walkthrough.
    pub fn init(_ctx: &AppContext) -> PrimerResult<Self> {
        Ok(Self {
            clear_color: color_from_bytes(config::WINDOW_CLEAR_COLOR),
            presses: 0,
            releases: 0,
        })
    }
}

impl App for KeyboardDemo {
    fn name(&self) -> &str {
        "keyboard"
    }

    fn event(&mut self, event: &InputEvent) -> AppResult {
        match event {
            InputEvent::Quit => return AppResult::Success,
            InputEvent::KeyDown(key) => {
                self.presses += 1;
                info!("User pressed key: {}", key_label(*key));
            }
            InputEvent::KeyUp(key) => {
                self.releases += 1;
                info!("User released key: {}", key_label(*key));
            }
        }
        AppResult::Continue
    }

    fn iterate(&mut self) -> PrimerResult<AppResult> {
        clear_background(self.clear_color);
        Ok(AppResult::Continue)
    }
}
