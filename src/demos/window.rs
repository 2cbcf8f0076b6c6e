//! # Window
//!
//! Opens a window and clears it every frame until it is closed.

use crate::app::{App, AppContext, AppResult};
use crate::config;
use crate::input::InputEvent;
use crate::rendering::color_from_bytes;
use crate::PrimerResult;
use macroquad::prelude::{clear_background, Color};
use tracing::info;

/// Clears the window to a flat color.
pub struct WindowDemo {
    clear_color: Color,
}

impl WindowDemo {
    /// Creates the walkthrough.
    pub fn init(_ctx: &AppContext) -> PrimerResult<Self> {
        info!("Window ready");
        Ok(Self {
            clear_color: color_from_bytes(config::WINDOW_CLEAR_COLOR),
        })
    }
}

impl App for WindowDemo {
    fn name(&self) -> &str {
        "window"
    }

    fn event(&mut self, event: &InputEvent) -> AppResult {
        match event {
            InputEvent::Quit => AppResult::Success,
            _ => AppResult::Continue,
        }
    }

    fn iterate(&mut self) -> PrimerResult<AppResult> {
        clear_background(self.clear_color);
        Ok(AppResult::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::prelude::KeyCode;

    #[test]
    fn test_only_quit_ends_the_window() {
        let mut demo = WindowDemo::init(&AppContext::new(".")).unwrap();
        assert_eq!(demo.event(&InputEvent::KeyDown(KeyCode::A)), AppResult::Continue);
        assert_eq!(demo.event(&InputEvent::Quit), AppResult::Success);
    }
}
