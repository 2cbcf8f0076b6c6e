//! # Mouse Position
//!
//! Logs the cursor position once per second.

use crate::app::{App, AppContext, AppResult};
use crate::config;
use crate::input::MouseSampler;
use crate::rendering::color_from_bytes;
use crate::PrimerResult;
use macroquad::prelude::{clear_background, get_time, Color};
use tracing::info;

/// Samples and logs the mouse.
pub struct MousePositionDemo {
    sampler: MouseSampler,
    clear_color: Color,
}

impl MousePositionDemo {
    /// Creates the walkthrough.
    pub fn init(_ctx: &AppContext) -> PrimerResult<Self> {
        Ok(Self {
            sampler: MouseSampler::new(config::MOUSE_LOG_INTERVAL_SECS),
            clear_color: color_from_bytes(config::WINDOW_CLEAR_COLOR),
        })
    }
}

impl App for MousePositionDemo {
    fn name(&self) -> &str {
        "mouse-position"
    }

    fn iterate(&mut self) -> PrimerResult<AppResult> {
        clear_background(self.clear_color);

        if let Some(position) = self.sampler.sample(get_time()) {
            info!("Mouse Position {}", position);
        }

        Ok(AppResult::Continue)
    }
}
