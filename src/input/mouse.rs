//! # Mouse Sampling
//!
//! Throttled reads of the cursor position.

use macroquad::prelude::mouse_position;
use std::fmt;

/// Cursor position in window coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MousePosition {
    pub x: f32,
    pub y: f32,
}

impl MousePosition {
    /// Reads the current cursor position from the window.
    pub fn current() -> Self {
        let (x, y) = mouse_position();
        Self { x, y }
    }
}

impl fmt::Display for MousePosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {:.6} y: {:.6}", self.x, self.y)
    }
}

/// Samples the mouse at most once per interval without blocking the frame.
#[derive(Debug, Clone)]
pub struct MouseSampler {
    interval: f64,
    last_sample: Option<f64>,
}

impl MouseSampler {
    /// Creates a sampler that fires every `interval` seconds.
    pub fn new(interval: f64) -> Self {
        Self {
            interval,
            last_sample: None,
        }
    }

    /// Returns true when a sample is due at time `now`, and records it.
    ///
    /// The first call is always due.
    pub fn is_due(&mut self, now: f64) -> bool {
        match self.last_sample {
            Some(last) if now - last < self.interval => false,
            _ => {
                self.last_sample = Some(now);
                true
            }
        }
    }

    /// Reads the cursor if a sample is due at time `now`.
    pub fn sample(&mut self, now: f64) -> Option<MousePosition> {
        if self.is_due(now) {
            Some(MousePosition::current())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_sample_is_due() {
        let mut sampler = MouseSampler::new(1.0);
        assert!(sampler.is_due(42.0));
    }

    #[test]
    fn test_samples_are_throttled() {
        let mut sampler = MouseSampler::new(1.0);
        assert!(sampler.is_due(0.0));
        assert!(!sampler.is_due(0.5));
        assert!(!sampler.is_due(0.99));
        assert!(sampler.is_due(1.0));
        assert!(!sampler.is_due(1.5));
        assert!(sampler.is_due(2.25));
    }

    #[test]
    fn test_position_display() {
        let position = MousePosition { x: 12.5, y: 3.0 };
        assert_eq!(position.to_string(), "x: 12.500000 y: 3.000000");
    }
}
