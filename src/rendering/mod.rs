//! # Rendering Module
//!
//! Vertex layouts, geometry, checked mesh uploads, shader pipelines and
//! textures, all drawn through macroquad.

pub mod geometry;
pub mod mesh;
pub mod shaders;
pub mod texture;
pub mod vertex;

pub use geometry::*;
pub use mesh::*;
pub use shaders::*;
pub use texture::*;
pub use vertex::*;

use macroquad::prelude::Color;

/// Converts a `0..255` RGBA array into a macroquad color.
pub fn color_from_bytes(rgba: [u8; 4]) -> Color {
    Color::from_rgba(rgba[0], rgba[1], rgba[2], rgba[3])
}

/// Converts a `0.0..1.0` RGBA array into a macroquad color.
pub fn color_from_floats(rgba: [f32; 4]) -> Color {
    Color::new(rgba[0], rgba[1], rgba[2], rgba[3])
}
