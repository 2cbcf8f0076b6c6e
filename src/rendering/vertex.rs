//! # Vertex Layouts
//!
//! The two vertex formats the walkthroughs upload.

use macroquad::models::Vertex;
use macroquad::prelude::Color;

/// Position plus an RGBA color in bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionColorVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl PositionColorVertex {
    /// Creates a vertex at `(x, y, z)` with color `rgba`.
    pub const fn new(x: f32, y: f32, z: f32, rgba: [u8; 4]) -> Self {
        Self {
            x,
            y,
            z,
            r: rgba[0],
            g: rgba[1],
            b: rgba[2],
            a: rgba[3],
        }
    }
}

impl From<PositionColorVertex> for Vertex {
    fn from(v: PositionColorVertex) -> Self {
        Vertex::new(v.x, v.y, v.z, 0.0, 0.0, Color::from_rgba(v.r, v.g, v.b, v.a))
    }
}

/// Position plus texture coordinates.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionTextureVertex {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub u: f32,
    pub v: f32,
}

impl PositionTextureVertex {
    /// Creates a vertex at `(x, y, z)` sampling the texture at `(u, v)`.
    pub const fn new(x: f32, y: f32, z: f32, u: f32, v: f32) -> Self {
        Self { x, y, z, u, v }
    }
}

impl From<PositionTextureVertex> for Vertex {
    fn from(v: PositionTextureVertex) -> Self {
        Vertex::new(v.x, v.y, v.z, v.u, v.v, macroquad::prelude::WHITE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::size_of;

    #[test]
    fn test_vertex_strides() {
        assert_eq!(size_of::<PositionColorVertex>(), 16);
        assert_eq!(size_of::<PositionTextureVertex>(), 20);
    }

    #[test]
    fn test_conversion_keeps_position_and_uv() {
        let vertex: Vertex = PositionTextureVertex::new(1.0, -1.0, 0.0, 4.0, 4.0).into();
        assert_eq!(vertex.position.x, 1.0);
        assert_eq!(vertex.position.y, -1.0);
        assert_eq!(vertex.uv.x, 4.0);
        assert_eq!(vertex.uv.y, 4.0);

        let vertex: Vertex = PositionColorVertex::new(-10.0, 10.0, 5.0, [255, 0, 0, 255]).into();
        assert_eq!(vertex.position.z, 5.0);
    }
}
