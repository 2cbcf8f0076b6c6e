//! # Geometry
//!
//! Vertex and index data drawn by the walkthroughs.

use super::vertex::{PositionColorVertex, PositionTextureVertex};

const RED: [u8; 4] = [255, 0, 0, 255];
const GREEN: [u8; 4] = [0, 255, 0, 255];

/// Half the edge length of the cube.
pub const CUBE_HALF_SIZE: f32 = 10.0;

/// A red triangle in normalized device coordinates.
pub fn triangle() -> [PositionColorVertex; 3] {
    [
        PositionColorVertex::new(-1.0, -1.0, 0.0, RED),
        PositionColorVertex::new(1.0, -1.0, 0.0, RED),
        PositionColorVertex::new(0.0, 1.0, 0.0, RED),
    ]
}

/// Cube vertices, four per face, in face order -z, +z, -x, +x, -y, +y.
///
/// The +x face is green, the others red.
pub fn cube_vertices() -> [PositionColorVertex; 24] {
    let s = CUBE_HALF_SIZE;
    let v = PositionColorVertex::new;
    [
        v(-s, -s, -s, RED),
        v(s, -s, -s, RED),
        v(s, s, -s, RED),
        v(-s, s, -s, RED),
        //
        v(-s, -s, s, RED),
        v(s, -s, s, RED),
        v(s, s, s, RED),
        v(-s, s, s, RED),
        //
        v(-s, -s, -s, RED),
        v(-s, s, -s, RED),
        v(-s, s, s, RED),
        v(-s, -s, s, RED),
        //
        v(s, -s, -s, GREEN),
        v(s, s, -s, GREEN),
        v(s, s, s, GREEN),
        v(s, -s, s, GREEN),
        //
        v(-s, -s, -s, RED),
        v(-s, -s, s, RED),
        v(s, -s, s, RED),
        v(s, -s, -s, RED),
        //
        v(-s, s, -s, RED),
        v(-s, s, s, RED),
        v(s, s, s, RED),
        v(s, s, -s, RED),
    ]
}

/// Two triangles per cube face.
pub fn cube_indices() -> [u16; 36] {
    let mut indices = [0u16; 36];
    for face in 0..6u16 {
        let base = face * 4;
        let at = face as usize * 6;
        indices[at..at + 6].copy_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    indices
}

/// A full-screen quad whose UVs run to 4 so the texture tiles 4x4.
pub fn textured_quad() -> [PositionTextureVertex; 4] {
    [
        PositionTextureVertex::new(-1.0, 1.0, 0.0, 0.0, 0.0),
        PositionTextureVertex::new(1.0, 1.0, 0.0, 4.0, 0.0),
        PositionTextureVertex::new(1.0, -1.0, 0.0, 4.0, 4.0),
        PositionTextureVertex::new(-1.0, -1.0, 0.0, 0.0, 4.0),
    ]
}

/// Indices of [`textured_quad`].
pub fn quad_indices() -> [u16; 6] {
    [0, 1, 2, 0, 2, 3]
}
