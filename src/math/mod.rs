//! # Transform Math
//!
//! Vectors and 4x4 matrices for building a camera's view-projection transform.
//!
//! Everything here is a pure function over `Copy` values: no allocation, no
//! I/O, no shared state. Degenerate inputs (zero-length vectors, an up
//! vector parallel to the view direction, `near == far`) are not checked and
//! show up as NaN or infinite entries in the result.
//!
//! Matrices follow the row-vector convention, so a frame's combined
//! transform is `multiply(view, projection)`:
//!
//! ```
//! use primer::{Matrix4x4, Vector3};
//!
//! let projection = Matrix4x4::perspective_field_of_view(1.3, 1.5, 20.0, 60.0);
//! let view = Matrix4x4::look_at(
//!     Vector3::new(30.0, 30.0, 0.0),
//!     Vector3::ZERO,
//!     Vector3::new(0.0, 2.0, 0.0),
//! );
//! let view_projection = Matrix4x4::multiply(&view, &projection);
//! assert_eq!(view_projection.to_array().len(), 16);
//! ```

pub mod matrix;
pub mod vector;

pub use matrix::*;
pub use vector::*;

/// Inner product of `a` and `b`.
pub fn dot(a: Vector3, b: Vector3) -> f32 {
    a.dot(b)
}

/// Cross product of `a` and `b`.
pub fn cross(a: Vector3, b: Vector3) -> Vector3 {
    a.cross(b)
}

/// `v` scaled to unit length.
pub fn normalize(v: Vector3) -> Vector3 {
    v.normalize()
}

/// Converts degrees to radians for [`Matrix4x4::perspective_field_of_view`].
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}
