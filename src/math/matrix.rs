//! # Matrix4x4
//!
//! Row-major 4x4 matrix for the row-vector convention (`v * M`).

use super::Vector3;
use macroquad::math::Mat4;
use serde::{Deserialize, Serialize};
use std::ops::Mul;

/// A 4x4 transform.
///
/// `rows[r][c]` holds the entry usually written `m(r+1)(c+1)`, so
/// `rows[2][3]` is `m34`. Nothing about the matrix is validated: it need not
/// be invertible or orthonormal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Matrix4x4 {
    pub rows: [[f32; 4]; 4],
}

impl Default for Matrix4x4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix4x4 {
    /// Ones on the diagonal.
    pub const IDENTITY: Self = Self {
        rows: [
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ],
    };

    /// All sixteen entries zero.
    pub const ZERO: Self = Self {
        rows: [[0.0; 4]; 4],
    };

    /// Creates a matrix from its four rows.
    pub const fn from_rows(rows: [[f32; 4]; 4]) -> Self {
        Self { rows }
    }

    /// Right-handed perspective projection.
    ///
    /// `field_of_view` is the vertical angle in radians. Depth lands in
    /// `0..1` after the perspective divide. `near == far` divides by zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use primer::Matrix4x4;
    ///
    /// let proj = Matrix4x4::perspective_field_of_view(
    ///     std::f32::consts::FRAC_PI_2, 1.0, 1.0, 10.0,
    /// );
    /// assert_eq!(proj.rows[2][3], -1.0);
    /// assert_eq!(proj.rows[3][3], 0.0);
    /// ```
    pub fn perspective_field_of_view(
        field_of_view: f32,
        aspect_ratio: f32,
        near_plane_distance: f32,
        far_plane_distance: f32,
    ) -> Self {
        let num = 1.0 / (field_of_view * 0.5).tan();
        let depth = near_plane_distance - far_plane_distance;

        Self::from_rows([
            [num / aspect_ratio, 0.0, 0.0, 0.0],
            [0.0, num, 0.0, 0.0],
            [0.0, 0.0, far_plane_distance / depth, -1.0],
            [
                0.0,
                0.0,
                (near_plane_distance * far_plane_distance) / depth,
                0.0,
            ],
        ])
    }

    /// View matrix for a camera at `camera_pos` looking at `camera_target`.
    ///
    /// The basis columns are built by Gram-Schmidt from `camera_up`. An up
    /// vector parallel to the view direction yields a degenerate basis.
    pub fn look_at(camera_pos: Vector3, camera_target: Vector3, camera_up: Vector3) -> Self {
        let z_axis = (camera_pos - camera_target).normalize();
        let x_axis = camera_up.cross(z_axis).normalize();
        let y_axis = z_axis.cross(x_axis);

        Self::from_rows([
            [x_axis.x, y_axis.x, z_axis.x, 0.0],
            [x_axis.y, y_axis.y, z_axis.y, 0.0],
            [x_axis.z, y_axis.z, z_axis.z, 0.0],
            [
                -x_axis.dot(camera_pos),
                -y_axis.dot(camera_pos),
                -z_axis.dot(camera_pos),
                1.0,
            ],
        ])
    }

    /// Matrix product `a * b`.
    ///
    /// With row vectors, `multiply(view, projection)` applies the view first.
    pub fn multiply(a: &Matrix4x4, b: &Matrix4x4) -> Self {
        let mut out = Self::ZERO;
        for r in 0..4 {
            for c in 0..4 {
                out.rows[r][c] = (a.rows[r][0] * b.rows[0][c])
                    + (a.rows[r][1] * b.rows[1][c])
                    + (a.rows[r][2] * b.rows[2][c])
                    + (a.rows[r][3] * b.rows[3][c]);
            }
        }
        out
    }

    /// Transforms the row vector `(point, 1)` and returns all four
    /// components, without the perspective divide.
    pub fn transform_point(&self, point: Vector3) -> [f32; 4] {
        let v = [point.x, point.y, point.z, 1.0];
        let mut out = [0.0; 4];
        for (c, slot) in out.iter_mut().enumerate() {
            *slot = (v[0] * self.rows[0][c])
                + (v[1] * self.rows[1][c])
                + (v[2] * self.rows[2][c])
                + (v[3] * self.rows[3][c]);
        }
        out
    }

    /// The sixteen entries in row-major order, `m11, m12, ..., m44`.
    pub fn to_array(&self) -> [f32; 16] {
        let mut out = [0.0; 16];
        for (r, row) in self.rows.iter().enumerate() {
            out[r * 4..r * 4 + 4].copy_from_slice(row);
        }
        out
    }
}

impl Mul for Matrix4x4 {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Matrix4x4::multiply(&self, &other)
    }
}

/// Packs the row-major floats into a GPU-side `Mat4` unchanged.
///
/// A shader reading the uniform column-major sees the transpose, so
/// `ViewProj * position` in GLSL equals `position * M` here.
impl From<Matrix4x4> for Mat4 {
    fn from(m: Matrix4x4) -> Self {
        Mat4::from_cols_array(&m.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f32::consts::FRAC_PI_2;

    fn assert_matrix_eq(a: &Matrix4x4, b: &Matrix4x4) {
        for r in 0..4 {
            for c in 0..4 {
                assert_relative_eq!(a.rows[r][c], b.rows[r][c], epsilon = 1e-5);
            }
        }
    }

    #[test]
    fn test_perspective_right_angle() {
        let proj = Matrix4x4::perspective_field_of_view(FRAC_PI_2, 1.0, 1.0, 10.0);

        assert_relative_eq!(proj.rows[0][0], 1.0, epsilon = 1e-6);
        assert_relative_eq!(proj.rows[1][1], 1.0, epsilon = 1e-6);
        assert_relative_eq!(proj.rows[2][2], 10.0 / -9.0);
        assert_eq!(proj.rows[2][3], -1.0);
        assert_relative_eq!(proj.rows[3][2], 10.0 / -9.0);
        assert_eq!(proj.rows[3][3], 0.0);

        let populated = [(0, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)];
        for r in 0..4 {
            for c in 0..4 {
                if !populated.contains(&(r, c)) {
                    assert_eq!(proj.rows[r][c], 0.0, "entry ({}, {})", r, c);
                }
            }
        }
    }

    #[test]
    fn test_perspective_divides_by_aspect() {
        let proj = Matrix4x4::perspective_field_of_view(FRAC_PI_2, 2.0, 1.0, 10.0);
        assert_relative_eq!(proj.rows[0][0], 0.5, epsilon = 1e-6);
        assert_relative_eq!(proj.rows[1][1], 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_perspective_maps_planes_to_unit_depth() {
        let proj = Matrix4x4::perspective_field_of_view(1.2, 1.5, 20.0, 60.0);

        let near = proj.transform_point(Vector3::new(0.0, 0.0, -20.0));
        assert_relative_eq!(near[2] / near[3], 0.0, epsilon = 1e-5);

        let far = proj.transform_point(Vector3::new(0.0, 0.0, -60.0));
        assert_relative_eq!(far[2] / far[3], 1.0, epsilon = 1e-5);
    }

    #[test]
    fn test_perspective_equal_planes_is_not_finite() {
        let proj = Matrix4x4::perspective_field_of_view(FRAC_PI_2, 1.0, 5.0, 5.0);
        assert!(!proj.rows[2][2].is_finite());
    }

    #[test]
    fn test_look_at_down_negative_z() {
        let view = Matrix4x4::look_at(
            Vector3::new(0.0, 0.0, 5.0),
            Vector3::ZERO,
            Vector3::new(0.0, 1.0, 0.0),
        );

        let expected = Matrix4x4::from_rows([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, -5.0, 1.0],
        ]);
        assert_matrix_eq(&view, &expected);
    }

    #[test]
    fn test_look_at_scaled_up_vector() {
        let eye = Vector3::new(30.0, 30.0, 0.0);
        let a = Matrix4x4::look_at(eye, Vector3::ZERO, Vector3::new(0.0, 2.0, 0.0));
        let b = Matrix4x4::look_at(eye, Vector3::ZERO, Vector3::new(0.0, 1.0, 0.0));
        assert_matrix_eq(&a, &b);
    }

    #[test]
    fn test_look_at_parallel_up_is_degenerate() {
        let view = Matrix4x4::look_at(
            Vector3::new(0.0, 5.0, 0.0),
            Vector3::ZERO,
            Vector3::new(0.0, 1.0, 0.0),
        );
        assert!(view.rows[0][0].is_nan());
    }

    #[test]
    fn test_multiply_known_product() {
        let a = Matrix4x4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let b = Matrix4x4::from_rows([
            [2.0, 0.0, 0.0, 0.0],
            [0.0, 2.0, 0.0, 0.0],
            [0.0, 0.0, 2.0, 0.0],
            [1.0, 1.0, 1.0, 1.0],
        ]);

        let product = Matrix4x4::multiply(&a, &b);
        assert_eq!(product.rows[0], [6.0, 8.0, 10.0, 4.0]);
        assert_eq!(product.rows[3], [42.0, 44.0, 46.0, 16.0]);
        assert_eq!(a * b, product);
    }

    #[test]
    fn test_to_array_is_row_major() {
        let m = Matrix4x4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        let flat = m.to_array();
        assert_eq!(flat[0], 1.0);
        assert_eq!(flat[3], 4.0);
        assert_eq!(flat[11], 12.0);
        assert_eq!(flat[14], 15.0);
    }

    #[test]
    fn test_gpu_upload_matches_row_vector_product() {
        let view = Matrix4x4::look_at(
            Vector3::new(3.0, 4.0, 5.0),
            Vector3::new(0.5, 0.0, -1.0),
            Vector3::new(0.0, 1.0, 0.0),
        );
        let proj = Matrix4x4::perspective_field_of_view(1.3, 1.5, 1.0, 50.0);
        let view_proj = Matrix4x4::multiply(&view, &proj);

        let point = Vector3::new(1.0, -2.0, 0.5);
        let expected = view_proj.transform_point(point);

        let gpu = Mat4::from(view_proj);
        let clip = gpu * macroquad::math::Vec4::new(point.x, point.y, point.z, 1.0);

        assert_relative_eq!(clip.x, expected[0], epsilon = 1e-4);
        assert_relative_eq!(clip.y, expected[1], epsilon = 1e-4);
        assert_relative_eq!(clip.z, expected[2], epsilon = 1e-4);
        assert_relative_eq!(clip.w, expected[3], epsilon = 1e-4);
    }
}
