//! # Vector3
//!
//! Three-component vector used for camera positions, targets and basis axes.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Mul, Neg, Sub};

/// A point or direction in 3D space.
///
/// # Examples
///
/// ```
/// use primer::Vector3;
///
/// let a = Vector3::new(1.0, 2.0, 3.0);
/// let b = Vector3::new(4.0, 5.0, 6.0);
/// assert_eq!(a.dot(b), 32.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Creates a new vector from its components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Inner product of two vectors.
    pub fn dot(self, other: Vector3) -> f32 {
        (self.x * other.x) + (self.y * other.y) + (self.z * other.z)
    }

    /// Cross product.
    ///
    /// Computes `(y*bz - z*by, -(x*bz - bx*z), x*by - bx*y)`, a vector
    /// perpendicular to both operands whose length is the area of the
    /// parallelogram they span.
    ///
    /// # Examples
    ///
    /// ```
    /// use primer::Vector3;
    ///
    /// let up = Vector3::new(0.0, 1.0, 0.0);
    /// let back = Vector3::new(0.0, 0.0, 1.0);
    /// assert_eq!(up.cross(back), Vector3::new(1.0, 0.0, 0.0));
    /// ```
    pub fn cross(self, other: Vector3) -> Vector3 {
        Vector3::new(
            self.y * other.z - other.y * self.z,
            -(self.x * other.z - other.x * self.z),
            self.x * other.y - other.x * self.y,
        )
    }

    /// Euclidean length.
    pub fn length(self) -> f32 {
        ((self.x * self.x) + (self.y * self.y) + (self.z * self.z)).sqrt()
    }

    /// Scales the vector to unit length.
    ///
    /// A zero-length input yields NaN components; callers must not pass one.
    pub fn normalize(self) -> Vector3 {
        let magnitude = self.length();
        Vector3::new(self.x / magnitude, self.y / magnitude, self.z / magnitude)
    }
}

impl Add for Vector3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f32> for Vector3 {
    type Output = Self;

    fn mul(self, scale: f32) -> Self {
        Self::new(self.x * scale, self.y * scale, self.z * scale)
    }
}

impl From<[f32; 3]> for Vector3 {
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_dot_product() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(-2.0, 0.5, 4.0);
        assert_eq!(a.dot(b), -2.0 + 1.0 + 12.0);
    }

    #[test]
    fn test_cross_of_unit_axes() {
        let x = Vector3::new(1.0, 0.0, 0.0);
        let y = Vector3::new(0.0, 1.0, 0.0);
        let z = Vector3::new(0.0, 0.0, 1.0);

        assert_eq!(x.cross(y), z);
        assert_eq!(y.cross(z), x);
        assert_eq!(z.cross(x), y);
        assert_eq!(y.cross(x), -z);
    }

    #[test]
    fn test_cross_matches_component_formula() {
        let a = Vector3::new(2.0, -3.0, 5.0);
        let b = Vector3::new(7.0, 11.0, -13.0);
        let c = a.cross(b);

        assert_eq!(c.x, a.y * b.z - b.y * a.z);
        assert_eq!(c.y, -(a.x * b.z - b.x * a.z));
        assert_eq!(c.z, a.x * b.y - b.x * a.y);
    }

    #[test]
    fn test_normalize() {
        let v = Vector3::new(3.0, 0.0, 4.0).normalize();
        assert_relative_eq!(v.x, 0.6);
        assert_relative_eq!(v.z, 0.8);
        assert_relative_eq!(v.length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero_vector_is_not_finite() {
        let v = Vector3::ZERO.normalize();
        assert!(v.x.is_nan() && v.y.is_nan() && v.z.is_nan());
    }

    #[test]
    fn test_operators() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vector3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vector3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Vector3::new(2.0, 4.0, 6.0));
        assert_eq!(Vector3::from([1.0, 2.0, 3.0]), a);
    }
}
