//! # Cartesian Coordinate Module
//!
//! This module provides the 3D Cartesian point type that is fed into and
//! returned from the line rotation routines.
//!
//! ## Coordinate System Convention
//!
//! Right-handed Cartesian coordinates: X × Y = Z. A positive rotation about an
//! axis turns counterclockwise when viewed from the axis' positive end.
//!
//! ## Homogeneous Coordinates
//!
//! Affine transforms (translation plus rotation) are applied as a single 4×4
//! matrix product. A point `(x, y, z)` is lifted to `(x, y, z, 1)` before
//! multiplication and the first three components are read back afterwards.
//!
//! ```rust
//! use line_rotation::coordinates::cartesian::Cartesian3;
//!
//! let p = Cartesian3::new(1.0, 2.0, 3.0);
//! let h = p.to_homogeneous();
//! assert_eq!(h.w, 1.0);
//! assert_eq!(Cartesian3::from_homogeneous(&h), p);
//! ```

use crate::{Result, RotationError};
use nalgebra::{Vector3, Vector4};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-dimensional Cartesian point or direction
///
/// A plain value type: copied freely and never mutated by the rotation
/// routines.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Cartesian3 {
    /// X-component
    pub x: f64,
    /// Y-component
    pub y: f64,
    /// Z-component
    pub z: f64,
}

impl Cartesian3 {
    /// Creates a new Cartesian coordinate
    ///
    /// # Examples
    ///
    /// ```rust
    /// use line_rotation::coordinates::cartesian::Cartesian3;
    ///
    /// let coord = Cartesian3::new(1.0, 0.0, 0.0);
    /// assert_eq!(coord.x, 1.0);
    /// ```
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Cartesian3 { x, y, z }
    }

    /// The origin `(0, 0, 0)`
    pub fn origin() -> Self {
        Cartesian3::default()
    }

    /// Calculates the magnitude (length) of the coordinate vector
    ///
    /// `magnitude = sqrt(x² + y² + z²)`
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Cartesian3) -> f64 {
        (*other - *self).magnitude()
    }

    /// Returns a unit vector in the same direction, or `None` for the zero vector
    pub fn normalize(&self) -> Option<Cartesian3> {
        let mag = self.magnitude();
        if mag == 0.0 {
            None
        } else {
            Some(*self / mag)
        }
    }

    /// Dot product `x₁x₂ + y₁y₂ + z₁z₂`
    pub fn dot(&self, other: &Cartesian3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product, following the right-hand rule
    ///
    /// ```text
    /// cross = (y₁*z₂ - z₁*y₂, z₁*x₂ - x₁*z₂, x₁*y₂ - y₁*x₂)
    /// ```
    pub fn cross(&self, other: &Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    /// Perpendicular distance from this point to the infinite line through
    /// `start` and `end`
    ///
    /// Returns `None` when the two line points coincide.
    ///
    /// ```rust
    /// use line_rotation::coordinates::cartesian::Cartesian3;
    ///
    /// let p = Cartesian3::new(3.0, 4.0, 7.0);
    /// let d = p
    ///     .distance_to_line(&Cartesian3::origin(), &Cartesian3::new(0.0, 0.0, 1.0))
    ///     .unwrap();
    /// assert!((d - 5.0).abs() < 1e-12);
    /// ```
    pub fn distance_to_line(&self, start: &Cartesian3, end: &Cartesian3) -> Option<f64> {
        let direction = *end - *start;
        let length = direction.magnitude();
        if length == 0.0 {
            return None;
        }
        Some((*self - *start).cross(&direction).magnitude() / length)
    }

    /// Lifts the point to homogeneous coordinates `(x, y, z, 1)`
    pub fn to_homogeneous(&self) -> Vector4<f64> {
        Vector4::new(self.x, self.y, self.z, 1.0)
    }

    /// Reads the Cartesian part of a homogeneous vector
    ///
    /// The fourth component is ignored; every transform in this crate is
    /// affine so it stays at 1.
    pub fn from_homogeneous(h: &Vector4<f64>) -> Self {
        Cartesian3 {
            x: h.x,
            y: h.y,
            z: h.z,
        }
    }

    /// Converts to nalgebra Vector3 for linear algebra operations
    pub fn to_vector3(&self) -> Vector3<f64> {
        Vector3::new(self.x, self.y, self.z)
    }

    /// Creates from nalgebra Vector3
    pub fn from_vector3(vec: Vector3<f64>) -> Self {
        Cartesian3 {
            x: vec.x,
            y: vec.y,
            z: vec.z,
        }
    }

    /// Components as an array `[x, y, z]`
    pub fn to_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl From<[f64; 3]> for Cartesian3 {
    fn from(c: [f64; 3]) -> Self {
        Cartesian3::new(c[0], c[1], c[2])
    }
}

impl TryFrom<&[f64]> for Cartesian3 {
    type Error = RotationError;

    /// Builds a point from a slice, which must hold exactly three components
    fn try_from(components: &[f64]) -> Result<Self> {
        match *components {
            [x, y, z] => Ok(Cartesian3::new(x, y, z)),
            _ => Err(RotationError::DimensionMismatch {
                expected: 3,
                found: components.len(),
            }),
        }
    }
}

impl fmt::Display for Cartesian3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.*}, {:.*}, {:.*})", p, self.x, p, self.y, p, self.z),
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

// Arithmetic operations for convenience
impl std::ops::Add for Cartesian3 {
    type Output = Cartesian3;

    fn add(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl std::ops::Sub for Cartesian3 {
    type Output = Cartesian3;

    fn sub(self, other: Cartesian3) -> Cartesian3 {
        Cartesian3 {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl std::ops::Neg for Cartesian3 {
    type Output = Cartesian3;

    fn neg(self) -> Cartesian3 {
        Cartesian3 {
            x: -self.x,
            y: -self.y,
            z: -self.z,
        }
    }
}

impl std::ops::Mul<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn mul(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x * scalar,
            y: self.y * scalar,
            z: self.z * scalar,
        }
    }
}

impl std::ops::Div<f64> for Cartesian3 {
    type Output = Cartesian3;

    fn div(self, scalar: f64) -> Cartesian3 {
        Cartesian3 {
            x: self.x / scalar,
            y: self.y / scalar,
            z: self.z / scalar,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude_calculation() {
        assert_eq!(Cartesian3::new(3.0, 4.0, 0.0).magnitude(), 5.0);
        assert_eq!(Cartesian3::origin().magnitude(), 0.0);
    }

    #[test]
    fn test_normalize() {
        let normalized = Cartesian3::new(3.0, 4.0, 0.0).normalize().unwrap();
        assert!((normalized.magnitude() - 1.0).abs() < 1e-15);
        assert!((normalized.x - 0.6).abs() < 1e-15);
        assert!((normalized.y - 0.8).abs() < 1e-15);

        assert!(Cartesian3::origin().normalize().is_none());
    }

    #[test]
    fn test_cross_product() {
        let x_axis = Cartesian3::new(1.0, 0.0, 0.0);
        let y_axis = Cartesian3::new(0.0, 1.0, 0.0);
        let z_axis = Cartesian3::new(0.0, 0.0, 1.0);

        // Right-hand rule: x × y = z
        assert_eq!(x_axis.cross(&y_axis), z_axis);
        assert_eq!(y_axis.cross(&z_axis), x_axis);
        assert_eq!(z_axis.cross(&x_axis), y_axis);
        assert_eq!(x_axis.dot(&y_axis), 0.0);
    }

    #[test]
    fn test_homogeneous_lift() {
        let p = Cartesian3::new(-1.5, 2.0, 7.25);
        let h = p.to_homogeneous();
        assert_eq!((h.x, h.y, h.z, h.w), (-1.5, 2.0, 7.25, 1.0));
        assert_eq!(Cartesian3::from_homogeneous(&h), p);
    }

    #[test]
    fn test_slice_conversion() {
        let ok = Cartesian3::try_from(&[1.0, 2.0, 3.0][..]).unwrap();
        assert_eq!(ok, Cartesian3::new(1.0, 2.0, 3.0));

        let err = Cartesian3::try_from(&[1.0, 2.0][..]).unwrap_err();
        assert_eq!(
            err,
            RotationError::DimensionMismatch {
                expected: 3,
                found: 2
            }
        );

        let err = Cartesian3::try_from(&[1.0, 2.0, 3.0, 4.0][..]).unwrap_err();
        assert!(matches!(
            err,
            RotationError::DimensionMismatch { found: 4, .. }
        ));
    }

    #[test]
    fn test_distance_to_line() {
        let start = Cartesian3::new(1.0, 1.0, 0.0);
        let end = Cartesian3::new(1.0, 1.0, 5.0);

        let d = Cartesian3::new(4.0, 5.0, -3.0)
            .distance_to_line(&start, &end)
            .unwrap();
        assert!((d - 5.0).abs() < 1e-12);

        // Points on the line have zero distance
        let d = Cartesian3::new(1.0, 1.0, 42.0)
            .distance_to_line(&start, &end)
            .unwrap();
        assert!(d.abs() < 1e-12);

        assert!(Cartesian3::origin().distance_to_line(&start, &start).is_none());
    }

    #[test]
    fn test_arithmetic_operations() {
        let a = Cartesian3::new(1.0, 2.0, 3.0);
        let b = Cartesian3::new(4.0, 5.0, 6.0);

        assert_eq!(a + b, Cartesian3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Cartesian3::new(3.0, 3.0, 3.0));
        assert_eq!(-a, Cartesian3::new(-1.0, -2.0, -3.0));
        assert_eq!(a * 2.0, Cartesian3::new(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, Cartesian3::new(0.5, 1.0, 1.5));
        assert_eq!(a.distance(&b), 27.0_f64.sqrt());
    }

    #[test]
    fn test_vector3_conversions() {
        let coord = Cartesian3::new(1.0, 2.0, 3.0);
        let vec = coord.to_vector3();
        assert_eq!((vec.x, vec.y, vec.z), (1.0, 2.0, 3.0));
        assert_eq!(Cartesian3::from_vector3(vec), coord);
        assert_eq!(Cartesian3::from(coord.to_array()), coord);
    }

    #[test]
    fn test_display() {
        let p = Cartesian3::new(1.0, -2.5, 0.0);
        assert_eq!(p.to_string(), "(1, -2.5, 0)");
        assert_eq!(format!("{:.2}", p), "(1.00, -2.50, 0.00)");
    }
}
