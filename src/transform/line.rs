//! Directed rotation axes and the rigid motion that aligns them with +Z
//!
//! A [`Line`] runs from `start` (p₀) to `end` (p₁). [`AxisAlignment`] is the
//! rigid motion `M` that sends p₀ to the origin and the direction
//! `d = p₁ - p₀` onto the +Z axis, built in three steps:
//!
//! 1. `T(-p₀)` moves the start point to the origin.
//! 2. `Rz(-r₁)` with `r₁ = atan2(d_y, d_x)` swings the line into the xOz plane.
//! 3. `Ry(r₂)` with `r₂ = atan2(√(d_x² + d_y²), d_z)` tips it onto +Z.
//!
//! `M = Ry(r₂) · Rz(-r₁) · T(-p₀)`. For a line already parallel to Z the
//! azimuth is `atan2(0, 0) = 0` and step 2 is the identity.

use super::{rotate_y, rotate_z, translation, Matrix4};
use crate::constants::DEGENERATE_AXIS_TOLERANCE;
use crate::coordinates::Cartesian3;
use crate::{Result, RotationError};

/// A directed line through two distinct points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    start: Cartesian3,
    end: Cartesian3,
}

impl Line {
    /// Creates a line from `start` toward `end`
    ///
    /// Fails with [`RotationError::DegenerateAxis`] when the endpoints are
    /// closer than [`DEGENERATE_AXIS_TOLERANCE`].
    pub fn new(start: Cartesian3, end: Cartesian3) -> Result<Self> {
        let length = (end - start).magnitude();
        // Negated comparison so a NaN length is rejected too
        if !(length >= DEGENERATE_AXIS_TOLERANCE) {
            return Err(RotationError::DegenerateAxis { length });
        }
        Ok(Line { start, end })
    }

    pub fn start(&self) -> Cartesian3 {
        self.start
    }

    pub fn end(&self) -> Cartesian3 {
        self.end
    }

    /// Direction vector `end - start` (not normalized)
    pub fn direction(&self) -> Cartesian3 {
        self.end - self.start
    }

    /// Angle of the direction's xy projection measured from +X, in (-π, π]
    pub fn azimuth(&self) -> f64 {
        let d = self.direction();
        d.y.atan2(d.x)
    }

    /// Angle between the direction and +Z, in [0, π]
    pub fn polar(&self) -> f64 {
        let d = self.direction();
        d.x.hypot(d.y).atan2(d.z)
    }

    /// Builds the rigid motion taking this line onto the +Z axis
    pub fn alignment(&self) -> Result<AxisAlignment> {
        AxisAlignment::new(self)
    }
}

/// The alignment motion `M` for a line, its inverse, and the pieces it was
/// composed from
#[derive(Debug, Clone, PartialEq)]
pub struct AxisAlignment {
    /// `T(-p₀)`
    pub translation: Matrix4,
    /// `Rz(-r₁)`, bringing the line into the xOz plane
    pub to_xoz: Matrix4,
    /// `Ry(r₂)`, bringing the line onto +Z
    pub to_z: Matrix4,
    /// `M = Ry(r₂) · Rz(-r₁) · T(-p₀)`
    pub forward: Matrix4,
    /// `M⁻¹`, by numerical inversion of `forward`
    pub inverse: Matrix4,
    /// r₁
    pub azimuth: f64,
    /// r₂
    pub polar: f64,
    start: Cartesian3,
}

impl AxisAlignment {
    /// Composes `M` for `line` and inverts it numerically
    ///
    /// Fails with [`RotationError::SingularTransform`] if the inversion does
    /// not succeed, which only happens for badly conditioned input.
    pub fn new(line: &Line) -> Result<Self> {
        let p0 = line.start();
        let azimuth = line.azimuth();
        let polar = line.polar();

        let translation = translation(-p0.x, -p0.y, -p0.z);
        let to_xoz = rotate_z(-azimuth);
        let to_z = rotate_y(polar);

        let forward = to_z * to_xoz * translation;
        let inverse = forward
            .try_inverse()
            .ok_or(RotationError::SingularTransform)?;

        Ok(AxisAlignment {
            translation,
            to_xoz,
            to_z,
            forward,
            inverse,
            azimuth,
            polar,
            start: p0,
        })
    }

    /// Exact inverse `T(p₀) · Rz(r₁) · Ry(-r₂)`
    ///
    /// Agrees with [`AxisAlignment::inverse`] up to rounding.
    pub fn closed_form_inverse(&self) -> Matrix4 {
        translation(self.start.x, self.start.y, self.start.z)
            * rotate_z(self.azimuth)
            * rotate_y(-self.polar)
    }

    /// Applies `M` to a point
    pub fn align(&self, point: Cartesian3) -> Cartesian3 {
        Cartesian3::from_homogeneous(&(self.forward * point.to_homogeneous()))
    }

    /// Applies `M⁻¹` to a point
    pub fn unalign(&self, point: Cartesian3) -> Cartesian3 {
        Cartesian3::from_homogeneous(&(self.inverse * point.to_homogeneous()))
    }
}
