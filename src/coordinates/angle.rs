//! # Rotation Angle Module
//!
//! A signed rotation angle that remembers the unit it was entered in.
//!
//! Angles typed at a prompt are usually degrees while the rotation routines
//! work in radians. `Angle` keeps the caller's original value untouched and
//! converts only when asked, so an angle of `90°` prints back as `90` and
//! not as `89.99999999999999`.
//!
//! ```rust
//! use line_rotation::coordinates::angle::{Angle, AngleUnit};
//!
//! let quarter = Angle::from_degrees(90.0);
//! assert_eq!(quarter.unit(), AngleUnit::Degrees);
//! assert!((quarter.to_radians() - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
//! ```

use crate::constants::{DEG2RAD, RAD2DEG};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit an angle was originally expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    Degrees,
    Radians,
}

/// Signed rotation angle
///
/// Positive angles turn counterclockwise when looking down the rotation axis
/// from its end point toward its start point (right-hand rule).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angle {
    value: f64,
    unit: AngleUnit,
}

impl Angle {
    /// Creates an angle from a value in degrees, stored exactly as given
    pub fn from_degrees(degrees: f64) -> Self {
        Angle {
            value: degrees,
            unit: AngleUnit::Degrees,
        }
    }

    /// Creates an angle from a value in radians, stored exactly as given
    pub fn from_radians(radians: f64) -> Self {
        Angle {
            value: radians,
            unit: AngleUnit::Radians,
        }
    }

    /// Creates an angle from a raw value in the given unit
    pub fn new(value: f64, unit: AngleUnit) -> Self {
        Angle { value, unit }
    }

    /// Returns the angle in radians
    ///
    /// Degree values are converted with `θ_rad = θ_deg · π / 180`.
    pub fn to_radians(&self) -> f64 {
        match self.unit {
            AngleUnit::Degrees => self.value * DEG2RAD,
            AngleUnit::Radians => self.value,
        }
    }

    /// Returns the angle in degrees
    pub fn to_degrees(&self) -> f64 {
        match self.unit {
            AngleUnit::Degrees => self.value,
            AngleUnit::Radians => self.value * RAD2DEG,
        }
    }

    /// The unit this angle was created with
    pub fn unit(&self) -> AngleUnit {
        self.unit
    }

    /// The raw value in the original unit
    pub fn value(&self) -> f64 {
        self.value
    }
}

impl std::ops::Neg for Angle {
    type Output = Angle;

    fn neg(self) -> Angle {
        Angle {
            value: -self.value,
            unit: self.unit,
        }
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            AngleUnit::Degrees => write!(f, "{}°", self.value),
            AngleUnit::Radians => write!(f, "{} rad", self.value),
        }
    }
}
