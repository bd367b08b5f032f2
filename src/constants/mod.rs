//! Constants module for line rotation calculations

use std::f64::consts::PI;

// Angles
/// Degrees to radians conversion factor
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees conversion factor
pub const RAD2DEG: f64 = 180.0 / PI;
/// Tau (2*PI) for full circle
pub const TAU: f64 = 2.0 * PI;

// Tolerances
/// Smallest line direction length accepted as a rotation axis
pub const DEGENERATE_AXIS_TOLERANCE: f64 = 1e-12;
