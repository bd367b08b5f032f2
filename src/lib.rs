//! Line rotation: rotate points in 3D space about an arbitrary directed line
//!
//! The rotation is built from homogeneous 4×4 transforms. The line is first
//! moved onto the +Z axis through the origin, the point is spun about Z by the
//! requested angle, and the alignment is undone:
//!
//! ```text
//! F = M⁻¹ · Rz(θ) · M,    M = Ry(r₂) · Rz(−r₁) · T(−p₀)
//! ```
//!
//! ```rust
//! use line_rotation::{rotate_over_line, Cartesian3};
//! use std::f64::consts::FRAC_PI_2;
//!
//! let p0 = Cartesian3::new(0.0, 0.0, 0.0);
//! let p1 = Cartesian3::new(0.0, 0.0, 1.0);
//! let q = Cartesian3::new(1.0, 0.0, 0.0);
//!
//! let rotated = rotate_over_line(p0, p1, q, FRAC_PI_2).unwrap();
//! assert!((rotated.x - 0.0).abs() < 1e-12);
//! assert!((rotated.y - 1.0).abs() < 1e-12);
//! ```

use thiserror::Error;

pub mod constants;
pub mod coordinates;
pub mod display;
pub mod input;
pub mod locale;
pub mod transform;

// Re-export commonly used types
pub use coordinates::{Angle, Cartesian3};
pub use transform::line::{AxisAlignment, Line};
pub use transform::rotate::{
    rotate_over_line, rotate_over_line_with, LineRotation, MatrixRecorder, Stage,
    TransformObserver,
};
pub use transform::Matrix4;

/// Main error type for the line rotation library
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RotationError {
    /// The two line endpoints coincide, so the rotation axis has no direction
    #[error("Degenerate rotation axis: line endpoints coincide (direction length {length:e})")]
    DegenerateAxis {
        /// Euclidean length of `p1 - p0`
        length: f64,
    },

    /// The alignment transform could not be inverted
    #[error("Singular transform: alignment matrix could not be inverted")]
    SingularTransform,

    /// A vector argument did not have the expected number of components
    #[error("Dimension mismatch: expected {expected} components, found {found}")]
    DimensionMismatch {
        /// Number of components required
        expected: usize,
        /// Number of components supplied
        found: usize,
    },
}

/// Result type for line rotation operations
pub type Result<T> = std::result::Result<T, RotationError>;
