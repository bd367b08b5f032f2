//! Rotation of points about an arbitrary directed line
//!
//! The full transform is `F = M⁻¹ · Rz(θ) · M` where `M` is the
//! [`AxisAlignment`] of the line. `M` is applied first.
//!
//! The routines here are pure. Callers that want to see the intermediate
//! matrices pass a [`TransformObserver`]; nothing is printed or logged from
//! inside this module.

use super::line::{AxisAlignment, Line};
use super::{rotate_z, Matrix4};
use crate::coordinates::Cartesian3;
use crate::Result;
use std::fmt;

/// Named intermediate matrices of a line rotation, in the order they are built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// `T(-p₀)`
    Translation,
    /// `Rz(-r₁)`
    RotationToXoz,
    /// `Ry(r₂)`
    RotationToZ,
    /// `M`
    PreRotation,
    /// `M⁻¹`
    PostRotation,
    /// `Rz(θ)`
    RotationAroundZ,
    /// `F = M⁻¹ · Rz(θ) · M`
    Combined,
}

impl Stage {
    /// All stages in build order
    pub const ALL: [Stage; 7] = [
        Stage::Translation,
        Stage::RotationToXoz,
        Stage::RotationToZ,
        Stage::PreRotation,
        Stage::PostRotation,
        Stage::RotationAroundZ,
        Stage::Combined,
    ];

    /// Human readable title
    pub fn title(&self) -> &'static str {
        match self {
            Stage::Translation => "Translation Matrix",
            Stage::RotationToXoz => "Rotation to XoZ Matrix",
            Stage::RotationToZ => "Rotation to Z Matrix",
            Stage::PreRotation => "Pre-Rotation Matrix",
            Stage::PostRotation => "Post-Rotation Matrix",
            Stage::RotationAroundZ => "Rotation Around Z Matrix",
            Stage::Combined => "Combined Transformation Matrix",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Receives intermediate matrices while a line rotation is built
pub trait TransformObserver {
    fn observe(&mut self, stage: Stage, matrix: &Matrix4);
}

impl<F> TransformObserver for F
where
    F: FnMut(Stage, &Matrix4),
{
    fn observe(&mut self, stage: Stage, matrix: &Matrix4) {
        self(stage, matrix)
    }
}

/// Observer that keeps every stage it sees, in order
#[derive(Debug, Clone, Default)]
pub struct MatrixRecorder {
    stages: Vec<(Stage, Matrix4)>,
}

impl MatrixRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded stages in the order they were observed
    pub fn stages(&self) -> &[(Stage, Matrix4)] {
        &self.stages
    }

    /// First recorded matrix for `stage`
    pub fn get(&self, stage: Stage) -> Option<&Matrix4> {
        self.stages
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|(_, m)| m)
    }

    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}

impl TransformObserver for MatrixRecorder {
    fn observe(&mut self, stage: Stage, matrix: &Matrix4) {
        self.stages.push((stage, *matrix));
    }
}

/// A fully built rotation about a line, keeping its intermediates
///
/// Build once and [`apply`](LineRotation::apply) to as many points as needed.
#[derive(Debug, Clone, PartialEq)]
pub struct LineRotation {
    line: Line,
    theta: f64,
    alignment: AxisAlignment,
    spin: Matrix4,
    combined: Matrix4,
}

impl LineRotation {
    /// Builds the rotation by `theta` radians about the line from `start` to `end`
    pub fn new(start: Cartesian3, end: Cartesian3, theta: f64) -> Result<Self> {
        let line = Line::new(start, end)?;
        Self::about(line, theta)
    }

    /// Builds the rotation by `theta` radians about an existing line
    pub fn about(line: Line, theta: f64) -> Result<Self> {
        let alignment = line.alignment()?;
        let spin = rotate_z(theta);
        let combined = alignment.inverse * spin * alignment.forward;
        Ok(LineRotation {
            line,
            theta,
            alignment,
            spin,
            combined,
        })
    }

    pub fn line(&self) -> &Line {
        &self.line
    }

    /// Rotation angle in radians
    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn alignment(&self) -> &AxisAlignment {
        &self.alignment
    }

    /// `F = M⁻¹ · Rz(θ) · M`
    pub fn matrix(&self) -> &Matrix4 {
        &self.combined
    }

    /// Matrix built at `stage`
    pub fn stage(&self, stage: Stage) -> &Matrix4 {
        match stage {
            Stage::Translation => &self.alignment.translation,
            Stage::RotationToXoz => &self.alignment.to_xoz,
            Stage::RotationToZ => &self.alignment.to_z,
            Stage::PreRotation => &self.alignment.forward,
            Stage::PostRotation => &self.alignment.inverse,
            Stage::RotationAroundZ => &self.spin,
            Stage::Combined => &self.combined,
        }
    }

    /// Hands every intermediate matrix to `observer` in build order
    pub fn report(&self, observer: &mut dyn TransformObserver) {
        for stage in Stage::ALL {
            observer.observe(stage, self.stage(stage));
        }
    }

    /// Rotates a point
    pub fn apply(&self, point: Cartesian3) -> Cartesian3 {
        Cartesian3::from_homogeneous(&(self.combined * point.to_homogeneous()))
    }
}

/// Rotates `point` by `theta` radians about the line from `start` to `end`
///
/// Positive angles follow the right-hand rule about the direction
/// `end - start`.
///
/// # Errors
///
/// * [`RotationError::DegenerateAxis`](crate::RotationError::DegenerateAxis)
///   when `start` and `end` coincide
/// * [`RotationError::SingularTransform`](crate::RotationError::SingularTransform)
///   if the alignment matrix cannot be inverted
///
/// # Examples
///
/// ```rust
/// use line_rotation::{rotate_over_line, Cartesian3};
/// use std::f64::consts::PI;
///
/// // Half turn about the vertical line through (2, 3)
/// let q = rotate_over_line(
///     Cartesian3::new(2.0, 3.0, 0.0),
///     Cartesian3::new(2.0, 3.0, 1.0),
///     Cartesian3::new(3.0, 3.0, 0.0),
///     PI,
/// )
/// .unwrap();
/// assert!((q.x - 1.0).abs() < 1e-9);
/// assert!((q.y - 3.0).abs() < 1e-9);
/// ```
pub fn rotate_over_line(
    start: Cartesian3,
    end: Cartesian3,
    point: Cartesian3,
    theta: f64,
) -> Result<Cartesian3> {
    Ok(LineRotation::new(start, end, theta)?.apply(point))
}

/// Same as [`rotate_over_line`], reporting each intermediate matrix to `observer`
pub fn rotate_over_line_with(
    start: Cartesian3,
    end: Cartesian3,
    point: Cartesian3,
    theta: f64,
    observer: &mut dyn TransformObserver,
) -> Result<Cartesian3> {
    let rotation = LineRotation::new(start, end, theta)?;
    rotation.report(observer);
    Ok(rotation.apply(point))
}
