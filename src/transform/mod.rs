//! Homogeneous 4×4 transform primitives
//!
//! Every builder returns an affine matrix whose bottom row is `(0, 0, 0, 1)`.
//! Matrices act on column vectors, so in a product `A * B` the right-hand
//! matrix `B` is applied first.
//!
//! # Rotation Conventions
//!
//! `rotate_x` and `rotate_z` are the usual right-handed rotations. `rotate_y`
//! places `-sin θ` in row 0, column 2 and `+sin θ` in row 2, column 0:
//!
//! ```text
//! | cos θ   0  -sin θ  0 |
//! |   0     1    0     0 |
//! | sin θ   0   cos θ  0 |
//! |   0     0    0     1 |
//! ```
//!
//! so a positive angle turns +X toward +Z. This is the transpose of the
//! common textbook `Ry` and is what [`line::AxisAlignment`] relies on when it
//! tips a line from the xOz plane onto the Z axis. Intermediate matrices will
//! therefore differ from a textbook reference whenever the rotation axis is
//! not parallel to Z; the final rotated points do not.

pub mod line;
pub mod rotate;

/// Row-major 4×4 homogeneous transform stored on the stack
pub type Matrix4 = nalgebra::Matrix4<f64>;

/// Translation by `(dx, dy, dz)`
pub fn translation(dx: f64, dy: f64, dz: f64) -> Matrix4 {
    Matrix4::new(
        1.0, 0.0, 0.0, dx, //
        0.0, 1.0, 0.0, dy, //
        0.0, 0.0, 1.0, dz, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation by `theta` radians about the X axis
pub fn rotate_x(theta: f64) -> Matrix4 {
    let (s, c) = theta.sin_cos();
    Matrix4::new(
        1.0, 0.0, 0.0, 0.0, //
        0.0, c, -s, 0.0, //
        0.0, s, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation by `theta` radians about the Y axis, turning +X toward +Z
pub fn rotate_y(theta: f64) -> Matrix4 {
    let (s, c) = theta.sin_cos();
    Matrix4::new(
        c, 0.0, -s, 0.0, //
        0.0, 1.0, 0.0, 0.0, //
        s, 0.0, c, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Rotation by `theta` radians about the Z axis
pub fn rotate_z(theta: f64) -> Matrix4 {
    let (s, c) = theta.sin_cos();
    Matrix4::new(
        c, -s, 0.0, 0.0, //
        s, c, 0.0, 0.0, //
        0.0, 0.0, 1.0, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::Cartesian3;
    use approx::assert_abs_diff_eq;
    use nalgebra::Vector4;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::f64::consts::{FRAC_PI_2, PI};

    fn apply(m: &Matrix4, p: Cartesian3) -> Cartesian3 {
        Cartesian3::from_homogeneous(&(m * p.to_homogeneous()))
    }

    fn assert_point_eq(a: Cartesian3, b: Cartesian3) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-12);
        assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-12);
        assert_abs_diff_eq!(a.z, b.z, epsilon = 1e-12);
    }

    #[test]
    fn test_translation_moves_points() {
        let t = translation(1.0, -2.0, 3.5);
        assert_point_eq(
            apply(&t, Cartesian3::new(1.0, 1.0, 1.0)),
            Cartesian3::new(2.0, -1.0, 4.5),
        );

        // Directions (w = 0) are unaffected by translation
        let dir = t * Vector4::new(1.0, 0.0, 0.0, 0.0);
        assert_eq!(dir, Vector4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn test_quarter_turns() {
        let x = Cartesian3::new(1.0, 0.0, 0.0);
        let y = Cartesian3::new(0.0, 1.0, 0.0);
        let z = Cartesian3::new(0.0, 0.0, 1.0);

        assert_point_eq(apply(&rotate_x(FRAC_PI_2), y), z);
        assert_point_eq(apply(&rotate_z(FRAC_PI_2), x), y);

        // rotate_y turns +X toward +Z and +Z toward -X
        assert_point_eq(apply(&rotate_y(FRAC_PI_2), x), z);
        assert_point_eq(apply(&rotate_y(FRAC_PI_2), z), -x);
    }

    #[test]
    fn test_rotate_y_layout() {
        let m = rotate_y(0.3);
        assert_eq!(m[(0, 2)], -(0.3_f64).sin());
        assert_eq!(m[(2, 0)], (0.3_f64).sin());
        assert_eq!(m[(0, 0)], (0.3_f64).cos());
        assert_eq!(m[(2, 2)], (0.3_f64).cos());
    }

    #[test]
    fn test_bottom_row_is_affine() {
        let mut rng = StdRng::seed_from_u64(20240611);
        for _ in 0..50 {
            let theta = rng.gen_range(-10.0..10.0);
            let (dx, dy, dz) = (rng.gen::<f64>(), rng.gen::<f64>(), rng.gen::<f64>());
            for m in [
                translation(dx, dy, dz),
                rotate_x(theta),
                rotate_y(theta),
                rotate_z(theta),
            ] {
                assert_eq!(m.row(3).iter().copied().collect::<Vec<_>>(), vec![0.0, 0.0, 0.0, 1.0]);
            }
        }
    }

    #[test]
    fn test_rotations_are_proper_orthogonal() {
        let mut rng = StdRng::seed_from_u64(77);
        for _ in 0..50 {
            let theta = rng.gen_range(-2.0 * PI..2.0 * PI);
            for m in [rotate_x(theta), rotate_y(theta), rotate_z(theta)] {
                let r = m.fixed_view::<3, 3>(0, 0).into_owned();
                let should_be_identity = r.transpose() * r;
                assert!((should_be_identity - nalgebra::Matrix3::identity()).norm() < 1e-12);
                assert_abs_diff_eq!(r.determinant(), 1.0, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn test_opposite_angles_cancel() {
        let theta = 1.234;
        for (a, b) in [
            (rotate_x(theta), rotate_x(-theta)),
            (rotate_y(theta), rotate_y(-theta)),
            (rotate_z(theta), rotate_z(-theta)),
        ] {
            assert!((a * b - Matrix4::identity()).norm() < 1e-12);
        }
        assert_eq!(
            translation(1.0, 2.0, 3.0) * translation(-1.0, -2.0, -3.0),
            Matrix4::identity()
        );
    }
}
