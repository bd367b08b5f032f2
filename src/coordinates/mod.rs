pub mod angle;
pub mod cartesian;

pub use angle::{Angle, AngleUnit};
pub use cartesian::Cartesian3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_boundary_conversion() {
        // θ_rad = θ_deg · π / 180
        let theta = Angle::from_degrees(60.0);
        assert!((theta.to_radians() - std::f64::consts::FRAC_PI_3).abs() < 1e-15);
    }

    #[test]
    fn test_points_are_copy_values() {
        let p = Cartesian3::new(1.0, 2.0, 3.0);
        let q = p;
        assert_eq!(p, q);
    }
}
