//! Orbital plane to heliocentric ecliptic transform

use nalgebra::{Matrix3, Vector3};
use orrery_core::angles::deg_to_rad;
use orrery_core::coordinates::CartesianVector;

use crate::elements::PropagatedElements;

/// Rotation matrix from the perifocal frame (x toward periapsis) to the
/// ecliptic frame. All angles in degrees.
///
/// Combined rotation: R_z(-Ω) * R_x(-i) * R_z(-ω)
pub fn perifocal_to_ecliptic(inclination: f64, long_node: f64, arg_peri: f64) -> Matrix3<f64> {
    let (sin_o, cos_o) = deg_to_rad(long_node).sin_cos();
    let (sin_i, cos_i) = deg_to_rad(inclination).sin_cos();
    let (sin_w, cos_w) = deg_to_rad(arg_peri).sin_cos();

    Matrix3::new(
        cos_o * cos_w - sin_o * sin_w * cos_i,
        -cos_o * sin_w - sin_o * cos_w * cos_i,
        sin_o * sin_i,

        sin_o * cos_w + cos_o * sin_w * cos_i,
        -sin_o * sin_w + cos_o * cos_w * cos_i,
        -cos_o * sin_i,

        sin_w * sin_i,
        cos_w * sin_i,
        cos_i,
    )
}

/// Position in the orbital plane for eccentric anomaly `ecc_anomaly` (radians)
pub fn perifocal_position(a: f64, e: f64, ecc_anomaly: f64) -> Vector3<f64> {
    let (sin_e, cos_e) = ecc_anomaly.sin_cos();
    Vector3::new(
        a * (cos_e - e),
        a * (1.0 - e * e).sqrt() * sin_e,
        0.0,
    )
}

/// Velocity in the orbital plane, given mean motion `n` (radians per day).
///
/// dE/dt = n / (1 − e·cos E), then differentiate the perifocal position.
pub fn perifocal_velocity(a: f64, e: f64, ecc_anomaly: f64, n: f64) -> Vector3<f64> {
    let (sin_e, cos_e) = ecc_anomaly.sin_cos();
    let e_dot = n / (1.0 - e * cos_e);
    Vector3::new(
        -a * sin_e * e_dot,
        a * (1.0 - e * e).sqrt() * cos_e * e_dot,
        0.0,
    )
}

impl PropagatedElements {
    /// Perifocal → ecliptic rotation for these elements
    pub fn rotation(&self) -> Matrix3<f64> {
        perifocal_to_ecliptic(self.i, self.long_node, self.argument_of_periapsis_deg())
    }

    /// Ecliptic position for an already-solved eccentric anomaly. No NaN guard.
    pub fn to_cartesian(&self, ecc_anomaly: f64) -> CartesianVector {
        (self.rotation() * perifocal_position(self.a, self.e, ecc_anomaly)).into()
    }

    /// Ecliptic velocity (length unit per day). No NaN guard.
    pub fn velocity(&self, ecc_anomaly: f64, mean_motion: f64) -> CartesianVector {
        (self.rotation() * perifocal_velocity(self.a, self.e, ecc_anomaly, mean_motion)).into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rotation_is_orthonormal() {
        let rot = perifocal_to_ecliptic(17.14, 110.3, 113.76);
        let identity = rot * rot.transpose();
        assert_relative_eq!(identity, Matrix3::identity(), epsilon = 1e-12);
        assert_relative_eq!(rot.determinant(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_angles_are_identity() {
        assert_relative_eq!(perifocal_to_ecliptic(0.0, 0.0, 0.0), Matrix3::identity());
    }

    #[test]
    fn test_node_rotates_about_ecliptic_pole() {
        // Periapsis on the node line, 90° node: +x perifocal maps to +y
        let rot = perifocal_to_ecliptic(30.0, 90.0, 0.0);
        let v = rot * Vector3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(v, Vector3::new(0.0, 1.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn test_inclination_lifts_out_of_plane() {
        // ω = 90°: periapsis is 90° past the node, at the top of the tilt
        let rot = perifocal_to_ecliptic(30.0, 0.0, 90.0);
        let v = rot * Vector3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(v.z, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_perifocal_position_at_apsides() {
        let peri = perifocal_position(2.0, 0.25, 0.0);
        assert_relative_eq!(peri, Vector3::new(1.5, 0.0, 0.0), epsilon = 1e-12);

        let apo = perifocal_position(2.0, 0.25, std::f64::consts::PI);
        assert_relative_eq!(apo.x, -2.5, epsilon = 1e-12);
        assert!(apo.y.abs() < 1e-12);
    }

    #[test]
    fn test_perifocal_velocity_is_tangent_for_circle() {
        let e_anom = 0.7;
        let r = perifocal_position(1.0, 0.0, e_anom);
        let v = perifocal_velocity(1.0, 0.0, e_anom, 0.01);
        assert!(r.dot(&v).abs() < 1e-15);
        assert_relative_eq!(v.norm(), 0.01, epsilon = 1e-15);
    }
}
