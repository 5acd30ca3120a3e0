use crate::coordinates::*;
use approx::assert_relative_eq;
use nalgebra::Vector3;

#[test]
fn test_cartesian_to_ecliptic_roundtrip() {
    let positions = [
        CartesianVector::new(1.0, 0.0, 0.0),
        CartesianVector::new(0.0, 1.0, 0.0),
        CartesianVector::new(-0.2, -0.97, 0.01),
        CartesianVector::new(1.0, 1.0, 1.0),
        CartesianVector::new(5.2, 0.3, -0.1),
    ];

    for pos in positions {
        let back = pos.to_ecliptic().to_cartesian();

        let tolerance = pos.magnitude() * 1e-12;
        assert!((pos.x - back.x).abs() < tolerance, "x mismatch");
        assert!((pos.y - back.y).abs() < tolerance, "y mismatch");
        assert!((pos.z - back.z).abs() < tolerance, "z mismatch");
    }
}

#[test]
fn test_ecliptic_longitude_is_wrapped() {
    // Fourth quadrant: atan2 gives a negative angle
    let ecl = CartesianVector::new(1.0, -1.0, 0.0).to_ecliptic();
    assert_relative_eq!(ecl.longitude_deg, 315.0, epsilon = 1e-12);
    assert_relative_eq!(ecl.latitude_deg, 0.0);
}

#[test]
fn test_origin_has_zero_latitude() {
    let ecl = CartesianVector::ZERO.to_ecliptic();
    assert_eq!(ecl.r, 0.0);
    assert_eq!(ecl.latitude_deg, 0.0);
}

#[test]
fn test_nalgebra_conversions() {
    let v = CartesianVector::new(1.0, -2.0, 3.0);
    let n: Vector3<f64> = v.into();
    assert_eq!(n, Vector3::new(1.0, -2.0, 3.0));
    assert_eq!(CartesianVector::from(n), v);
    assert_eq!(<(f64, f64, f64)>::from(v), (1.0, -2.0, 3.0));
    assert_eq!(CartesianVector::from(v.to_array()), v);
}

#[test]
fn test_finite_check() {
    assert!(CartesianVector::new(1.0, 2.0, 3.0).is_finite());
    assert!(!CartesianVector::new(f64::NAN, 0.0, 0.0).is_finite());
    assert!(!CartesianVector::new(0.0, f64::INFINITY, 0.0).is_finite());
}

#[test]
fn test_distance_and_scale() {
    let a = CartesianVector::new(3.0, 4.0, 0.0);
    assert_eq!(a.magnitude(), 5.0);
    assert_eq!(a.distance_to(&CartesianVector::ZERO), 5.0);
    assert_eq!(a.scale(2.0), CartesianVector::new(6.0, 8.0, 0.0));
}
