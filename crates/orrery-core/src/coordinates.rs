use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::angles::{normalize_degrees, rad_to_deg};

/// Cartesian 3-vector in the heliocentric ecliptic frame.
///
/// Carries no unit of its own: positions inherit the length unit of the
/// semi-major axis they were computed from, velocities are that unit per day.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartesianVector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// Position relative to the orbit's focus
pub type PositionVector = CartesianVector;

/// Velocity relative to the orbit's focus (length unit per day)
pub type VelocityVector = CartesianVector;

impl CartesianVector {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0, z: 0.0 };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    pub fn distance_to(&self, other: &Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// True when no component is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor, self.z * factor)
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Ecliptic longitude/latitude as seen from the origin
    pub fn to_ecliptic(&self) -> EclipticCoordinates {
        let r = self.magnitude();
        let longitude_deg = normalize_degrees(rad_to_deg(self.y.atan2(self.x)));
        let latitude_deg = if r > 0.0 { rad_to_deg((self.z / r).asin()) } else { 0.0 };
        EclipticCoordinates { r, longitude_deg, latitude_deg }
    }
}

impl From<Vector3<f64>> for CartesianVector {
    fn from(v: Vector3<f64>) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<CartesianVector> for Vector3<f64> {
    fn from(v: CartesianVector) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<[f64; 3]> for CartesianVector {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<CartesianVector> for (f64, f64, f64) {
    fn from(v: CartesianVector) -> Self {
        (v.x, v.y, v.z)
    }
}

/// Spherical ecliptic coordinates (angles in degrees)
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoordinates {
    pub r: f64,              // same unit as the source vector
    pub longitude_deg: f64,  // [0, 360)
    pub latitude_deg: f64,   // [-90, 90]
}

impl EclipticCoordinates {
    pub fn to_cartesian(&self) -> CartesianVector {
        let lon = self.longitude_deg.to_radians();
        let lat = self.latitude_deg.to_radians();
        CartesianVector {
            x: self.r * lat.cos() * lon.cos(),
            y: self.r * lat.cos() * lon.sin(),
            z: self.r * lat.sin(),
        }
    }
}
