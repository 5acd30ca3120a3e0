//! Degree/radian helpers
//!
//! Public APIs take and return degrees. Radians only appear right before
//! trigonometry.

use crate::constants::FULL_TURN_DEG;

/// Converts degrees to radians
pub fn deg_to_rad(deg: f64) -> f64 {
    deg.to_radians()
}

/// Converts radians to degrees
pub fn rad_to_deg(rad: f64) -> f64 {
    rad.to_degrees()
}

/// Wrap an angle in degrees into [0, 360).
///
/// Uses floor rather than truncation, so negative angles wrap forward:
/// `-10` becomes `350`. NaN passes through unchanged.
pub fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle - (angle / FULL_TURN_DEG).floor() * FULL_TURN_DEG;

    // -1e-17 and friends round up to exactly 360
    if wrapped >= FULL_TURN_DEG {
        0.0
    } else {
        wrapped
    }
}
