//! Position and velocity resolution with the zero-vector fail-safe
//!
//! A body whose elements produce NaN or infinite coordinates (e ≥ 1,
//! garbage input) is parked at the origin and logged rather than poisoning whatever consumes the vector. One bad body
//! never stops the others from resolving. A negative semi-major axis still
//! yields a finite position; only its velocity falls back.

use std::f64::consts::TAU;

use hifitime::Epoch;
use orrery_core::coordinates::{CartesianVector, PositionVector, VelocityVector};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::elements::{OrbitalElements, PropagatedElements};
use crate::epoch::centuries_since_epoch;
use crate::kepler::{orbital_period_days, solve_kepler_detailed, KeplerSolution, SolverConfig};

/// Result of a guarded position or velocity query
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Resolution {
    /// Every component is finite
    Resolved(CartesianVector),
    /// The transform produced NaN or ±∞; `raw` is kept for diagnostics
    FailSafe { raw: CartesianVector },
}

impl Resolution {
    fn guard(raw: CartesianVector) -> Self {
        if raw.is_finite() {
            Self::Resolved(raw)
        } else {
            Self::FailSafe { raw }
        }
    }

    pub fn is_fail_safe(&self) -> bool {
        matches!(self, Self::FailSafe { .. })
    }

    /// The resolved vector, or the zero vector for a fail-safe result
    pub fn into_vector(self) -> CartesianVector {
        match self {
            Self::Resolved(v) => v,
            Self::FailSafe { .. } => CartesianVector::ZERO,
        }
    }
}

/// Position and velocity of one body at one instant
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    pub position: PositionVector,
    pub velocity: VelocityVector,
    /// True when either vector was replaced by the zero vector
    pub degraded: bool,
}

/// Propagate and solve once; position and velocity share the result
fn solve(elements: &OrbitalElements, centuries: f64, config: &SolverConfig) -> (PropagatedElements, KeplerSolution) {
    let propagated = elements.propagate(centuries);
    let solution = solve_kepler_detailed(propagated.mean_anomaly_rad(), propagated.e, config);

    if !solution.converged {
        debug!(
            e = propagated.e,
            iterations = solution.iterations,
            residual = solution.residual,
            "Kepler solver hit the iteration cap"
        );
    }

    (propagated, solution)
}

fn log_fail_safe(what: &str, elements: &OrbitalElements, centuries: f64, raw: &CartesianVector) {
    warn!(
        ?elements,
        centuries,
        x = raw.x,
        y = raw.y,
        z = raw.z,
        "non-finite {} in Keplerian propagation, substituting zero vector",
        what
    );
}

/// Guarded position `centuries` Julian centuries after J2000
pub fn resolve_position_at(elements: &OrbitalElements, centuries: f64, config: &SolverConfig) -> Resolution {
    let (propagated, solution) = solve(elements, centuries, config);
    let resolution = Resolution::guard(propagated.to_cartesian(solution.eccentric_anomaly));

    if let Resolution::FailSafe { raw } = &resolution {
        log_fail_safe("position", elements, centuries, raw);
    }
    resolution
}

/// Guarded position at `at`, default solver settings
pub fn resolve_position(elements: &OrbitalElements, at: Epoch) -> Resolution {
    resolve_position_at(elements, centuries_since_epoch(at), &SolverConfig::default())
}

/// Heliocentric ecliptic position at `at`, in the unit of `elements.a`.
///
/// Returns the zero vector when the computation is not finite.
pub fn compute_position(elements: &OrbitalElements, at: Epoch) -> PositionVector {
    resolve_position(elements, at).into_vector()
}

/// [`compute_position`] for a time already expressed in centuries since J2000
pub fn compute_position_at(elements: &OrbitalElements, centuries: f64) -> PositionVector {
    resolve_position_at(elements, centuries, &SolverConfig::default()).into_vector()
}

/// Guarded velocity in length units of `a` per day.
///
/// Mean motion comes from the third-law period of the propagated `a`, so
/// rates other than the anomaly's own motion are not differentiated.
pub fn resolve_velocity_at(elements: &OrbitalElements, centuries: f64, config: &SolverConfig) -> Resolution {
    let (propagated, solution) = solve(elements, centuries, config);
    let resolution = Resolution::guard(velocity_of(&propagated, &solution));

    if let Resolution::FailSafe { raw } = &resolution {
        log_fail_safe("velocity", elements, centuries, raw);
    }
    resolution
}

fn velocity_of(propagated: &PropagatedElements, solution: &KeplerSolution) -> CartesianVector {
    // a = 0 is a body pinned at the origin, not a numerical failure
    if propagated.a == 0.0 {
        return CartesianVector::ZERO;
    }
    let mean_motion = TAU / orbital_period_days(propagated.a);
    propagated.velocity(solution.eccentric_anomaly, mean_motion)
}

/// Heliocentric ecliptic velocity at `at` (unit of `a` per day)
pub fn compute_velocity(elements: &OrbitalElements, at: Epoch) -> VelocityVector {
    resolve_velocity_at(elements, centuries_since_epoch(at), &SolverConfig::default()).into_vector()
}

/// Position and velocity from a single propagate/solve pass
pub fn compute_state_at(elements: &OrbitalElements, centuries: f64, config: &SolverConfig) -> BodyState {
    let (propagated, solution) = solve(elements, centuries, config);

    let position = Resolution::guard(propagated.to_cartesian(solution.eccentric_anomaly));
    let velocity = Resolution::guard(velocity_of(&propagated, &solution));

    if let Resolution::FailSafe { raw } = &position {
        log_fail_safe("position", elements, centuries, raw);
    }
    if let Resolution::FailSafe { raw } = &velocity {
        log_fail_safe("velocity", elements, centuries, raw);
    }

    BodyState {
        degraded: position.is_fail_safe() || velocity.is_fail_safe(),
        position: position.into_vector(),
        velocity: velocity.into_vector(),
    }
}

/// [`compute_state_at`] at `at` with default solver settings
pub fn compute_state(elements: &OrbitalElements, at: Epoch) -> BodyState {
    compute_state_at(elements, centuries_since_epoch(at), &SolverConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::epoch::j2000;
    use approx::assert_relative_eq;

    fn earth_like() -> OrbitalElements {
        OrbitalElements::new(1.0, 0.0167, 0.00005, 100.46, 102.94, -11.26)
    }

    #[test]
    fn test_earth_scenario_distance() {
        let pos = compute_position(&earth_like(), j2000());
        let r = pos.magnitude();
        assert!((0.983..=1.017).contains(&r), "r = {}", r);
        assert!(pos.z.abs() < 1e-5);
    }

    #[test]
    fn test_earth_is_opposite_the_sun_in_early_january() {
        // Near perihelion in early January the Sun appears at ~280° ecliptic
        // longitude, so the Earth sits at ~100°
        let lon = compute_position(&earth_like(), j2000()).to_ecliptic().longitude_deg;
        assert!((lon - 100.5).abs() < 1.5, "longitude {}", lon);
    }

    #[test]
    fn test_circular_orbit_radius_equals_a() {
        let el = OrbitalElements::new(3.7, 0.0, 23.0, 250.0, 40.0, 75.0);
        for t in [-2.0, -0.3, 0.0, 0.5, 4.0] {
            let r = compute_position_at(&el, t).magnitude();
            assert_relative_eq!(r, 3.7, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_hyperbolic_eccentricity_is_exactly_zero() {
        let el = OrbitalElements::new(1.0, 1.5, 5.0, 100.0, 30.0, 10.0);
        let resolution = resolve_position(&el, j2000());
        assert!(resolution.is_fail_safe());
        assert_eq!(resolution.into_vector(), CartesianVector::ZERO);
        assert_eq!(compute_position(&el, j2000()), CartesianVector::new(0.0, 0.0, 0.0));
    }

    #[test]
    fn test_nan_input_is_contained() {
        let el = OrbitalElements::new(f64::NAN, 0.1, 0.0, 0.0, 0.0, 0.0);
        let state = compute_state(&el, j2000());
        assert!(state.degraded);
        assert_eq!(state.position, CartesianVector::ZERO);
        assert_eq!(state.velocity, CartesianVector::ZERO);
    }

    #[test]
    fn test_infinite_axis_is_contained() {
        let el = OrbitalElements::new(f64::INFINITY, 0.1, 1.0, 10.0, 20.0, 30.0);
        assert!(resolve_position_at(&el, 0.0, &SolverConfig::default()).is_fail_safe());
    }

    #[test]
    fn test_zero_axis_is_origin_not_fail_safe() {
        let el = OrbitalElements::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0);
        let state = compute_state_at(&el, 0.0, &SolverConfig::default());
        assert!(!state.degraded);
        assert_eq!(state.position, CartesianVector::ZERO);
        assert_eq!(state.velocity, CartesianVector::ZERO);
        assert!(!resolve_velocity_at(&el, 0.0, &SolverConfig::default()).is_fail_safe());
    }

    #[test]
    fn test_negative_axis_degrades_velocity_only() {
        let el = OrbitalElements::new(-2.0, 0.1, 3.0, 40.0, 15.0, 20.0);
        let config = SolverConfig::default();

        match resolve_position_at(&el, 0.0, &config) {
            Resolution::Resolved(v) => assert!(v.magnitude() > 1.0),
            other => panic!("unexpected {:?}", other),
        }
        assert!(resolve_velocity_at(&el, 0.0, &config).is_fail_safe());

        let state = compute_state_at(&el, 0.0, &config);
        assert!(state.degraded);
        assert_eq!(state.velocity, CartesianVector::ZERO);
        assert_ne!(state.position, CartesianVector::ZERO);
    }

    #[test]
    fn test_resolved_for_valid_elements() {
        match resolve_position(&earth_like(), j2000()) {
            Resolution::Resolved(v) => assert!(v.is_finite()),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_circular_speed() {
        let el = OrbitalElements::new(1.0, 0.0, 0.0, 45.0, 0.0, 0.0);
        let v = resolve_velocity_at(&el, 0.0, &SolverConfig::default()).into_vector();
        assert_relative_eq!(v.magnitude(), TAU / 365.25, epsilon = 1e-12);

        // Prograde: velocity leads position by 90°
        let r = compute_position_at(&el, 0.0);
        assert!((r.x * v.x + r.y * v.y + r.z * v.z).abs() < 1e-12);
        assert!(r.x * v.y - r.y * v.x > 0.0);
    }

    #[test]
    fn test_velocity_matches_finite_difference() {
        // With rates matching the third-law mean motion the element model and
        // the analytic derivative describe the same motion
        let a: f64 = 1.5;
        let n_deg_per_century = 360.0 / orbital_period_days(a) * 36525.0;
        let el = OrbitalElements::new(a, 0.2, 4.0, 60.0, 20.0, 50.0)
            .with_rates(0.0, 0.0, 0.0, n_deg_per_century, 0.0, 0.0);

        let dt_days = 0.01;
        let dt = dt_days / 36525.0;
        let before = compute_position_at(&el, 0.3 - dt);
        let after = compute_position_at(&el, 0.3 + dt);
        let numeric = CartesianVector::new(
            (after.x - before.x) / (2.0 * dt_days),
            (after.y - before.y) / (2.0 * dt_days),
            (after.z - before.z) / (2.0 * dt_days),
        );
        let analytic = compute_state_at(&el, 0.3, &SolverConfig::default()).velocity;

        assert!(numeric.distance_to(&analytic) < 1e-6 * analytic.magnitude().max(1e-3),
            "numeric {:?} vs analytic {:?}", numeric, analytic);
    }

    #[test]
    fn test_state_matches_separate_queries() {
        let el = earth_like().with_rates(0.0, -4e-5, -0.013, 35999.37, 0.32, -0.18);
        let at = Epoch::from_gregorian_utc(2024, 3, 20, 0, 0, 0, 0);
        let state = compute_state(&el, at);
        assert!(!state.degraded);
        assert_eq!(state.position, compute_position(&el, at));
        assert_eq!(state.velocity, compute_velocity(&el, at));
    }
}
