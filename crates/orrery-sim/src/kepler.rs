//! Kepler's equation and the third-law period estimate

use orrery_core::constants::DAYS_PER_YEAR;
use serde::{Deserialize, Serialize};

/// Stop once a Newton step is smaller than this (radians)
pub const DEFAULT_TOLERANCE: f64 = 1e-6;

/// Hard cap on Newton steps
pub const DEFAULT_MAX_ITERATIONS: u32 = 30;

/// Newton-Raphson stopping rules.
///
/// The defaults are fine for planets. Near-parabolic orbits (comets, e → 1)
/// can hit the iteration cap before the step drops under the tolerance; the
/// solver then returns its last estimate without complaint.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    pub tolerance: f64,
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// Outcome of one solve, with the diagnostics the plain solver discards
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KeplerSolution {
    /// Eccentric anomaly E (radians)
    pub eccentric_anomaly: f64,
    /// Newton steps taken
    pub iterations: u32,
    /// E − e·sin(E) − M at the returned E
    pub residual: f64,
    /// Whether the last step fell under the tolerance
    pub converged: bool,
}

/// Solve M = E − e·sin(E) for E by Newton-Raphson, starting from E₀ = M.
pub fn solve_kepler_detailed(mean_anomaly: f64, e: f64, config: &SolverConfig) -> KeplerSolution {
    let m = mean_anomaly;
    let mut ea = m;
    let mut iterations = 0;
    let mut converged = false;

    while iterations < config.max_iterations {
        let delta = (ea - e * ea.sin() - m) / (1.0 - e * ea.cos());
        ea -= delta;
        iterations += 1;

        // NaN deltas never compare below the tolerance, so they run to the cap
        if delta.abs() < config.tolerance {
            converged = true;
            break;
        }
    }

    KeplerSolution {
        eccentric_anomaly: ea,
        iterations,
        residual: ea - e * ea.sin() - m,
        converged,
    }
}

/// Eccentric anomaly (radians) for mean anomaly `mean_anomaly` (radians)
/// using the default stopping rules.
pub fn solve_kepler_equation(mean_anomaly: f64, e: f64) -> f64 {
    solve_kepler_detailed(mean_anomaly, e, &SolverConfig::default()).eccentric_anomaly
}

/// Orbital period in days from Kepler's third law, P = 365.25·a^1.5.
///
/// `a` in AU; assumes a solar-mass primary and ignores the body's own mass.
pub fn orbital_period_days(a: f64) -> f64 {
    DAYS_PER_YEAR * a.powf(1.5)
}
