//! Keplerian orbital elements and secular propagation

use orrery_core::angles::{deg_to_rad, normalize_degrees};
use serde::{Deserialize, Serialize};

/// Classical orbital elements at J2000 plus their rates per Julian century.
///
/// Angles are degrees. `a` may be in any length unit (the built-in planet
/// table uses AU); positions come back in the same unit. Serialized names
/// follow the usual table headings: `a, e, i, L, wbar, O` and `aRate` etc.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrbitalElements {
    /// Semi-major axis
    pub a: f64,
    /// Eccentricity (0 ≤ e < 1 for bound orbits, not enforced)
    pub e: f64,
    /// Inclination (degrees)
    pub i: f64,
    /// Mean longitude L (degrees)
    #[serde(rename = "L")]
    pub mean_long: f64,
    /// Longitude of periapsis ϖ (degrees)
    #[serde(rename = "wbar")]
    pub long_peri: f64,
    /// Longitude of ascending node Ω (degrees)
    #[serde(rename = "O")]
    pub long_node: f64,

    #[serde(default)]
    pub a_rate: f64,
    #[serde(default)]
    pub e_rate: f64,
    #[serde(default)]
    pub i_rate: f64,
    #[serde(default, rename = "LRate")]
    pub mean_long_rate: f64,
    #[serde(default, rename = "wbarRate")]
    pub long_peri_rate: f64,
    #[serde(default, rename = "ORate")]
    pub long_node_rate: f64,
}

impl OrbitalElements {
    /// Elements with all rates zero
    pub const fn new(a: f64, e: f64, i: f64, mean_long: f64, long_peri: f64, long_node: f64) -> Self {
        Self {
            a, e, i, mean_long, long_peri, long_node,
            a_rate: 0.0,
            e_rate: 0.0,
            i_rate: 0.0,
            mean_long_rate: 0.0,
            long_peri_rate: 0.0,
            long_node_rate: 0.0,
        }
    }

    /// Attach secular rates (per Julian century)
    pub const fn with_rates(
        self,
        a_rate: f64, e_rate: f64, i_rate: f64,
        mean_long_rate: f64, long_peri_rate: f64, long_node_rate: f64,
    ) -> Self {
        Self { a_rate, e_rate, i_rate, mean_long_rate, long_peri_rate, long_node_rate, ..self }
    }

    /// Advance elements `centuries` Julian centuries from J2000.
    ///
    /// Linear in time. `a` and `e` are not clamped, so a large `e_rate` can
    /// push `e` past 1; the position resolver's fail-safe handles that.
    pub fn propagate(&self, centuries: f64) -> PropagatedElements {
        PropagatedElements {
            a: self.a + self.a_rate * centuries,
            e: self.e + self.e_rate * centuries,
            i: normalize_degrees(self.i + self.i_rate * centuries),
            mean_long: normalize_degrees(self.mean_long + self.mean_long_rate * centuries),
            long_peri: normalize_degrees(self.long_peri + self.long_peri_rate * centuries),
            long_node: normalize_degrees(self.long_node + self.long_node_rate * centuries),
        }
    }
}

/// Elements evaluated at one epoch. Angles are wrapped into [0, 360).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PropagatedElements {
    pub a: f64,
    pub e: f64,
    pub i: f64,
    pub mean_long: f64,
    pub long_peri: f64,
    pub long_node: f64,
}

impl PropagatedElements {
    /// M = L − ϖ, wrapped into [0, 360)
    pub fn mean_anomaly_deg(&self) -> f64 {
        normalize_degrees(self.mean_long - self.long_peri)
    }

    pub fn mean_anomaly_rad(&self) -> f64 {
        deg_to_rad(self.mean_anomaly_deg())
    }

    /// ω = ϖ − Ω (not wrapped; only fed to sin/cos)
    pub fn argument_of_periapsis_deg(&self) -> f64 {
        self.long_peri - self.long_node
    }
}

/// Free-function form of [`OrbitalElements::propagate`]
pub fn propagate_elements(elements: &OrbitalElements, centuries: f64) -> PropagatedElements {
    elements.propagate(centuries)
}
