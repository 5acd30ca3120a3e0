//! Planetary orbital elements
//!
//! JPL "Keplerian Elements for Approximate Positions of the Major Planets"
//! (E. M. Standish), table 1: mean ecliptic and equinox of J2000, valid
//! 1800 AD – 2050 AD. Units: AU, degrees, and per-century rates.

use std::fmt;
use std::str::FromStr;

use crate::elements::OrbitalElements;
use crate::error::OrreryError;

/// Body identifier
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Body {
    /// Fixed at the origin of the heliocentric frame
    Sun,
    Mercury,
    Venus,
    /// Earth-Moon barycenter
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
        }
    }

    /// J2000 elements with secular rates. The Sun gets an all-zero set,
    /// which resolves to the origin with zero velocity.
    pub fn elements(&self) -> OrbitalElements {
        //                       a            e           i            L              ϖ              Ω
        match self {
            Self::Sun => OrbitalElements::new(0.0, 0.0, 0.0, 0.0, 0.0, 0.0),

            Self::Mercury => OrbitalElements::new(
                0.38709927, 0.20563593, 7.00497902, 252.25032350, 77.45779628, 48.33076593,
            ).with_rates(
                0.00000037, 0.00001906, -0.00594749, 149472.67411175, 0.16047689, -0.12534081,
            ),

            Self::Venus => OrbitalElements::new(
                0.72333566, 0.00677672, 3.39467605, 181.97909950, 131.60246718, 76.67984255,
            ).with_rates(
                0.00000390, -0.00004107, -0.00078890, 58517.81538729, 0.00268329, -0.27769418,
            ),

            Self::Earth => OrbitalElements::new(
                1.00000261, 0.01671123, -0.00001531, 100.46457166, 102.93768193, 0.0,
            ).with_rates(
                0.00000562, -0.00004392, -0.01294668, 35999.37244981, 0.32327364, 0.0,
            ),

            Self::Mars => OrbitalElements::new(
                1.52371034, 0.09339410, 1.84969142, -4.55343205, -23.94362959, 49.55953891,
            ).with_rates(
                0.00001847, 0.00007882, -0.00813131, 19140.30268499, 0.44441088, -0.29257343,
            ),

            Self::Jupiter => OrbitalElements::new(
                5.20288700, 0.04838624, 1.30439695, 34.39644051, 14.72847983, 100.47390909,
            ).with_rates(
                -0.00011607, -0.00013253, -0.00183714, 3034.74612775, 0.21252668, 0.20469106,
            ),

            Self::Saturn => OrbitalElements::new(
                9.53667594, 0.05386179, 2.48599187, 49.95424423, 92.59887831, 113.66242448,
            ).with_rates(
                -0.00125060, -0.00050991, 0.00193609, 1222.49362201, -0.41897216, -0.28867794,
            ),

            Self::Uranus => OrbitalElements::new(
                19.18916464, 0.04725744, 0.77263783, 313.23810451, 170.95427630, 74.01692503,
            ).with_rates(
                -0.00196176, -0.00004397, -0.00242939, 428.48202785, 0.40805281, 0.04240589,
            ),

            Self::Neptune => OrbitalElements::new(
                30.06992276, 0.00859048, 1.77004347, -55.12002969, 44.96476227, 131.78422574,
            ).with_rates(
                0.00026291, 0.00005105, 0.00035372, 218.45945325, -0.32241464, -0.00508664,
            ),

            Self::Pluto => OrbitalElements::new(
                39.48211675, 0.24882730, 17.14001206, 238.92903833, 224.06891629, 110.30393684,
            ).with_rates(
                -0.00031596, 0.00005170, 0.00004818, 145.20780515, -0.04062942, -0.01183482,
            ),
        }
    }

    /// All bodies: the Sun, then planets in order of distance from it
    pub fn all() -> &'static [Body] {
        &[
            Self::Sun, Self::Mercury, Self::Venus, Self::Earth, Self::Mars,
            Self::Jupiter, Self::Saturn, Self::Uranus, Self::Neptune, Self::Pluto,
        ]
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = OrreryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|b| b.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| OrreryError::UnknownBody(s.to_string()))
    }
}
