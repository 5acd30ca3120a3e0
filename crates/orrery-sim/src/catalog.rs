//! Body catalogs: the element tables fed into the resolver
//!
//! A catalog file is JSON:
//!
//! ```json
//! {
//!   "solver": { "tolerance": 1e-6, "max_iterations": 30 },
//!   "bodies": [
//!     { "name": "Earth", "a": 1.00000261, "e": 0.01671123, "i": -0.00001531,
//!       "L": 100.46457166, "wbar": 102.93768193, "O": 0.0, "LRate": 35999.37244981 }
//!   ]
//! }
//! ```
//!
//! `solver` and every `*Rate` field are optional.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::elements::OrbitalElements;
use crate::error::{OrreryError, Result};
use crate::kepler::SolverConfig;
use crate::planets::Body;

/// Elements for one named body
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NamedElements {
    pub name: String,
    #[serde(flatten)]
    pub elements: OrbitalElements,
}

/// Ordered set of bodies plus the solver settings used to resolve them
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub solver: SolverConfig,
    bodies: Vec<NamedElements>,
}

impl Catalog {
    /// Build from named elements, rejecting duplicate names (case-insensitive)
    pub fn new(bodies: Vec<NamedElements>, solver: SolverConfig) -> Result<Self> {
        let catalog = Self { solver, bodies };
        catalog.check_unique()?;
        Ok(catalog)
    }

    /// The built-in JPL planet table
    pub fn planets() -> Self {
        let bodies = Body::all()
            .iter()
            .map(|b| NamedElements { name: b.name().to_string(), elements: b.elements() })
            .collect();
        Self { solver: SolverConfig::default(), bodies }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let catalog: Self = serde_json::from_str(json)?;
        catalog.check_unique()?;
        Ok(catalog)
    }

    /// Load a catalog file from disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let catalog = Self::from_json_str(&text)?;
        info!("Loaded {} bodies from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn check_unique(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for body in &self.bodies {
            if !seen.insert(body.name.to_lowercase()) {
                return Err(OrreryError::DuplicateBody(body.name.clone()));
            }
        }
        Ok(())
    }

    /// Look up a body by name (case-insensitive)
    pub fn get(&self, name: &str) -> Result<&NamedElements> {
        self.bodies
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| OrreryError::UnknownBody(name.to_string()))
    }

    pub fn bodies(&self) -> &[NamedElements] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::planets()
    }
}
