//! Whole-catalog snapshots

use hifitime::Epoch;
use rayon::prelude::*;
use serde::Serialize;
use tracing::debug;

use crate::catalog::Catalog;
use crate::epoch::centuries_since_epoch;
use crate::position::{compute_state_at, BodyState};

/// State of one catalog body
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BodySnapshot {
    pub name: String,
    #[serde(flatten)]
    pub state: BodyState,
}

/// Every body in a catalog at one epoch
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub epoch: Epoch,
    /// Julian centuries since J2000
    pub centuries: f64,
    /// Same order as the catalog
    pub bodies: Vec<BodySnapshot>,
}

impl Snapshot {
    pub fn get(&self, name: &str) -> Option<&BodySnapshot> {
        self.bodies.iter().find(|b| b.name.eq_ignore_ascii_case(name))
    }

    /// Bodies that fell back to the zero vector
    pub fn degraded(&self) -> impl Iterator<Item = &BodySnapshot> {
        self.bodies.iter().filter(|b| b.state.degraded)
    }
}

impl Catalog {
    /// Resolve every body at `epoch`.
    ///
    /// Bodies are independent, so they are evaluated in parallel.
    pub fn snapshot(&self, epoch: Epoch) -> Snapshot {
        let centuries = centuries_since_epoch(epoch);
        let solver = self.solver;

        let bodies: Vec<BodySnapshot> = self
            .bodies()
            .par_iter()
            .map(|body| BodySnapshot {
                name: body.name.clone(),
                state: compute_state_at(&body.elements, centuries, &solver),
            })
            .collect();

        debug!("Snapshot of {} bodies at T = {:.6} centuries", bodies.len(), centuries);

        Snapshot { epoch, centuries, bodies }
    }
}
