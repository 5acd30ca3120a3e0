pub mod catalog;
pub mod elements;
pub mod epoch;
pub mod error;
pub mod frame;
pub mod kepler;
pub mod planets;
pub mod position;
pub mod system;

pub use catalog::{Catalog, NamedElements};
pub use elements::{propagate_elements, OrbitalElements, PropagatedElements};
pub use epoch::{centuries_since_epoch, current_centuries_since_epoch, epoch_from_centuries, j2000};
pub use error::{OrreryError, Result};
pub use kepler::{orbital_period_days, solve_kepler_detailed, solve_kepler_equation, KeplerSolution, SolverConfig};
pub use planets::Body;
pub use position::{
    compute_position, compute_position_at, compute_state, compute_state_at, compute_velocity,
    resolve_position, resolve_position_at, resolve_velocity_at, BodyState, Resolution,
};
pub use system::{BodySnapshot, Snapshot};
