pub mod angles;
pub mod constants;
pub mod coordinates;

pub use coordinates::{CartesianVector, EclipticCoordinates, PositionVector, VelocityVector};

#[cfg(test)]
mod tests;
