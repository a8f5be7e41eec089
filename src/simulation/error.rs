//! Error type for building simulations
//!
//! Only construction-time problems are reported here. Numerical blow-up
//! during stepping (NaN / inf from coincident bodies) is not an error value:
//! it propagates through the state and can be checked with
//! `Simulation::is_finite`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimError {
    #[error("body {index} has invalid mass {mass} (must be finite and > 0)")]
    InvalidMass { index: usize, mass: f64 },

    #[error("time step must be finite and non-zero, got {0}")]
    InvalidTimeStep(f64),

    #[error("a derived third body needs exactly two explicit bodies, got {0}")]
    DerivedBodyNeedsTwo(usize),

    #[error("`{field}` must have 3 components, got {len}")]
    BadComponentCount { field: &'static str, len: usize },

    #[error("`{name}` is invalid: {value} ({reason})")]
    InvalidParameter { name: &'static str, value: f64, reason: &'static str },

    #[error("`include_planet` is set but the scenario has no planet")]
    MissingPlanet,

    #[error("scenario has no bodies")]
    EmptyScenario,
}
