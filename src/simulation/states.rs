//! Core state types for the simulation
//!
//! - `Body`: one point mass with its cached acceleration
//! - `System`: the ordered body list and the current simulation time `t`
//!
//! Bodies have no identity beyond their index in `System::bodies`.

use nalgebra::Vector3;

use super::error::SimError;

pub type NVec3 = Vector3<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub x: NVec3, // position
    pub v: NVec3, // velocity
    pub a: NVec3, // acceleration cached from the previous step
    pub m: f64, // mass
}

impl Body {
    /// Create a body at rest acceleration-wise (`a = 0`)
    /// Mass must be finite and strictly positive
    pub fn new(m: f64, x: NVec3, v: NVec3) -> Result<Self, SimError> {
        validate_mass(0, m)?;
        Ok(Self {
            x,
            v,
            a: NVec3::zeros(),
            m,
        })
    }

    pub fn position(&self) -> &NVec3 {
        &self.x
    }

    pub fn velocity(&self) -> &NVec3 {
        &self.v
    }

    pub fn acceleration(&self) -> &NVec3 {
        &self.a
    }

    pub fn mass(&self) -> f64 {
        self.m
    }

    /// Linear momentum m * v
    pub fn momentum(&self) -> NVec3 {
        self.v * self.m
    }

    /// True if every component of x, v and a is finite
    pub fn is_finite(&self) -> bool {
        self.x.iter().chain(self.v.iter()).chain(self.a.iter()).all(|c| c.is_finite())
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct System {
    pub bodies: Vec<Body>, // ordered collection of bodies
    pub t: f64, // elapsed simulated time
}

impl System {
    pub fn new(bodies: Vec<Body>) -> Self {
        Self { bodies, t: 0.0 }
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }
}

/// Reject zero, negative and non-finite masses
/// `index` is the body's slot, reported back in the error
pub(crate) fn validate_mass(index: usize, m: f64) -> Result<(), SimError> {
    if m.is_finite() && m > 0.0 {
        Ok(())
    } else {
        Err(SimError::InvalidMass { index, mass: m })
    }
}
