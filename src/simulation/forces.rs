//! Force / acceleration contributors
//!
//! Defines the `Acceleration` trait the integrator is driven by, and the
//! direct-sum Newtonian gravity model that implements it. `Gravity` also
//! exposes the per-source field and potential so diagnostics and the
//! heat-map query use exactly the same law as the integrator.

use super::states::{Body, NVec3, System};
use super::vector::{accumulate, magnitude_squared, scale, subtract};

/// Trait for acceleration sources operating on a [`System`]
/// Implementations overwrite `out[i]` with the total acceleration on body i
pub trait Acceleration {
    fn acceleration(&self, t: f64, sys: &System, out: &mut [NVec3]);
}

/// Newtonian gravity, direct O(N^2) summation
///
/// With `eps2 == 0` this is the bare law: coincident bodies give inf/NaN
/// and nothing catches it. A positive `eps2` replaces R^2 with R^2 + eps2
/// (Plummer softening) in both the field and the potential.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Gravity {
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening
}

impl Default for Gravity {
    fn default() -> Self {
        Self { G: 1.0, eps2: 0.0 }
    }
}

impl Gravity {
    #[allow(non_snake_case)]
    pub fn new(G: f64, eps2: f64) -> Self {
        Self { G, eps2 }
    }

    /// Acceleration that `source` produces at field point `p`
    ///
    /// separation = source.x - p points from p toward the source, so the
    /// result is attractive: separation * G m / R^3
    pub fn field(&self, source: &Body, p: &NVec3) -> NVec3 {
        let separation = subtract(&source.x, p);
        let r2 = magnitude_squared(&separation) + self.eps2;
        let r = r2.sqrt();
        scale(&separation, self.G * source.m / (r * r2))
    }

    /// Scalar potential G m / R that `source` produces at `p`
    /// Positive, and its gradient with respect to `p` is `field`
    pub fn potential(&self, source: &Body, p: &NVec3) -> f64 {
        let separation = subtract(&source.x, p);
        let r = (magnitude_squared(&separation) + self.eps2).sqrt();
        self.G * source.m / r
    }

    /// Sum of `field` over every body except slot `skip`
    pub fn field_excluding(&self, bodies: &[Body], skip: usize, p: &NVec3) -> NVec3 {
        let mut total = NVec3::zeros();
        for (j, other) in bodies.iter().enumerate() {
            if j == skip {
                continue;
            }
            accumulate(&mut total, &self.field(other, p));
        }
        total
    }
}

impl Acceleration for Gravity {
    fn acceleration(&self, _t: f64, sys: &System, out: &mut [NVec3]) {
        for (i, (body, a)) in sys.bodies.iter().zip(out.iter_mut()).enumerate() {
            *a = self.field_excluding(&sys.bodies, i, &body.x);
        }
    }
}
