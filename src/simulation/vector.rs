//! Vector helpers over [`NVec3`]
//!
//! nalgebra already gives us the value type and its arithmetic; these free
//! functions name the handful of operations the force law and integrator
//! are written in terms of. Results are new values, except [`accumulate`]
//! which adds in place so per-body sums don't allocate.

use super::states::NVec3;

/// a + b
#[inline]
pub fn add(a: &NVec3, b: &NVec3) -> NVec3 {
    a + b
}

/// a * k
#[inline]
pub fn scale(a: &NVec3, k: f64) -> NVec3 {
    a * k
}

/// a - b, defined as a + (-1 * b)
#[inline]
pub fn subtract(a: &NVec3, b: &NVec3) -> NVec3 {
    add(a, &scale(b, -1.0))
}

/// Sum of squared components
#[inline]
pub fn magnitude_squared(a: &NVec3) -> f64 {
    a.norm_squared()
}

/// Euclidean length, always >= 0 for finite input
#[inline]
pub fn magnitude(a: &NVec3) -> f64 {
    magnitude_squared(a).sqrt()
}

/// target += delta, component-wise
#[inline]
pub fn accumulate(target: &mut NVec3, delta: &NVec3) {
    *target += delta;
}
