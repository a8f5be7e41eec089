//! Conserved quantities and potential queries
//!
//! Read-only functions over a [`System`]. None of them mutate state; the
//! viewer and the headless runner call them between steps.

use super::forces::Gravity;
use super::states::{NVec3, System};
use super::vector::{accumulate, magnitude, magnitude_squared, subtract};

/// Σ m_i v_i
pub fn total_momentum(sys: &System) -> NVec3 {
    let mut p = NVec3::zeros();
    for b in &sys.bodies {
        accumulate(&mut p, &b.momentum());
    }
    p
}

/// Σ m_i x_i
pub fn mass_moment(sys: &System) -> NVec3 {
    let mut s = NVec3::zeros();
    for b in &sys.bodies {
        accumulate(&mut s, &(b.x * b.m));
    }
    s
}

pub fn total_mass(sys: &System) -> f64 {
    sys.bodies.iter().map(|b| b.m).sum()
}

/// Mass-weighted mean position, `None` for an empty system
pub fn center_of_mass(sys: &System) -> Option<NVec3> {
    let m = total_mass(sys);
    if m > 0.0 {
        Some(mass_moment(sys) / m)
    } else {
        None
    }
}

/// Σ ½ m_i |v_i|^2
pub fn kinetic_energy(sys: &System) -> f64 {
    sys.bodies.iter().map(|b| 0.5 * b.m * magnitude_squared(&b.v)).sum()
}

/// -Σ_{i<j} G m_i m_j / R_ij, softened the same way as the forces
pub fn potential_energy(sys: &System, gravity: &Gravity) -> f64 {
    let mut u = 0.0;
    for (i, bi) in sys.bodies.iter().enumerate() {
        for bj in &sys.bodies[i + 1..] {
            // potential() is G m_j / R, so scale by m_i
            u -= bi.m * gravity.potential(bj, &bi.x);
        }
    }
    u
}

pub fn total_energy(sys: &System, gravity: &Gravity) -> f64 {
    kinetic_energy(sys) + potential_energy(sys, gravity)
}

/// Σ over all bodies of G m / R at an arbitrary point
pub fn potential_at(sys: &System, gravity: &Gravity, p: &NVec3) -> f64 {
    sys.bodies.iter().map(|b| gravity.potential(b, p)).sum()
}

/// Square sample grid of `potential_at` in the plane `z`
///
/// Covers [-extent, extent] on x and y with `resolution` samples per side,
/// row-major with rows along +y. Feeds an external heat-map.
pub fn potential_grid(sys: &System, gravity: &Gravity, z: f64, extent: f64, resolution: usize) -> Vec<f64> {
    if resolution == 0 {
        return Vec::new();
    }
    let step = if resolution > 1 {
        2.0 * extent / (resolution - 1) as f64
    } else {
        0.0
    };
    let origin = if resolution > 1 { -extent } else { 0.0 };

    let mut out = Vec::with_capacity(resolution * resolution);
    for row in 0..resolution {
        let y = origin + row as f64 * step;
        for col in 0..resolution {
            let x = origin + col as f64 * step;
            out.push(potential_at(sys, gravity, &NVec3::new(x, y, z)));
        }
    }
    out
}

/// Largest distance of any body from `center`
pub fn max_distance_from(sys: &System, center: &NVec3) -> f64 {
    sys.bodies
        .iter()
        .map(|b| magnitude(&subtract(&b.x, center)))
        .fold(0.0, f64::max)
}
