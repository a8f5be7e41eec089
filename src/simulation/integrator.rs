//! Fixed-step velocity-Verlet integrator
//!
//! Each body carries its acceleration from the previous step in `Body::a`,
//! so a step needs a single force evaluation:
//!
//! ```text
//! x_n+1 = x_n + (v_n + a_n dt/2) dt          (drift, all bodies first)
//! a_n+1 = a(x_n+1)                           (forces at new positions)
//! v_n+1 = v_n + (a_n + a_n+1) dt/2           (kick)
//! ```
//!
//! Bodies are created with `a = 0`, so unless [`prime_accelerations`] is
//! called the very first step drifts without the initial acceleration. That
//! one-step first-order error is kept on purpose; later steps are unaffected
//! because the cache is then filled with real values.

use super::forces::Acceleration;
use super::states::{NVec3, System};

/// Advance `sys` by one step of size `dt` (may be negative to run backwards)
pub fn verlet_step<F>(sys: &mut System, forces: &F, dt: f64)
where
    F: Acceleration + ?Sized,
{
    let n = sys.bodies.len();
    if n == 0 { // nothing to move, time still advances
        sys.t += dt;
        return;
    }
    let half_dt = 0.5 * dt;

    // Drift: every position must move before any force is evaluated
    for b in sys.bodies.iter_mut() {
        b.x += (b.v + b.a * half_dt) * dt;
    }

    // a_n+1 from x_n+1
    let mut a_new = vec![NVec3::zeros(); n];
    forces.acceleration(sys.t + dt, &*sys, &mut a_new);

    // Kick with the average of old and new, then cache a_n+1 for next call
    for (b, a) in sys.bodies.iter_mut().zip(a_new.into_iter()) {
        b.v += (b.a + a) * half_dt;
        b.a = a;
    }

    sys.t += dt;
}

/// Fill every body's cached acceleration with a(x) at the current positions
pub fn prime_accelerations<F>(sys: &mut System, forces: &F)
where
    F: Acceleration + ?Sized,
{
    let mut out = vec![NVec3::zeros(); sys.bodies.len()];
    forces.acceleration(sys.t, &*sys, &mut out);
    for (b, a) in sys.bodies.iter_mut().zip(out.into_iter()) {
        b.a = a;
    }
}
