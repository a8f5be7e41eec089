//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds runtime settings:
//! - fixed integration step `dt` and an optional end time,
//! - gravitational constant `G` and softening `eps2`,
//! - how many fixed steps the viewer runs per displayed frame,
//! - whether to compute real accelerations before the first step

use super::error::SimError;

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub dt: f64, // fixed step size
    pub t_end: f64, // end time for headless runs
    pub G: f64, // gravitational constant
    pub eps2: f64, // softening, 0 = none
    pub steps_per_frame: usize, // sub-steps per displayed frame
    pub prime: bool, // compute a(x0) before the first step
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            dt: 0.016,
            t_end: 16.0,
            G: 1.0,
            eps2: 0.0,
            steps_per_frame: 1,
            prime: false,
        }
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.dt.is_finite() || self.dt == 0.0 {
            return Err(SimError::InvalidTimeStep(self.dt));
        }
        if !self.t_end.is_finite() {
            return Err(SimError::InvalidParameter { name: "t_end", value: self.t_end, reason: "must be finite" });
        }
        if !self.G.is_finite() {
            return Err(SimError::InvalidParameter { name: "G", value: self.G, reason: "must be finite" });
        }
        // negative softening makes R^2 + eps2 negative near a body
        if !self.eps2.is_finite() || self.eps2 < 0.0 {
            return Err(SimError::InvalidParameter { name: "eps2", value: self.eps2, reason: "must be finite and >= 0" });
        }
        Ok(())
    }
}
