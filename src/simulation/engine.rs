//! Runtime simulation controller
//!
//! `Simulation` owns the parameters, the current system and the force
//! model. Callers (the viewer, the headless runner, tests) only go through
//! `reset` / `step` / `advance_frame` and the read accessors; a reset swaps
//! in a fresh `System` and the old one is dropped.

use super::diagnostics;
use super::error::SimError;
use super::forces::Gravity;
use super::integrator::{prime_accelerations, verlet_step};
use super::params::Parameters;
use super::scenario::ScenarioDescription;
use super::states::{Body, NVec3, System};

#[cfg_attr(feature = "viewer", derive(bevy::prelude::Resource))]
#[derive(Debug, Clone)]
pub struct Simulation {
    pub parameters: Parameters,
    pub system: System,
    pub forces: Gravity,
}

impl Simulation {
    pub fn new(desc: &ScenarioDescription, parameters: Parameters) -> Result<Self, SimError> {
        parameters.validate()?;
        let forces = Gravity::new(parameters.G, parameters.eps2);
        let mut sim = Self {
            parameters,
            system: System::default(),
            forces,
        };
        sim.reset(desc)?;
        Ok(sim)
    }

    /// Replace the system with a freshly built one at t = 0
    /// On error the current system is left untouched
    pub fn reset(&mut self, desc: &ScenarioDescription) -> Result<(), SimError> {
        let mut system = desc.build()?;
        if self.parameters.prime {
            prime_accelerations(&mut system, &self.forces);
        }
        self.system = system;
        Ok(())
    }

    /// One fixed step of `parameters.dt`
    pub fn step(&mut self) {
        verlet_step(&mut self.system, &self.forces, self.parameters.dt);
    }

    /// One step of an explicit size, e.g. `-dt` to run backwards
    pub fn step_by(&mut self, dt: f64) {
        verlet_step(&mut self.system, &self.forces, dt);
    }

    /// `steps_per_frame` fixed steps; dt itself is never enlarged
    pub fn advance_frame(&mut self) {
        for _ in 0..self.parameters.steps_per_frame {
            self.step();
        }
    }

    /// Step until `t >= t_end`, returns the number of steps taken
    ///
    /// Stops early if `t + dt` rounds back to `t`, since time can no longer
    /// advance at that magnitude.
    pub fn run_until(&mut self, t_end: f64) -> usize {
        let dt = self.parameters.dt;
        if dt <= 0.0 || !t_end.is_finite() || self.system.t >= t_end {
            return 0;
        }
        // one spare step absorbs rounding in the accumulated t
        let max_steps = ((t_end - self.system.t) / dt).ceil() as usize + 1;

        let mut steps = 0;
        while self.system.t < t_end && steps < max_steps {
            let before = self.system.t;
            self.step();
            steps += 1;
            if self.system.t == before {
                break;
            }
        }
        steps
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn time(&self) -> f64 {
        self.system.t
    }

    pub fn positions(&self) -> impl Iterator<Item = &NVec3> + '_ {
        self.system.bodies.iter().map(|b| &b.x)
    }

    pub fn masses(&self) -> impl Iterator<Item = f64> + '_ {
        self.system.bodies.iter().map(|b| b.m)
    }

    pub fn potential_at(&self, p: &NVec3) -> f64 {
        diagnostics::potential_at(&self.system, &self.forces, p)
    }

    pub fn total_energy(&self) -> f64 {
        diagnostics::total_energy(&self.system, &self.forces)
    }

    pub fn total_momentum(&self) -> NVec3 {
        diagnostics::total_momentum(&self.system)
    }

    /// False once any body has picked up a NaN or infinite component
    pub fn is_finite(&self) -> bool {
        self.system.bodies.iter().all(Body::is_finite)
    }
}
