//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module is a thin, `serde`-deserializable mirror of the runtime
//! types. A scenario file has two sections:
//!
//! - [`ParametersConfig`]   – step size, constants, frame sub-stepping
//! - [`ScenarioBodiesConfig`] – a preset name or explicit bodies, an
//!   optional derived third body and an optional test planet
//!
//! # YAML format
//!
//! ```yaml
//! parameters:
//!   dt: 0.016               # fixed step
//!   t_end: 16.0             # headless run length
//!   G: 1.0                  # gravitational constant
//!   eps2: 0.0               # softening epsilon^2, 0 = bare law
//!   steps_per_frame: 4      # viewer sub-steps per frame
//!   prime: false            # compute a(x0) before the first step
//!
//! scenario:
//!   bodies:
//!     - { m: 1.0, x: [-1.0, 0.0, 0.0], v: [0.0, -0.6, 0.0] }
//!     - { m: 1.0, x: [0.5, -0.86, 0.0], v: [0.52, 0.3, 0.0] }
//!   derived_mass: 1.0       # third body from momentum / centroid balance
//!   planet: { m: 1.0e-7, x: [4.0, 0.0, 0.0], v: [0.0, 0.85, 0.0] }
//!   include_planet: true
//! ```
//!
//! Instead of `bodies`, `preset: triangle | figure_eight | star_planet |
//! derived` picks a bundled configuration; `planet`/`include_planet` still
//! apply on top of it.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::simulation::error::SimError;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::{BodySpec, Preset, ScenarioDescription};
use crate::simulation::states::NVec3;

/// Global numerical and physical parameters
/// Every field is optional and falls back to `Parameters::default()`
#[allow(non_snake_case)]
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ParametersConfig {
    pub dt: Option<f64>, // fixed time step
    pub t_end: Option<f64>, // headless end time
    pub G: Option<f64>, // gravitational constant
    pub eps2: Option<f64>, // softening
    pub steps_per_frame: Option<usize>, // sub-steps per frame
    pub prime: Option<bool>, // prime accelerations before step 1
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: Vec<f64>, // initial position
    pub v: Vec<f64>, // initial velocity
    pub m: f64, // mass
}

/// Which bodies to start with
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioBodiesConfig {
    pub preset: Option<String>, // bundled scenario, overrides `bodies`/`derived_mass`
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // explicit bodies
    pub derived_mass: Option<f64>, // derive a third body with this mass
    pub planet: Option<BodyConfig>, // negligible-mass extra body
    pub include_planet: Option<bool>, // defaults to true when a planet is given
}

/// Top-level scenario configuration loaded from YAML
#[derive(Deserialize, Debug, Clone, Default)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub parameters: ParametersConfig,
    #[serde(default)]
    pub scenario: ScenarioBodiesConfig,
}

impl ScenarioConfig {
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let cfg = serde_yaml::from_str(text).context("invalid scenario YAML")?;
        Ok(cfg)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading scenario file {}", path.display()))?;
        Self::from_yaml_str(&text).with_context(|| format!("parsing {}", path.display()))
    }

    /// Runtime parameters, defaults filled in
    pub fn parameters(&self) -> Parameters {
        let p = &self.parameters;
        let d = Parameters::default();
        Parameters {
            dt: p.dt.unwrap_or(d.dt),
            t_end: p.t_end.unwrap_or(d.t_end),
            G: p.G.unwrap_or(d.G),
            eps2: p.eps2.unwrap_or(d.eps2),
            steps_per_frame: p.steps_per_frame.unwrap_or(d.steps_per_frame),
            prime: p.prime.unwrap_or(d.prime),
        }
    }

    /// Scenario description, with preset lookup and vector length checks
    pub fn description(&self) -> Result<ScenarioDescription> {
        let s = &self.scenario;

        let mut desc = match &s.preset {
            Some(name) => Preset::from_name(name)
                .ok_or_else(|| anyhow!("unknown preset `{name}`"))?
                .description(),
            None => {
                let bodies = s
                    .bodies
                    .iter()
                    .map(BodyConfig::to_spec)
                    .collect::<Result<Vec<_>, SimError>>()?;
                ScenarioDescription {
                    bodies,
                    derived_mass: s.derived_mass,
                    ..Default::default()
                }
            }
        };

        if let Some(planet) = &s.planet {
            desc.planet = Some(planet.to_spec()?);
            desc.include_planet = s.include_planet.unwrap_or(true);
        } else if let Some(include) = s.include_planet {
            desc.include_planet = include;
        }

        Ok(desc)
    }

    pub fn into_parts(self) -> Result<(ScenarioDescription, Parameters)> {
        let desc = self.description()?;
        let params = self.parameters();
        params.validate()?;
        Ok((desc, params))
    }
}

impl BodyConfig {
    pub fn to_spec(&self) -> Result<BodySpec, SimError> {
        Ok(BodySpec::new(
            self.m,
            to_vec3("x", &self.x)?,
            to_vec3("v", &self.v)?,
        ))
    }
}

fn to_vec3(field: &'static str, c: &[f64]) -> Result<NVec3, SimError> {
    match c {
        [x, y, z] => Ok(NVec3::new(*x, *y, *z)),
        _ => Err(SimError::BadComponentCount { field, len: c.len() }),
    }
}
