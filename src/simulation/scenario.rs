//! Build initial simulation states from scenario descriptions
//!
//! A [`ScenarioDescription`] lists explicit bodies, optionally asks for a
//! third body derived from the first two, and optionally carries a
//! negligible-mass "planet" that is appended only when enabled. `build`
//! turns it into a [`System`] at `t = 0`.
//!
//! The derived body cancels both the total momentum and the mass moment:
//!
//! ```text
//! x3 = -(m1 x1 + m2 x2) / m3
//! v3 = -(m1 v1 + m2 v2) / m3
//! ```

use super::error::SimError;
use super::states::{validate_mass, Body, NVec3, System};

/// Mass used for the negligible test body in the bundled presets
pub const PLANET_MASS: f64 = 1.0e-7;

/// Initial state of one body
#[derive(Debug, Clone, PartialEq)]
pub struct BodySpec {
    pub mass: f64,
    pub position: NVec3,
    pub velocity: NVec3,
}

impl BodySpec {
    pub fn new(mass: f64, position: NVec3, velocity: NVec3) -> Self {
        Self { mass, position, velocity }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScenarioDescription {
    pub bodies: Vec<BodySpec>, // explicit bodies, in slot order
    pub derived_mass: Option<f64>, // mass of a third body derived from bodies[0..2]
    pub planet: Option<BodySpec>, // negligible-mass extra body
    pub include_planet: bool, // append `planet` when true
}

impl ScenarioDescription {
    pub fn new(bodies: Vec<BodySpec>) -> Self {
        Self {
            bodies,
            ..Default::default()
        }
    }

    /// Two explicit bodies plus a third derived from them
    pub fn derived(first: BodySpec, second: BodySpec, third_mass: f64) -> Self {
        Self {
            bodies: vec![first, second],
            derived_mass: Some(third_mass),
            ..Default::default()
        }
    }

    pub fn with_planet(mut self, planet: BodySpec, include: bool) -> Self {
        self.planet = Some(planet);
        self.include_planet = include;
        self
    }

    /// All body specs in final slot order, derived body and planet included
    pub fn resolve(&self) -> Result<Vec<BodySpec>, SimError> {
        let mut specs = self.bodies.clone();

        if let Some(m3) = self.derived_mass {
            if self.bodies.len() != 2 {
                return Err(SimError::DerivedBodyNeedsTwo(self.bodies.len()));
            }
            validate_mass(2, m3)?;
            specs.push(derive_third(&self.bodies[0], &self.bodies[1], m3));
        }

        if self.include_planet {
            match &self.planet {
                Some(planet) => specs.push(planet.clone()),
                None => return Err(SimError::MissingPlanet),
            }
        }

        if specs.is_empty() {
            return Err(SimError::EmptyScenario);
        }
        Ok(specs)
    }

    /// Produce the system at t = 0
    pub fn build(&self) -> Result<System, SimError> {
        let specs = self.resolve()?;
        let mut bodies = Vec::with_capacity(specs.len());
        for (i, s) in specs.into_iter().enumerate() {
            validate_mass(i, s.mass)?;
            bodies.push(Body::new(s.mass, s.position, s.velocity)?);
        }
        Ok(System::new(bodies))
    }
}

/// Third body that zeroes Σ m x and Σ m v of the trio
pub fn derive_third(first: &BodySpec, second: &BodySpec, mass: f64) -> BodySpec {
    let position = -(first.position * first.mass + second.position * second.mass) / mass;
    let velocity = -(first.velocity * first.mass + second.velocity * second.mass) / mass;
    BodySpec { mass, position, velocity }
}

/// Bundled starting configurations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Three unit masses on a triangle, moving tangentially at 0.8
    Triangle,
    /// Chenciner-Montgomery figure-eight choreography
    FigureEight,
    /// `Triangle` plus a 1e-7 test planet further out
    StarPlanet,
    /// Two explicit unit bodies and a derived third
    Derived,
}

impl Preset {
    pub const ALL: [Preset; 4] = [Preset::Triangle, Preset::FigureEight, Preset::StarPlanet, Preset::Derived];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Triangle => "triangle",
            Preset::FigureEight => "figure_eight",
            Preset::StarPlanet => "star_planet",
            Preset::Derived => "derived",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }

    pub fn description(&self) -> ScenarioDescription {
        match self {
            Preset::Triangle => ScenarioDescription::new(triangle_bodies()),
            Preset::FigureEight => {
                let x1 = NVec3::new(0.97000436, -0.24308753, 0.0);
                let v3 = NVec3::new(-0.93240737, -0.86473146, 0.0);
                ScenarioDescription::new(vec![
                    BodySpec::new(1.0, x1, -v3 / 2.0),
                    BodySpec::new(1.0, -x1, -v3 / 2.0),
                    BodySpec::new(1.0, NVec3::zeros(), v3),
                ])
            }
            Preset::StarPlanet => ScenarioDescription::new(triangle_bodies()).with_planet(
                BodySpec::new(
                    PLANET_MASS,
                    NVec3::new(4.0, 0.0, 0.0),
                    NVec3::new(0.0, 0.85, 0.0),
                ),
                true,
            ),
            Preset::Derived => ScenarioDescription::derived(
                BodySpec::new(1.0, NVec3::new(-1.0, 0.0, 0.0), NVec3::new(0.0, -0.8, 0.0)),
                BodySpec::new(1.0, NVec3::new(0.5, -0.86, 0.0), NVec3::new(0.6916, 0.4021, 0.0)),
                1.0,
            ),
        }
    }
}

/// Unit masses at (-1,0,0), (0.5,-0.86,0), (0.5,0.86,0), each moving at
/// speed 0.8 perpendicular to its radius in the xy-plane
fn triangle_bodies() -> Vec<BodySpec> {
    const SPEED: f64 = 0.8;
    [
        NVec3::new(-1.0, 0.0, 0.0),
        NVec3::new(0.5, -0.86, 0.0),
        NVec3::new(0.5, 0.86, 0.0),
    ]
    .into_iter()
    .map(|x| {
        let tangent = NVec3::z().cross(&x).normalize();
        BodySpec::new(1.0, x, tangent * SPEED)
    })
    .collect()
}
