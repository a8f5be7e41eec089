pub mod simulation;
pub mod configuration;
#[cfg(feature = "viewer")]
pub mod visualization;
pub mod benchmark;

pub use simulation::states::{Body, System, NVec3};
pub use simulation::error::SimError;
pub use simulation::params::Parameters;
pub use simulation::forces::{Acceleration, Gravity};
pub use simulation::integrator::{verlet_step, prime_accelerations};
pub use simulation::scenario::{BodySpec, Preset, ScenarioDescription, derive_third, PLANET_MASS};
pub use simulation::engine::Simulation;

pub use configuration::config::{ScenarioConfig, ParametersConfig, BodyConfig, ScenarioBodiesConfig};

#[cfg(feature = "viewer")]
pub use visualization::viewer::run_3d;

pub use benchmark::benchmark::{bench_step, bench_energy_drift};
