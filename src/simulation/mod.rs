pub mod vector;
pub mod states;
pub mod error;
pub mod params;
pub mod forces;
pub mod integrator;
pub mod diagnostics;
pub mod scenario;
pub mod engine;
