use std::time::Instant;

use crate::simulation::diagnostics::{total_energy, total_momentum};
use crate::simulation::engine::Simulation;
use crate::simulation::error::SimError;
use crate::simulation::params::Parameters;
use crate::simulation::scenario::{Preset, ScenarioDescription};

/// Time per verlet step for every bundled preset
pub fn bench_step(params: &Parameters) -> Result<(), SimError> {
    let steps = 100_000; // number of integrator steps per preset

    for preset in Preset::ALL {
        let mut sim = Simulation::new(&preset.description(), params.clone())?;

        // Warm up
        for _ in 0..100 {
            sim.step();
        }

        let t0 = Instant::now();
        for _ in 0..steps {
            sim.step();
        }
        let per_step = t0.elapsed().as_secs_f64() / steps as f64;

        println!(
            "{:<13} N = {}, step = {:8.3} us, finite = {}",
            preset.name(),
            sim.bodies().len(),
            per_step * 1.0e6,
            sim.is_finite()
        );
    }
    Ok(())
}

/// Energy and momentum drift of one scenario as CSV
/// Paste output directly into a spreadsheet to graph
pub fn bench_energy_drift(desc: &ScenarioDescription, params: &Parameters, steps: usize) -> Result<(), SimError> {
    let mut sim = Simulation::new(desc, params.clone())?;

    let e0 = total_energy(&sim.system, &sim.forces);
    let p0 = total_momentum(&sim.system);

    // Print roughly 200 rows regardless of run length
    let every = (steps / 200).max(1);

    println!("step,t,energy,rel_energy_err,momentum_err");
    for i in 0..=steps {
        if i % every == 0 || i == steps {
            let e = total_energy(&sim.system, &sim.forces);
            let rel = if e0 != 0.0 { (e - e0) / e0.abs() } else { e - e0 };
            let dp = (total_momentum(&sim.system) - p0).norm();
            println!("{},{:.6},{:.12},{:.3e},{:.3e}", i, sim.time(), e, rel, dp);
        }
        if i < steps {
            sim.step();
        }
    }
    Ok(())
}
