use tribody::{ScenarioConfig, ScenarioDescription, Parameters, Simulation};
use tribody::{bench_step, bench_energy_drift};
use tribody::simulation::diagnostics::{center_of_mass, max_distance_from};

use clap::Parser;
use anyhow::{Context, Result};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Small-N gravitational simulator")]
struct Args {
    /// Scenario file; bare names are looked up in `scenarios/`
    #[arg(short, default_value = "triangle.yaml")]
    file_name: String,

    /// Run without the viewer and print the final state
    #[arg(long)]
    headless: bool,

    /// Number of steps for a headless run (default: until `t_end`)
    #[arg(long, requires = "headless")]
    steps: Option<usize>,

    /// Time a step of every bundled preset
    #[arg(long)]
    bench: bool,

    /// Print energy / momentum drift as CSV over this many steps
    #[arg(long)]
    drift: Option<usize>,
}

fn resolve_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.exists() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<(ScenarioDescription, Parameters)> {
    let config_path = resolve_path(file_name);
    let scenario_cfg = ScenarioConfig::load(&config_path)?;
    scenario_cfg
        .into_parts()
        .with_context(|| format!("building scenario from {}", config_path.display()))
}

fn run_headless(desc: &ScenarioDescription, params: Parameters, steps: Option<usize>) -> Result<()> {
    let mut sim = Simulation::new(desc, params)?;
    let e0 = sim.total_energy();

    let taken = match steps {
        Some(n) => {
            for _ in 0..n {
                sim.step();
            }
            n
        }
        None => {
            let t_end = sim.parameters.t_end;
            sim.run_until(t_end)
        }
    };

    println!("run_headless: {} steps, t = {:.4}", taken, sim.time());
    for (i, b) in sim.bodies().iter().enumerate() {
        println!(
            "  body {i}: m = {:.3e}, x = [{:+.6}, {:+.6}, {:+.6}], v = [{:+.6}, {:+.6}, {:+.6}]",
            b.m, b.x.x, b.x.y, b.x.z, b.v.x, b.v.y, b.v.z
        );
    }
    if let Some(com) = center_of_mass(&sim.system) {
        println!("  max distance from centre of mass: {:.4}", max_distance_from(&sim.system, &com));
    }
    let e1 = sim.total_energy();
    println!("  energy {:.9} -> {:.9} (rel {:.3e})", e0, e1, (e1 - e0) / e0.abs());
    if !sim.is_finite() {
        println!("  warning: state is no longer finite");
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let (desc, params) = load_scenario_from_yaml(&args.file_name)?;

    if args.bench {
        bench_step(&params)?;
        return Ok(());
    }
    if let Some(steps) = args.drift {
        bench_energy_drift(&desc, &params, steps)?;
        return Ok(());
    }

    if args.headless {
        run_headless(&desc, params, args.steps)
    } else {
        run_viewer(desc, params)
    }
}

#[cfg(feature = "viewer")]
fn run_viewer(desc: ScenarioDescription, params: Parameters) -> Result<()> {
    let sim = Simulation::new(&desc, params)?;
    tribody::run_3d(sim, desc);
    Ok(())
}

#[cfg(not(feature = "viewer"))]
fn run_viewer(desc: ScenarioDescription, params: Parameters) -> Result<()> {
    println!("run_viewer: built without the `viewer` feature, running headless");
    run_headless(&desc, params, None)
}
