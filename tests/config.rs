use std::path::PathBuf;

use tribody::{NVec3, Preset, ScenarioConfig, SimError, Simulation};

const CUSTOM: &str = r#"
parameters:
  dt: 0.01
  G: 2.0
  steps_per_frame: 3

scenario:
  bodies:
    - { m: 1.0, x: [-1.0, 0.0, 0.0], v: [0.0, -0.6, 0.0] }
    - { m: 1.2, x: [0.5, -0.86, 0.0], v: [0.52, 0.3, 0.0] }
  derived_mass: 0.8
  planet: { m: 1.0e-7, x: [4.0, 0.0, 0.0], v: [0.0, 0.85, 0.0] }
"#;

#[test]
fn custom_scenario_parses() {
    let cfg = ScenarioConfig::from_yaml_str(CUSTOM).unwrap();
    let (desc, params) = cfg.into_parts().unwrap();

    assert_eq!(params.dt, 0.01);
    assert_eq!(params.G, 2.0);
    assert_eq!(params.steps_per_frame, 3);
    // unspecified fields fall back to defaults
    assert_eq!(params.eps2, 0.0);
    assert!(!params.prime);

    assert_eq!(desc.bodies.len(), 2);
    assert_eq!(desc.derived_mass, Some(0.8));
    // a planet without an explicit flag is included
    assert!(desc.include_planet);

    let sys = desc.build().unwrap();
    assert_eq!(sys.bodies.len(), 4);
    assert_eq!(sys.bodies[1].x, NVec3::new(0.5, -0.86, 0.0));
}

#[test]
fn planet_can_be_switched_off() {
    let text = CUSTOM.replace(
        "  planet: { m: 1.0e-7",
        "  include_planet: false\n  planet: { m: 1.0e-7",
    );
    let (desc, _) = ScenarioConfig::from_yaml_str(&text).unwrap().into_parts().unwrap();
    assert_eq!(desc.build().unwrap().bodies.len(), 3);
}

#[test]
fn include_planet_without_planet_is_an_error() {
    let text = "scenario:\n  preset: triangle\n  include_planet: true\n";
    let (desc, params) = ScenarioConfig::from_yaml_str(text).unwrap().into_parts().unwrap();
    let res = Simulation::new(&desc, params);
    assert!(matches!(res, Err(SimError::MissingPlanet)));

    // the star_planet preset brings its own planet
    let text = "scenario:\n  preset: star_planet\n  include_planet: true\n";
    let (desc, _) = ScenarioConfig::from_yaml_str(text).unwrap().into_parts().unwrap();
    assert_eq!(desc.build().unwrap().bodies.len(), 4);
}

#[test]
fn negative_softening_in_yaml_is_an_error() {
    let text = "parameters:\n  eps2: -1.0\nscenario:\n  preset: triangle\n";
    let err = ScenarioConfig::from_yaml_str(text).unwrap().into_parts().unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SimError>(),
        Some(SimError::InvalidParameter { name: "eps2", .. })
    ));
}

#[test]
fn preset_by_name() {
    let cfg = ScenarioConfig::from_yaml_str("scenario:\n  preset: figure_eight\n").unwrap();
    let (desc, params) = cfg.into_parts().unwrap();

    assert_eq!(desc, Preset::FigureEight.description());
    assert_eq!(params, tribody::Parameters::default());
}

#[test]
fn unknown_preset_is_an_error() {
    let cfg = ScenarioConfig::from_yaml_str("scenario:\n  preset: pentagon\n").unwrap();
    let err = cfg.into_parts().unwrap_err();
    assert!(err.to_string().contains("pentagon"));
}

#[test]
fn vectors_need_three_components() {
    let text = "scenario:\n  bodies:\n    - { m: 1.0, x: [1.0, 0.0], v: [0.0, 0.0, 0.0] }\n";
    let err = ScenarioConfig::from_yaml_str(text).unwrap().into_parts().unwrap_err();
    assert_eq!(
        err.downcast_ref::<SimError>(),
        Some(&SimError::BadComponentCount { field: "x", len: 2 })
    );
}

#[test]
fn bad_time_step_is_an_error() {
    let text = "parameters:\n  dt: 0.0\nscenario:\n  preset: triangle\n";
    let err = ScenarioConfig::from_yaml_str(text).unwrap().into_parts().unwrap_err();
    assert!(matches!(err.downcast_ref::<SimError>(), Some(SimError::InvalidTimeStep(_))));
}

#[test]
fn malformed_yaml_is_an_error() {
    assert!(ScenarioConfig::from_yaml_str("parameters: [1, 2").is_err());
}

#[test]
fn bundled_scenarios_load() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios");
    for name in ["triangle.yaml", "figure_eight.yaml", "star_planet.yaml", "derived.yaml"] {
        let cfg = ScenarioConfig::load(&dir.join(name)).unwrap();
        let (desc, params) = cfg.into_parts().unwrap();
        let mut sim = Simulation::new(&desc, params).unwrap();
        sim.advance_frame();
        assert!(sim.is_finite(), "{name} went non-finite");
    }
}
