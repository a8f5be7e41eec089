use std::collections::VecDeque;

use bevy::prelude::*;
use bevy::math::primitives::{Sphere, Cuboid};
use bevy::ecs::system::Local;

use crate::simulation::engine::Simulation;
use crate::simulation::scenario::ScenarioDescription;
use crate::simulation::states::Body;

/// Component tagging each sphere with its body index into Simulation.system.bodies
#[derive(Component)]
struct BodyIndex(pub usize);

/// Scenario kept around so `R` can rebuild the simulation from scratch
#[derive(Resource)]
struct StartingScenario(ScenarioDescription);

/// Recent positions per body, newest at the back
#[derive(Resource, Default)]
struct Trails(Vec<VecDeque<Vec3>>);

#[derive(Resource, Default)]
struct Paused(bool);

/// World-space → screen-space scaling factor for positions and radii
const SCALE3D: f32 = 50.0;

/// Distance of the camera from the origin along +Z
const CAMERA_DISTANCE: f32 = 600.0;

/// Points kept per trail
const TRAIL_LEN: usize = 600;

/// Start the Bevy viewer; the simulation is stepped `steps_per_frame` times per frame
///
/// Keys: `Space` pause, `R` reset to the starting scenario,
/// `Up`/`Down` change sub-steps per frame.
pub fn run_3d(sim: Simulation, desc: ScenarioDescription) {
    println!("run_3d: starting Bevy 3D viewer with {} bodies", sim.bodies().len());

    let trails = Trails(vec![VecDeque::with_capacity(TRAIL_LEN); sim.bodies().len()]);

    App::new()
        .insert_resource(sim)
        .insert_resource(StartingScenario(desc))
        .insert_resource(trails)
        .insert_resource(Paused::default())
        .add_plugins(DefaultPlugins)
        .add_systems(Startup, setup_3d)
        .add_systems(Update, (handle_keys, physics_step_3d, sync_transforms_3d, draw_trails).chain())
        .run();
}

/// Startup system: spawn camera, light, and one sphere per body
fn setup_3d(mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    sim: Res<Simulation>,
) {
    commands.spawn(Camera3dBundle {
        camera: Camera {
            clear_color: ClearColorConfig::Custom(Color::srgb(0.0, 0.0, 0.0)),
            ..Default::default()
        },
        transform: Transform::from_xyz(0.0, -150.0, CAMERA_DISTANCE)
            .looking_at(Vec3::ZERO, Vec3::Y),
        ..Default::default()
    });

    commands.spawn(PointLightBundle {
        point_light: PointLight {
            intensity: 1500.0,
            range: 1000.0,
            ..Default::default()
        },
        transform: Transform::from_xyz(100.0, 100.0, CAMERA_DISTANCE),
        ..Default::default()
    });

    spawn_axes(&mut commands, &mut meshes, &mut materials);

    for (i, b) in sim.bodies().iter().enumerate() {
        commands.spawn((
            PbrBundle {
                mesh: meshes.add(Sphere::new(screen_radius(b)).mesh()),
                material: materials.add(StandardMaterial {
                    base_color: Color::srgb(1.0, 1.0, 1.0),
                    unlit: true,
                    ..Default::default()
                }),
                transform: Transform::from_translation(to_screen(b)),
                ..Default::default()
            },
            BodyIndex(i),
        ));
    }
}

fn handle_keys(
    keys: Res<ButtonInput<KeyCode>>,
    mut sim: ResMut<Simulation>,
    start: Res<StartingScenario>,
    mut trails: ResMut<Trails>,
    mut paused: ResMut<Paused>,
) {
    if keys.just_pressed(KeyCode::Space) {
        paused.0 = !paused.0;
    }
    if keys.just_pressed(KeyCode::KeyR) {
        match sim.reset(&start.0) {
            Ok(()) => {
                for trail in trails.0.iter_mut() {
                    trail.clear();
                }
                println!("handle_keys: reset to t = 0");
            }
            Err(e) => println!("handle_keys: reset failed: {e}"),
        }
    }
    if keys.just_pressed(KeyCode::ArrowUp) {
        sim.parameters.steps_per_frame += 1;
        println!("handle_keys: {} steps per frame", sim.parameters.steps_per_frame);
    }
    if keys.just_pressed(KeyCode::ArrowDown) && sim.parameters.steps_per_frame > 1 {
        sim.parameters.steps_per_frame -= 1;
        println!("handle_keys: {} steps per frame", sim.parameters.steps_per_frame);
    }
}

/// Per-frame physics: several fixed steps, never one bigger step
fn physics_step_3d(mut sim: ResMut<Simulation>, paused: Res<Paused>, mut reported: Local<bool>) {
    if paused.0 {
        return;
    }
    sim.advance_frame();

    if !*reported && !sim.is_finite() {
        println!("physics_step_3d: state went non-finite at t = {:.3}", sim.time());
        *reported = true;
    }
}

// ========================================================================================
// Body color by speed
// ========================================================================================

fn speed_to_color(speed: f32, max_speed: f32) -> Color {
    if max_speed <= 0.0 {
        return Color::srgb(1.0, 1.0, 1.0);
    }

    let t = (speed / max_speed).clamp(0.0, 1.0);

    // Simple blue -> red gradient
    Color::srgb(t, 0.0, 1.0 - t)
}

#[derive(Default)]
struct VelocityColorState {
    smoothed_max: f32,
}

fn sync_transforms_3d(
    sim: Res<Simulation>,
    mut trails: ResMut<Trails>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(&BodyIndex, &mut Transform, &Handle<StandardMaterial>)>,
    mut vel_state: Local<VelocityColorState>,
) {
    let bodies = sim.bodies();

    let max_speed_frame = bodies.iter().map(|b| b.v.norm() as f32).fold(0.0, f32::max);

    if vel_state.smoothed_max == 0.0 {
        vel_state.smoothed_max = max_speed_frame.max(1e-6);
    }

    // Smooth over time (EMA) so colors don't pulse
    let alpha = 0.02;
    vel_state.smoothed_max = (1.0 - alpha) * vel_state.smoothed_max + alpha * max_speed_frame;
    let v_norm = vel_state.smoothed_max.max(1e-6);

    for (BodyIndex(i), mut transform, mat_handle) in &mut query {
        if let Some(b) = bodies.get(*i) {
            let p = to_screen(b);
            transform.translation = p;

            if let Some(trail) = trails.0.get_mut(*i) {
                if trail.len() == TRAIL_LEN {
                    trail.pop_front();
                }
                trail.push_back(p);
            }

            if let Some(mat) = materials.get_mut(mat_handle) {
                mat.base_color = speed_to_color(b.v.norm() as f32, v_norm);
            }
        }
    }
}

fn draw_trails(mut gizmos: Gizmos, trails: Res<Trails>) {
    for trail in &trails.0 {
        if trail.len() > 1 {
            gizmos.linestrip(trail.iter().copied(), Color::srgb(0.4, 0.4, 0.4));
        }
    }
}

fn to_screen(b: &Body) -> Vec3 {
    Vec3::new(
        (b.x.x as f32) * SCALE3D,
        (b.x.y as f32) * SCALE3D,
        (b.x.z as f32) * SCALE3D,
    )
}

/// Cube-root of mass, with a floor so a 1e-7 planet is still visible
fn screen_radius(b: &Body) -> f32 {
    ((b.m.cbrt() * 0.08) as f32).max(0.03) * SCALE3D
}

// =========================================================================================
// Draw 3D axes for visual reference
// =========================================================================================

fn spawn_axes(commands: &mut Commands, meshes: &mut Assets<Mesh>, materials: &mut Assets<StandardMaterial>) {
    let axis_len = 10.0 * SCALE3D;
    let axis_thickness = 0.009 * SCALE3D;

    let axes = [
        (Vec3::new(axis_len, axis_thickness, axis_thickness), Color::srgb(1.0, 0.0, 0.0)),
        (Vec3::new(axis_thickness, axis_len, axis_thickness), Color::srgb(0.0, 1.0, 0.0)),
        (Vec3::new(axis_thickness, axis_thickness, axis_len), Color::srgb(0.0, 0.0, 1.0)),
    ];

    for (size, color) in axes {
        commands.spawn(PbrBundle {
            mesh: meshes.add(Cuboid::new(size.x, size.y, size.z).mesh()),
            material: materials.add(StandardMaterial {
                base_color: color,
                unlit: true,
                ..Default::default()
            }),
            // Cuboid is centered at its transform origin, so it crosses the world origin
            transform: Transform::from_xyz(0.0, 0.0, 0.0),
            ..Default::default()
        });
    }
}
