//! Fixed-rate scene animation.
//!
//! Every tick advances the scene clock, moves asteroids along their orbits,
//! spins the globe layers and Moon, tumbles asteroids and swings the Sun
//! light through the day/night cycle. Running on `FixedUpdate` keeps the
//! motion per tick independent of frame rate.

use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::Rng;

use crate::orbit::OrbitState;
use crate::render::asteroids::{Asteroid, TUMBLE_RATE};
use crate::render::background::SunLight;
use crate::settings::{SceneRng, ViewerSettings};
use crate::types::{SceneClock, Spin, TICK_HZ};

/// Radius of the Sun light's circle around the Earth.
pub const SUN_ORBIT_RADIUS: f32 = 2.0;

/// Height of the Sun light above the orbit plane.
pub const SUN_HEIGHT: f32 = 1.5;

/// Plugin running the animation tick.
pub struct AnimationPlugin;

impl Plugin for AnimationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .init_resource::<SceneClock>()
            .add_systems(
                FixedUpdate,
                (
                    advance_clock,
                    (advance_orbits, spin_bodies, tumble_asteroids, rotate_sun),
                )
                    .chain(),
            );
    }
}

/// Sun light position for a given fraction of the day.
pub fn sun_position(day_progress: f32) -> Vec3 {
    let angle = day_progress * TAU;
    Vec3::new(
        SUN_ORBIT_RADIUS * angle.cos(),
        SUN_ORBIT_RADIUS * angle.sin(),
        SUN_HEIGHT,
    )
}

pub fn advance_clock(mut clock: ResMut<SceneClock>) {
    clock.advance();
}

/// Step every orbit one tick and place its entity.
pub fn advance_orbits(mut orbits: Query<(&mut OrbitState, &mut Transform)>) {
    for (mut orbit, mut transform) in orbits.iter_mut() {
        orbit.tick();
        transform.translation = orbit.position();
    }
}

/// Rotate spinning bodies about their local Y axis.
pub fn spin_bodies(mut bodies: Query<(&Spin, &mut Transform)>) {
    for (spin, mut transform) in bodies.iter_mut() {
        transform.rotate_local_y(spin.0);
    }
}

pub fn tumble_asteroids(
    mut asteroids: Query<&mut Transform, With<Asteroid>>,
    mut rng: ResMut<SceneRng>,
) {
    let rng = &mut rng.0;
    for mut transform in asteroids.iter_mut() {
        transform.rotate_local_x(rng.random::<f32>() * TUMBLE_RATE);
        transform.rotate_local_y(rng.random::<f32>() * TUMBLE_RATE);
        transform.rotate_local_z(rng.random::<f32>() * TUMBLE_RATE);
    }
}

pub fn rotate_sun(
    clock: Res<SceneClock>,
    settings: Res<ViewerSettings>,
    mut sun: Query<&mut Transform, With<SunLight>>,
) {
    let Ok(mut transform) = sun.single_mut() else {
        return;
    };
    let position = sun_position(clock.day_progress(settings.day_duration));
    *transform = Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y);
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn test_sun_position_cycle() {
        let dawn = sun_position(0.0);
        assert_relative_eq!(dawn.x, SUN_ORBIT_RADIUS);
        assert_relative_eq!(dawn.y, 0.0);
        assert_relative_eq!(dawn.z, SUN_HEIGHT);

        let quarter = sun_position(0.25);
        assert_relative_eq!(quarter.x, 0.0, epsilon = 1e-5);
        assert_relative_eq!(quarter.y, SUN_ORBIT_RADIUS, epsilon = 1e-5);
    }

    #[test]
    fn test_spin_rotates_about_y() {
        let mut world = World::new();
        let entity = world.spawn((Spin(0.5), Transform::default())).id();
        world.run_system_once(spin_bodies).unwrap();
        let rotation = world.get::<Transform>(entity).unwrap().rotation;
        let (axis, angle) = rotation.to_axis_angle();
        assert_relative_eq!(angle, 0.5, epsilon = 1e-5);
        assert_relative_eq!(axis.y.abs(), 1.0, epsilon = 1e-5);
    }
}
