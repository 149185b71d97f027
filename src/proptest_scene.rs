//! Property-based tests for the scene arithmetic using proptest.

use std::time::Duration;

use bevy::prelude::*;
use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::{ASTEROID_VISUAL_SCALE, MIN_ASTEROID_SIZE, asteroid_size};
use crate::focus::{DEFAULT_FOV_DEG, FocusController, FocusState, ViewMode};
use crate::orbit::{OrbitState, angle_distance};
use crate::picking::nearest_hit;
use crate::render::asteroids::perturb_vertices;
use crate::types::EARTH_DIAMETER_KM;

/// One user action against the focus controller.
#[derive(Clone, Debug)]
enum FocusOp {
    Earth,
    Asteroid(usize, f32),
    Toggle,
    Tick(u64),
}

fn focus_op() -> impl Strategy<Value = FocusOp> {
    prop_oneof![
        Just(FocusOp::Earth),
        (0usize..4, 0.0005f32..0.5).prop_map(|(i, s)| FocusOp::Asteroid(i, s)),
        Just(FocusOp::Toggle),
        (0u64..1500).prop_map(FocusOp::Tick),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Stepping an orbit N times lands where `angle_after(N)` predicts.
    #[test]
    fn prop_orbit_angle_after_ticks(
        distance_au in 0.0f64..0.5,
        angle in 0.0f64..std::f64::consts::TAU,
        inclination in 0.0f64..0.5,
        ticks in 0u64..5000,
    ) {
        let start = OrbitState::from_distance(distance_au, angle, inclination);
        let mut orbit = start;
        for _ in 0..ticks {
            orbit.tick();
        }
        let expected =
            (angle + ticks as f64 * start.angular_speed).rem_euclid(std::f64::consts::TAU);
        prop_assert!(angle_distance(orbit.angle, expected) < 1e-9);
        prop_assert!(angle_distance(orbit.angle, start.angle_after(ticks)) < 1e-9);
        prop_assert!((0.0..std::f64::consts::TAU).contains(&orbit.angle));
    }

    /// Orbit positions stay on the orbit circle.
    #[test]
    fn prop_orbit_position_on_circle(
        distance_au in 0.0f64..0.5,
        angle in 0.0f64..std::f64::consts::TAU,
        inclination in 0.0f64..0.5,
    ) {
        let orbit = OrbitState::from_distance(distance_au, angle, inclination);
        let r = orbit.position().length() as f64;
        prop_assert!((r - orbit.radius).abs() < 1e-3 * orbit.radius);
    }

    /// Sizes follow the scaled diameter and never drop below the minimum.
    #[test]
    fn prop_size_respects_minimum(diameter_km in 0.0f64..50_000.0) {
        let size = asteroid_size(diameter_km);
        let scaled = (diameter_km * 2.0 / EARTH_DIAMETER_KM * ASTEROID_VISUAL_SCALE) as f32;
        prop_assert!(size >= MIN_ASTEROID_SIZE);
        prop_assert!((size - scaled.max(MIN_ASTEROID_SIZE)).abs() <= 1e-6 * size.max(1.0));
    }

    /// Perturbed vertices lie between the radius and 1.2 times the radius.
    #[test]
    fn prop_perturbed_vertices_in_shell(
        radius in 0.001f32..2.0,
        seed in any::<u64>(),
        directions in prop::collection::vec((-1.0f32..1.0, -1.0f32..1.0, -1.0f32..1.0), 1..64),
    ) {
        let mut positions: Vec<[f32; 3]> = directions
            .into_iter()
            .map(|(x, y, z)| [x, y, z])
            .collect();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        perturb_vertices(&mut positions, radius, &mut rng);
        for p in positions {
            let len = Vec3::from_array(p).length();
            prop_assert!(len >= radius * (1.0 - 1e-5));
            prop_assert!(len <= radius * 1.2 * (1.0 + 1e-5));
        }
    }

    /// Exactly one view mode matches the focus state after any sequence of
    /// actions, and returning to the Earth always restores the default FOV.
    #[test]
    fn prop_single_view_mode(ops in prop::collection::vec(focus_op(), 0..30)) {
        let mut world = World::new();
        let asteroids: Vec<Entity> = (0..4).map(|_| world.spawn_empty().id()).collect();
        let mut focus = FocusController::default();

        for op in ops {
            match op {
                FocusOp::Earth => focus.focus_earth(),
                FocusOp::Asteroid(i, size) => focus.focus_asteroid(asteroids[i], size),
                FocusOp::Toggle => { focus.toggle_camera_mode(); }
                FocusOp::Tick(ms) => focus.tick(Duration::from_millis(ms)),
            }

            let modes = [
                focus.view_mode() == ViewMode::Overview,
                focus.view_mode() == ViewMode::Focused,
                focus.view_mode() == ViewMode::Free,
            ];
            prop_assert_eq!(modes.iter().filter(|m| **m).count(), 1);
            prop_assert_eq!(
                focus.focused_asteroid().is_some(),
                focus.view_mode() == ViewMode::Focused
            );
            if focus.state() == FocusState::Earth {
                prop_assert!((focus.fov_degrees() - DEFAULT_FOV_DEG).abs() < f32::EPSILON);
            }
        }
    }

    /// The picked sphere is the one closest along the ray.
    #[test]
    fn prop_nearest_hit_is_closest(
        depths in prop::collection::vec(1.0f32..20.0, 1..10),
    ) {
        let ray = Ray3d::new(Vec3::ZERO, Dir3::NEG_Z);
        let spheres = depths
            .iter()
            .enumerate()
            .map(|(i, d)| (i, Vec3::new(0.0, 0.0, -d), 0.1));
        let (index, distance) = nearest_hit(ray, spheres).expect("every sphere is on the ray");
        let closest = depths.iter().cloned().fold(f32::INFINITY, f32::min);
        prop_assert!((depths[index] - closest).abs() < 1e-3);
        prop_assert!((distance - (closest - 0.1)).abs() < 1e-3);
    }
}
