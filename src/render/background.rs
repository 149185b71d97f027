//! Starfield and scene lighting.

use bevy::prelude::*;
use rand::Rng;

use crate::settings::{SceneRng, ViewerSettings};
use crate::types::Spin;

/// Inner radius of the star shell.
pub const STAR_MIN_RADIUS: f32 = 25.0;

/// Outer radius of the star shell.
pub const STAR_MAX_RADIUS: f32 = 50.0;

/// Starfield rotation, radians per tick.
pub const STARFIELD_SPIN: f32 = -0.0002;

/// Radius of a single star sphere.
const STAR_SIZE: f32 = 0.05;

/// Stars share materials in this many lightness steps.
const LIGHTNESS_BUCKETS: usize = 8;

const STAR_HUE: f32 = 0.6 * 360.0;
const STAR_SATURATION: f32 = 0.2;

/// Sun light strength and starting position.
const SUN_ILLUMINANCE: f32 = 10_000.0;
const SUN_START: Vec3 = Vec3::new(-2.0, 0.5, 1.5);

/// Fill light at the origin.
const FILL_INTENSITY: f32 = 100_000.0;
const FILL_RANGE: f32 = 20.0;

/// Marker for the rotating star shell.
#[derive(Component)]
pub struct Starfield;

/// Marker for the directional light that plays the Sun.
#[derive(Component)]
pub struct SunLight;

/// One star: position and lightness in `[0, 1)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub lightness: f32,
}

/// Plugin spawning the starfield and lights.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_starfield, spawn_lighting));
    }
}

/// Uniformly distributed stars in a shell between the min and max radius.
pub fn star_points(count: usize, rng: &mut impl Rng) -> Vec<Star> {
    (0..count)
        .map(|_| {
            let radius = rng.random_range(STAR_MIN_RADIUS..STAR_MAX_RADIUS);
            let theta = rng.random::<f32>() * std::f32::consts::TAU;
            let phi = (2.0 * rng.random::<f32>() - 1.0).clamp(-1.0, 1.0).acos();
            let position = Vec3::new(
                radius * phi.sin() * theta.cos(),
                radius * phi.sin() * theta.sin(),
                radius * phi.cos(),
            );
            Star {
                position,
                lightness: rng.random::<f32>(),
            }
        })
        .collect()
}

fn bucket(lightness: f32) -> usize {
    ((lightness * LIGHTNESS_BUCKETS as f32) as usize).min(LIGHTNESS_BUCKETS - 1)
}

fn spawn_starfield(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    settings: Res<ViewerSettings>,
    mut rng: ResMut<SceneRng>,
) -> Result {
    let star_mesh = meshes.add(Sphere::new(STAR_SIZE).mesh().ico(1)?);
    let palette: Vec<Handle<StandardMaterial>> = (0..LIGHTNESS_BUCKETS)
        .map(|i| {
            let lightness = (i as f32 + 0.5) / LIGHTNESS_BUCKETS as f32;
            materials.add(StandardMaterial {
                base_color: Color::hsl(STAR_HUE, STAR_SATURATION, lightness),
                unlit: true,
                ..default()
            })
        })
        .collect();

    let stars = star_points(settings.star_count, &mut rng.0);
    commands
        .spawn((
            Starfield,
            Name::new("Starfield"),
            Transform::default(),
            Visibility::default(),
            Spin(STARFIELD_SPIN),
        ))
        .with_children(|field| {
            for star in &stars {
                field.spawn((
                    Mesh3d(star_mesh.clone()),
                    MeshMaterial3d(palette[bucket(star.lightness)].clone()),
                    Transform::from_translation(star.position),
                ));
            }
        });

    info!("Spawned {} background stars", stars.len());
    Ok(())
}

fn spawn_lighting(mut commands: Commands) {
    commands.spawn((
        SunLight,
        Name::new("Sun"),
        DirectionalLight {
            illuminance: SUN_ILLUMINANCE,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(SUN_START).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    commands.spawn((
        Name::new("Fill light"),
        PointLight {
            intensity: FILL_INTENSITY,
            range: FILL_RANGE,
            shadows_enabled: false,
            ..default()
        },
        Transform::default(),
    ));

    info!("Scene lighting initialized");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_stars_lie_in_shell() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let stars = star_points(2000, &mut rng);
        assert_eq!(stars.len(), 2000);
        for star in &stars {
            let r = star.position.length();
            assert!(r >= STAR_MIN_RADIUS - 1e-3, "star too close: {r}");
            assert!(r <= STAR_MAX_RADIUS + 1e-3, "star too far: {r}");
            assert!((0.0..1.0).contains(&star.lightness));
        }
    }

    #[test]
    fn test_stars_cover_both_hemispheres() {
        let mut rng = ChaCha8Rng::seed_from_u64(8);
        let stars = star_points(500, &mut rng);
        assert!(stars.iter().any(|s| s.position.z > 0.0));
        assert!(stars.iter().any(|s| s.position.z < 0.0));
    }

    #[test]
    fn test_bucket_bounds() {
        assert_eq!(bucket(0.0), 0);
        assert_eq!(bucket(0.999), LIGHTNESS_BUCKETS - 1);
        assert_eq!(bucket(1.0), LIGHTNESS_BUCKETS - 1);
    }
}
