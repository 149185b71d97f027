//! Earth and Moon spawning.
//!
//! The Earth is a tilted group of concentric spheres (surface, night lights,
//! clouds, atmosphere glow) that spin independently. The Moon hangs off a
//! pivot at the origin so rotating the pivot carries it around its orbit.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::layers::Layer;
use crate::settings::ViewerSettings;
use crate::types::{
    BodyKind, EARTH_RADIUS, EARTH_TILT_DEG, MOON_DISTANCE, MOON_RADIUS, PickRadius, Spin,
};

/// Surface, night-light and glow spin, radians per tick.
pub const EARTH_SPIN: f32 = 0.002;

/// Cloud layer spin; slightly faster than the surface.
pub const CLOUD_SPIN: f32 = 0.0023;

/// Moon pivot rotation (orbital motion), radians per tick.
pub const MOON_ORBIT_SPIN: f32 = 0.00005;

/// Moon self-rotation, radians per tick.
pub const MOON_SPIN: f32 = 0.0005;

/// Cloud shell scale relative to the surface.
pub const CLOUD_SCALE: f32 = 1.003;

/// Atmosphere glow shell scale relative to the surface.
pub const GLOW_SCALE: f32 = 1.01;

/// Fallback window width when no primary window exists (headless runs).
const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Texture paths under `assets/`.
pub mod textures {
    pub const EARTH_MAP: &str = "textures/00_earthmap1k.jpg";
    pub const EARTH_LIGHTS: &str = "textures/03_earthlights1k.jpg";
    pub const EARTH_CLOUDS: &str = "textures/04_earthcloudmap.jpg";
    pub const MOON_MAP: &str = "textures/06_moonmap4k.jpg";
}

/// Marker for the tilted Earth group.
#[derive(Component)]
pub struct EarthGroup;

/// Marker for the Moon's orbital pivot.
#[derive(Component)]
pub struct MoonPivot;

/// Plugin spawning the Earth and Moon.
pub struct EarthPlugin;

impl Plugin for EarthPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_earth, spawn_moon));
    }
}

/// Spawn the Earth group with its four shells.
pub fn spawn_earth(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
    settings: Res<ViewerSettings>,
    windows: Query<&Window, With<PrimaryWindow>>,
) -> Result {
    let width = windows
        .single()
        .map(|w| w.width())
        .unwrap_or(DEFAULT_WINDOW_WIDTH);
    let detail = settings.globe_detail_for_width(width);

    // All shells share one icosphere; scale sets the layering.
    let globe = meshes.add(Sphere::new(EARTH_RADIUS).mesh().ico(detail)?);

    let surface = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(textures::EARTH_MAP)),
        perceptual_roughness: 0.7,
        reflectance: 0.3,
        ..default()
    });

    let night_lights = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(textures::EARTH_LIGHTS)),
        unlit: true,
        alpha_mode: AlphaMode::Add,
        ..default()
    });

    let clouds = materials.add(StandardMaterial {
        base_color: Color::srgba(1.0, 1.0, 1.0, 0.5),
        base_color_texture: Some(asset_server.load(textures::EARTH_CLOUDS)),
        alpha_mode: AlphaMode::Add,
        ..default()
    });

    let glow = materials.add(StandardMaterial {
        base_color: Color::srgba(0.0, 0.53, 1.0, 0.12),
        unlit: true,
        alpha_mode: AlphaMode::Add,
        ..default()
    });

    commands
        .spawn((
            EarthGroup,
            Name::new("Earth group"),
            Transform::from_rotation(Quat::from_rotation_z(EARTH_TILT_DEG.to_radians())),
            Visibility::default(),
        ))
        .with_children(|group| {
            group.spawn((
                Name::new("Earth"),
                Mesh3d(globe.clone()),
                MeshMaterial3d(surface),
                Transform::default(),
                Spin(EARTH_SPIN),
                BodyKind::Earth,
                PickRadius(EARTH_RADIUS),
            ));
            group.spawn((
                Name::new("Night lights"),
                Mesh3d(globe.clone()),
                MeshMaterial3d(night_lights),
                Transform::default(),
                Visibility::default(),
                Spin(EARTH_SPIN),
                Layer::NightLights,
            ));
            group.spawn((
                Name::new("Clouds"),
                Mesh3d(globe.clone()),
                MeshMaterial3d(clouds),
                Transform::from_scale(Vec3::splat(CLOUD_SCALE)),
                Visibility::default(),
                Spin(CLOUD_SPIN),
                Layer::Clouds,
            ));
            group.spawn((
                Name::new("Atmosphere glow"),
                Mesh3d(globe),
                MeshMaterial3d(glow),
                Transform::from_scale(Vec3::splat(GLOW_SCALE)),
                Spin(EARTH_SPIN),
            ));
        });

    info!("Spawned Earth (globe detail {detail})");
    Ok(())
}

/// Spawn the Moon on its pivot.
pub fn spawn_moon(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    asset_server: Res<AssetServer>,
) {
    let mesh = meshes.add(Sphere::new(MOON_RADIUS).mesh().uv(32, 32));
    let material = materials.add(StandardMaterial {
        base_color_texture: Some(asset_server.load(textures::MOON_MAP)),
        perceptual_roughness: 0.9,
        ..default()
    });

    commands
        .spawn((
            MoonPivot,
            Name::new("Moon pivot"),
            Transform::default(),
            Visibility::default(),
            Spin(MOON_ORBIT_SPIN),
        ))
        .with_children(|pivot| {
            pivot.spawn((
                Name::new("Moon"),
                Mesh3d(mesh),
                MeshMaterial3d(material),
                Transform::from_xyz(MOON_DISTANCE, 0.0, 0.0),
                Spin(MOON_SPIN),
                BodyKind::Moon,
                PickRadius(MOON_RADIUS),
            ));
        });

    info!("Spawned Moon at {MOON_DISTANCE} units");
}
