//! Asteroid factory.
//!
//! Builds one entity per catalog entry: a lumpy sphere mesh, a speckled
//! procedural texture, a random earthy tint and a random circular orbit.

use bevy::asset::RenderAssetUsages;
use bevy::mesh::VertexAttributeValues;
use bevy::prelude::*;
use bevy::render::render_resource::{Extent3d, TextureDimension, TextureFormat};
use rand::Rng;

use crate::catalog::{NEO_CATALOG, record_size};
use crate::layers::Layer;
use crate::orbit::OrbitState;
use crate::settings::SceneRng;
use crate::types::{BodyKind, PickRadius};

/// UV sphere resolution for asteroid meshes.
pub const ASTEROID_SECTORS: u32 = 20;
pub const ASTEROID_STACKS: u32 = 20;

/// Maximum outward vertex displacement, as a fraction of the radius.
pub const SURFACE_ROUGHNESS: f32 = 0.2;

/// Side length of the procedural speckle texture, in pixels.
pub const TEXTURE_SIZE: u32 = 128;

/// Number of speckles painted onto each texture.
pub const SPECKLE_COUNT: usize = 1000;

/// Largest speckle radius, in pixels.
pub const MAX_SPECKLE_RADIUS: f32 = 2.0;

/// Largest speckle opacity.
pub const MAX_SPECKLE_ALPHA: f32 = 0.5;

/// Per-axis tumble rate bound, radians per tick.
pub const TUMBLE_RATE: f32 = 0.001;

/// Earthy palette asteroids are tinted from.
pub const ASTEROID_PALETTE: [u32; 5] = [0x8B4513, 0xA0522D, 0xD2691E, 0xCD853F, 0xDEB887];

/// An asteroid instance built from a catalog entry.
#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Asteroid {
    /// Index into `NEO_CATALOG`.
    pub index: usize,
    /// Rendered (unperturbed) radius in scene units.
    pub size: f32,
}

/// Marker for the parent of all asteroids; toggled as one layer.
#[derive(Component)]
pub struct AsteroidGroup;

/// Asteroid entities by catalog index.
#[derive(Resource, Default, Debug)]
pub struct AsteroidRegistry(pub Vec<Entity>);

impl AsteroidRegistry {
    pub fn get(&self, index: usize) -> Option<Entity> {
        self.0.get(index).copied()
    }
}

/// Plugin spawning the asteroid field.
pub struct AsteroidPlugin;

impl Plugin for AsteroidPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AsteroidRegistry>()
            .add_systems(Startup, spawn_asteroids);
    }
}

/// Push every vertex out to a random radius in `[radius, radius·(1 + roughness)]`.
pub fn perturb_vertices(positions: &mut [[f32; 3]], radius: f32, rng: &mut impl Rng) {
    for position in positions.iter_mut() {
        let direction = Vec3::from_array(*position).normalize_or(Vec3::Y);
        let scale = radius * (1.0 + SURFACE_ROUGHNESS * rng.random::<f32>());
        *position = (direction * scale).to_array();
    }
}

/// Build a lumpy sphere mesh of the given base radius.
pub fn asteroid_mesh(radius: f32, rng: &mut impl Rng) -> Mesh {
    let mut mesh = Sphere::new(radius)
        .mesh()
        .uv(ASTEROID_SECTORS, ASTEROID_STACKS);

    if let Some(VertexAttributeValues::Float32x3(positions)) =
        mesh.attribute_mut(Mesh::ATTRIBUTE_POSITION)
    {
        perturb_vertices(positions, radius, rng);
    }
    mesh.compute_normals();
    mesh
}

/// RGBA8 pixels of a black square covered in faint white speckles.
pub fn speckle_pixels(rng: &mut impl Rng) -> Vec<u8> {
    let size = TEXTURE_SIZE as usize;
    let mut pixels = vec![0u8; size * size * 4];
    for alpha in pixels.iter_mut().skip(3).step_by(4) {
        *alpha = 255;
    }

    for _ in 0..SPECKLE_COUNT {
        let alpha = rng.random::<f32>() * MAX_SPECKLE_ALPHA;
        let cx = rng.random::<f32>() * TEXTURE_SIZE as f32;
        let cy = rng.random::<f32>() * TEXTURE_SIZE as f32;
        let r = rng.random::<f32>() * MAX_SPECKLE_RADIUS;

        let x0 = (cx - r).floor().max(0.0) as usize;
        let x1 = ((cx + r).ceil() as usize).min(size - 1);
        let y0 = (cy - r).floor().max(0.0) as usize;
        let y1 = ((cy + r).ceil() as usize).min(size - 1);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - cx;
                let dy = y as f32 + 0.5 - cy;
                if dx * dx + dy * dy > r * r {
                    continue;
                }
                let i = (y * size + x) * 4;
                for channel in &mut pixels[i..i + 3] {
                    let c = *channel as f32;
                    *channel = (c + (255.0 - c) * alpha).round() as u8;
                }
            }
        }
    }
    pixels
}

/// Speckle texture as an image asset.
pub fn speckle_image(rng: &mut impl Rng) -> Image {
    Image::new(
        Extent3d {
            width: TEXTURE_SIZE,
            height: TEXTURE_SIZE,
            depth_or_array_layers: 1,
        },
        TextureDimension::D2,
        speckle_pixels(rng),
        TextureFormat::Rgba8UnormSrgb,
        RenderAssetUsages::RENDER_WORLD,
    )
}

/// Pick a tint from the palette.
pub fn palette_color(rng: &mut impl Rng) -> Color {
    let hex = ASTEROID_PALETTE[rng.random_range(0..ASTEROID_PALETTE.len())];
    Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// Spawn one asteroid per catalog entry under a shared group.
pub fn spawn_asteroids(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut images: ResMut<Assets<Image>>,
    mut rng: ResMut<SceneRng>,
    mut registry: ResMut<AsteroidRegistry>,
) {
    let rng = &mut rng.0;
    let group = commands
        .spawn((
            AsteroidGroup,
            Name::new("Near-Earth objects"),
            Transform::default(),
            Visibility::default(),
            Layer::Asteroids,
        ))
        .id();

    registry.0.clear();
    for (index, record) in NEO_CATALOG.iter().enumerate() {
        let size = record_size(record);
        let orbit = OrbitState::random(record.distance_au, rng);

        let material = materials.add(StandardMaterial {
            base_color: palette_color(rng),
            base_color_texture: Some(images.add(speckle_image(rng))),
            perceptual_roughness: 0.8,
            metallic: 0.2,
            ..default()
        });

        let entity = commands
            .spawn((
                Name::new(record.name),
                Asteroid { index, size },
                BodyKind::Asteroid(index),
                PickRadius(size * (1.0 + SURFACE_ROUGHNESS)),
                Mesh3d(meshes.add(asteroid_mesh(size, rng))),
                MeshMaterial3d(material),
                Transform::from_translation(orbit.position()),
                orbit,
                ChildOf(group),
            ))
            .id();
        registry.0.push(entity);
    }

    info!("Spawned {} near-Earth objects", registry.0.len());
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_perturbed_vertices_within_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let radius = 0.01;
        let mesh = asteroid_mesh(radius, &mut rng);
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("asteroid mesh has no positions");
        };
        assert!(!positions.is_empty());
        for p in positions {
            let len = Vec3::from_array(*p).length();
            assert!(len >= radius * 0.9999, "vertex too close: {len}");
            assert!(len <= radius * 1.2001, "vertex too far: {len}");
        }
        assert!(mesh.attribute(Mesh::ATTRIBUTE_NORMAL).is_some());
    }

    #[test]
    fn test_speckle_texture_layout() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let pixels = speckle_pixels(&mut rng);
        assert_eq!(pixels.len(), (TEXTURE_SIZE * TEXTURE_SIZE * 4) as usize);
        // Fully opaque everywhere, greyscale speckles only.
        for px in pixels.chunks_exact(4) {
            assert_eq!(px[3], 255);
            assert_eq!(px[0], px[1]);
            assert_eq!(px[1], px[2]);
        }
        // Some pixels got painted.
        assert!(pixels.chunks_exact(4).any(|px| px[0] > 0));
    }

    #[test]
    fn test_palette_color_comes_from_palette() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let palette: Vec<Color> = ASTEROID_PALETTE
            .iter()
            .map(|hex| Color::srgb_u8((hex >> 16) as u8, (hex >> 8) as u8, *hex as u8))
            .collect();
        for _ in 0..50 {
            assert!(palette.contains(&palette_color(&mut rng)));
        }
    }

    #[test]
    fn test_registry_lookup() {
        let mut world = World::new();
        let a = world.spawn_empty().id();
        let b = world.spawn_empty().id();
        let registry = AsteroidRegistry(vec![a, b]);
        assert_eq!(registry.get(1), Some(b));
        assert_eq!(registry.get(2), None);
    }
}
