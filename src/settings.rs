//! Viewer configuration.
//!
//! All tunables live in a single resource so tests and the binary can
//! override them before the startup systems run.

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Window width above which the globe uses the high-detail mesh.
pub const HIGH_DETAIL_MIN_WIDTH: f32 = 768.0;

/// Globe subdivisions on wide windows.
pub const HIGH_GLOBE_DETAIL: u32 = 12;

/// Globe subdivisions on narrow windows.
pub const LOW_GLOBE_DETAIL: u32 = 8;

/// Configuration for the scene and its procedural content.
#[derive(Resource, Clone, Debug)]
pub struct ViewerSettings {
    /// Number of background stars.
    pub star_count: usize,
    /// Seed for procedural content. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Icosphere subdivisions for the globe. `None` picks from window width.
    pub globe_detail: Option<u32>,
    /// Length of one day/night cycle, in scene seconds.
    pub day_duration: f32,
    /// Camera distance under which asteroid name labels are drawn.
    pub label_distance: f32,
}

impl Default for ViewerSettings {
    fn default() -> Self {
        Self {
            star_count: 2000,
            seed: None,
            globe_detail: None,
            day_duration: 60.0,
            label_distance: 1.0,
        }
    }
}

impl ViewerSettings {
    /// Globe subdivisions for a window of the given logical width.
    pub fn globe_detail_for_width(&self, width: f32) -> u32 {
        self.globe_detail.unwrap_or(if width > HIGH_DETAIL_MIN_WIDTH {
            HIGH_GLOBE_DETAIL
        } else {
            LOW_GLOBE_DETAIL
        })
    }
}

/// Random source for procedural generation and asteroid tumbling.
#[derive(Resource)]
pub struct SceneRng(pub ChaCha8Rng);

impl SceneRng {
    pub fn from_settings(settings: &ViewerSettings) -> Self {
        match settings.seed {
            Some(seed) => Self(ChaCha8Rng::seed_from_u64(seed)),
            None => Self(ChaCha8Rng::from_os_rng()),
        }
    }
}

impl FromWorld for SceneRng {
    fn from_world(world: &mut World) -> Self {
        let settings = world
            .get_resource::<ViewerSettings>()
            .cloned()
            .unwrap_or_default();
        Self::from_settings(&settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_globe_detail_follows_width() {
        let settings = ViewerSettings::default();
        assert_eq!(settings.globe_detail_for_width(1280.0), HIGH_GLOBE_DETAIL);
        assert_eq!(settings.globe_detail_for_width(768.0), LOW_GLOBE_DETAIL);
    }

    #[test]
    fn test_globe_detail_override() {
        let settings = ViewerSettings {
            globe_detail: Some(3),
            ..default()
        };
        assert_eq!(settings.globe_detail_for_width(1920.0), 3);
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let settings = ViewerSettings {
            seed: Some(42),
            ..default()
        };
        let mut a = SceneRng::from_settings(&settings);
        let mut b = SceneRng::from_settings(&settings);
        assert_eq!(a.0.random::<u64>(), b.0.random::<u64>());
    }
}
