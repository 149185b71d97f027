//! Scene content: Earth and Moon, the asteroid field, the starfield and
//! lights, and asteroid labels.

pub mod asteroids;
pub mod background;
pub mod earth;
mod labels;

use bevy::prelude::*;

use self::asteroids::AsteroidPlugin;
use self::background::BackgroundPlugin;
use self::earth::EarthPlugin;
use self::labels::LabelPlugin;

pub use self::asteroids::{Asteroid, AsteroidRegistry};
pub use self::background::SunLight;
pub use self::labels::label_visible;

/// Plugin aggregating all scene rendering.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((EarthPlugin, AsteroidPlugin, BackgroundPlugin, LabelPlugin));
    }
}
