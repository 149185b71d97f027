//! NEO Explorer
//!
//! Interactive 3D view of the Earth, the Moon and a catalog of near-Earth
//! objects, with a small space quiz on the side.

use bevy::prelude::*;
use bevy_egui::EguiPlugin;

use neo_explorer::animation::AnimationPlugin;
use neo_explorer::camera::CameraPlugin;
use neo_explorer::input::InputPlugin;
use neo_explorer::layers::LayerPlugin;
use neo_explorer::render::RenderPlugin;
use neo_explorer::settings::{SceneRng, ViewerSettings};
use neo_explorer::ui::UiPlugin;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "NEO Explorer".into(),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        .insert_resource(ClearColor(Color::BLACK))
        // Settings must exist before the RNG and startup systems read them
        .insert_resource(ViewerSettings::default())
        .init_resource::<SceneRng>()
        .add_plugins((
            CameraPlugin,
            LayerPlugin,
            InputPlugin,
            AnimationPlugin,
            RenderPlugin,
            UiPlugin,
        ))
        .run();
}
