//! Asteroid name labels drawn with egui.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, EguiPrimaryContextPass, egui};

use crate::camera::MainCamera;
use crate::catalog::NEO_CATALOG;
use crate::focus::FocusController;
use crate::layers::{Layer, LayerVisibility};
use crate::render::asteroids::Asteroid;
use crate::settings::ViewerSettings;

/// Screen-space gap between the asteroid and its label.
const LABEL_OFFSET: f32 = 12.0;

/// Plugin drawing asteroid labels.
pub struct LabelPlugin;

impl Plugin for LabelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(EguiPrimaryContextPass, draw_asteroid_labels);
    }
}

/// Whether an asteroid at `distance` from the camera gets a label.
pub fn label_visible(distance: f32, label_distance: f32, focused: bool) -> bool {
    focused || distance < label_distance
}

fn draw_asteroid_labels(
    mut contexts: EguiContexts,
    asteroids: Query<(Entity, &Asteroid, &GlobalTransform)>,
    camera: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    layers: Res<LayerVisibility>,
    focus: Res<FocusController>,
    settings: Res<ViewerSettings>,
) -> Result {
    if !layers.is_visible(Layer::Asteroids) {
        return Ok(());
    }
    let Ok((camera, camera_transform)) = camera.single() else {
        return Ok(());
    };
    let eye = camera_transform.translation();
    let focused = focus.focused_asteroid();

    let ctx = contexts.ctx_mut()?;
    let painter = ctx.layer_painter(egui::LayerId::background());
    let font = egui::FontId::proportional(13.0);

    for (entity, asteroid, transform) in asteroids.iter() {
        let position = transform.translation();
        let is_focused = focused == Some(entity);
        if !label_visible(eye.distance(position), settings.label_distance, is_focused) {
            continue;
        }
        let Some(record) = NEO_CATALOG.get(asteroid.index) else {
            continue;
        };
        let Ok(screen) = camera.world_to_viewport(camera_transform, position) else {
            continue;
        };

        let anchor = egui::pos2(screen.x, screen.y - LABEL_OFFSET);
        painter.text(
            anchor + egui::vec2(1.0, 1.0),
            egui::Align2::CENTER_BOTTOM,
            record.name,
            font.clone(),
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, 180),
        );
        painter.text(
            anchor,
            egui::Align2::CENTER_BOTTOM,
            record.name,
            font.clone(),
            egui::Color32::from_rgba_unmultiplied(220, 220, 220, 230),
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_near_camera() {
        assert!(label_visible(0.5, 1.0, false));
        assert!(!label_visible(1.5, 1.0, false));
    }

    #[test]
    fn test_focused_label_always_shown() {
        assert!(label_visible(100.0, 1.0, true));
    }
}
