//! Scrollable list of near-Earth objects.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::catalog::NEO_CATALOG;
use crate::focus::FocusController;
use crate::input::select_body;
use crate::layers::{Layer, LayerVisibility};
use crate::render::asteroids::{Asteroid, AsteroidRegistry};
use crate::types::BodyKind;

use super::{InfoPanel, colors};

const LIST_WIDTH: f32 = 220.0;
const LIST_HEIGHT: f32 = 360.0;

/// Whether a list entry can be selected: it needs a spawned asteroid and
/// the asteroid layer must be on.
pub fn entry_selectable(entity: Option<Entity>, layers: &LayerVisibility) -> bool {
    entity.is_some() && layers.is_visible(Layer::Asteroids)
}

/// Left panel with one button per catalog entry.
pub fn neo_list_panel(
    mut contexts: EguiContexts,
    registry: Res<AsteroidRegistry>,
    layers: Res<LayerVisibility>,
    asteroids: Query<&Asteroid>,
    mut focus: ResMut<FocusController>,
    mut panel: ResMut<InfoPanel>,
) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    let focused = focus.focused_asteroid();
    let mut clicked = None;

    egui::Window::new("Near-Earth Objects")
        .anchor(egui::Align2::LEFT_TOP, egui::vec2(12.0, 12.0))
        .resizable(false)
        .default_open(true)
        .fixed_size(egui::vec2(LIST_WIDTH, LIST_HEIGHT))
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(10))
                .corner_radius(egui::CornerRadius::same(6))
                .stroke(egui::Stroke::new(1.0, colors::PANEL_BORDER)),
        )
        .show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                for (index, record) in NEO_CATALOG.iter().enumerate() {
                    let entity = registry.get(index);
                    let selected = entity.is_some() && entity == focused;
                    let button = egui::Button::new(record.name)
                        .selected(selected)
                        .min_size(egui::vec2(LIST_WIDTH - 20.0, 0.0));
                    if ui.add_enabled(entry_selectable(entity, &layers), button).clicked() {
                        clicked = Some(index);
                    }
                }
            });
        });

    let Some(index) = clicked else {
        return;
    };
    let Some(entity) = registry.get(index) else {
        return;
    };
    let Ok(asteroid) = asteroids.get(entity) else {
        warn!("NEO list entry {index} has no asteroid entity");
        return;
    };
    select_body(
        BodyKind::Asteroid(index),
        entity,
        asteroid.size,
        &mut focus,
        &mut panel,
    );
}
