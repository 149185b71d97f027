//! Controls help and the camera-mode button.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::focus::{FocusController, FocusState};
use crate::input::apply_camera_toggle;
use crate::layers::{Layer, LayerVisibility};

use super::{InfoPanel, QuizWindow, colors};

/// Key bindings listed in the help panel.
const SHORTCUTS: [(&str, &str); 6] = [
    ("Left drag", "Rotate"),
    ("Right drag", "Pan (free camera)"),
    ("Wheel", "Zoom"),
    ("Click", "Select a body"),
    ("C / N / A", "Clouds / night lights / NEOs"),
    ("Q", "Quiz"),
];

/// Label of the camera-mode button for the current focus.
pub fn camera_mode_label(state: FocusState) -> &'static str {
    match state {
        FocusState::Earth => "Free camera",
        FocusState::Asteroid(_) | FocusState::Free => "Back to Earth",
    }
}

/// Top-right panel: shortcut help, layer checkboxes and camera toggle.
pub fn controls_panel(
    mut contexts: EguiContexts,
    mut focus: ResMut<FocusController>,
    mut panel: ResMut<InfoPanel>,
    mut layers: ResMut<LayerVisibility>,
    mut quiz: ResMut<QuizWindow>,
) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };

    egui::Window::new("Controls")
        .anchor(egui::Align2::RIGHT_TOP, egui::vec2(-12.0, 12.0))
        .resizable(false)
        .default_open(true)
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(10))
                .corner_radius(egui::CornerRadius::same(6))
                .stroke(egui::Stroke::new(1.0, colors::PANEL_BORDER)),
        )
        .show(ctx, |ui| {
            egui::Grid::new("shortcuts").num_columns(2).show(ui, |ui| {
                for (input, action) in SHORTCUTS {
                    ui.label(egui::RichText::new(input).strong().color(colors::TEXT));
                    ui.label(egui::RichText::new(action).color(colors::MUTED));
                    ui.end_row();
                }
            });

            ui.separator();
            for layer in [Layer::Clouds, Layer::NightLights, Layer::Asteroids] {
                let mut visible = layers.is_visible(layer);
                if ui.checkbox(&mut visible, layer.label()).changed() {
                    layers.toggle(layer);
                }
            }

            ui.separator();
            ui.horizontal(|ui| {
                if ui.button(camera_mode_label(focus.state())).clicked() {
                    let state = apply_camera_toggle(&mut focus, &mut panel);
                    debug!("Camera mode: {state:?}");
                }
                let quiz_label = if quiz.open { "Close quiz" } else { "Quiz" };
                if ui.button(quiz_label).clicked() {
                    quiz.open = !quiz.open;
                }
            });
        });
}
