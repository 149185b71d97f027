//! Info popup for the selected body.

use bevy::prelude::*;
use bevy_egui::{EguiContexts, egui};

use crate::catalog::InfoCard;

use super::colors;

const PANEL_WIDTH: f32 = 320.0;

/// Card currently shown in the info popup, if any.
#[derive(Resource, Default, Debug)]
pub struct InfoPanel {
    card: Option<InfoCard>,
}

impl InfoPanel {
    pub fn show(&mut self, card: InfoCard) {
        self.card = Some(card);
    }

    pub fn hide(&mut self) {
        self.card = None;
    }

    pub fn card(&self) -> Option<&InfoCard> {
        self.card.as_ref()
    }
}

/// System that renders the info popup.
pub fn info_panel(mut contexts: EguiContexts, mut panel: ResMut<InfoPanel>) {
    let Some(ctx) = contexts.ctx_mut().ok() else {
        return;
    };
    let Some(card) = panel.card() else {
        return;
    };

    let mut close = false;
    egui::Window::new("info_panel")
        .title_bar(false)
        .resizable(false)
        .collapsible(false)
        .anchor(egui::Align2::LEFT_BOTTOM, egui::vec2(16.0, -16.0))
        .fixed_size(egui::vec2(PANEL_WIDTH, 0.0))
        .frame(
            egui::Frame::NONE
                .fill(colors::PANEL_BG)
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(8))
                .stroke(egui::Stroke::new(1.0, colors::PANEL_BORDER)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new(card.title)
                        .strong()
                        .size(18.0)
                        .color(egui::Color32::WHITE),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.small_button("\u{2715}").on_hover_text("Close").clicked() {
                        close = true;
                    }
                });
            });
            ui.add_space(4.0);
            ui.label(egui::RichText::new(card.fact).italics().color(colors::ACCENT));
            ui.separator();
            for line in &card.properties {
                ui.label(egui::RichText::new(line).color(colors::TEXT));
            }
            ui.add_space(6.0);
            ui.label(egui::RichText::new(card.description).color(colors::MUTED));
        });

    if close {
        panel.hide();
    }
}
